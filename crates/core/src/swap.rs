//! Swap module - an unordered pair of adjacent pieces
//!
//! `Swap::new(a, b)` and `Swap::new(b, a)` are the same swap: equality is
//! symmetric and the hash is order-independent, so either orientation finds
//! the same entry in a set of legal swaps.

use std::hash::{Hash, Hasher};

use crate::piece::{Piece, PieceId};

/// Exchange of two pieces' positions
#[derive(Debug, Clone, Copy)]
pub struct Swap {
    pub a: Piece,
    pub b: Piece,
}

impl Swap {
    pub fn new(a: Piece, b: Piece) -> Self {
        Self { a, b }
    }

    /// Ids of both pieces, smaller first
    pub fn ids(&self) -> (PieceId, PieceId) {
        if self.a.id <= self.b.id {
            (self.a.id, self.b.id)
        } else {
            (self.b.id, self.a.id)
        }
    }

    /// True when `piece` is one of the two swapped pieces
    pub fn involves(&self, piece: PieceId) -> bool {
        self.a.id == piece || self.b.id == piece
    }

    /// The same swap seen from the other piece
    pub fn reversed(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
}

impl PartialEq for Swap {
    fn eq(&self, other: &Self) -> bool {
        self.ids() == other.ids()
    }
}

impl Eq for Swap {}

impl Hash for Swap {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ids().hash(state);
    }
}

impl std::fmt::Display for Swap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "swap {} with {}", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coord, Kind};
    use std::collections::HashSet;

    fn piece(id: u32, column: usize, row: usize) -> Piece {
        Piece::new(PieceId(id), Coord::new(column, row), Kind::Ladybug)
    }

    #[test]
    fn test_swap_equality_is_symmetric() {
        let swap = Swap::new(piece(1, 0, 0), piece(2, 1, 0));
        assert_eq!(swap, swap.reversed());
        assert_ne!(swap, Swap::new(piece(1, 0, 0), piece(3, 0, 1)));
    }

    #[test]
    fn test_swap_set_membership_ignores_order() {
        let mut set = HashSet::new();
        set.insert(Swap::new(piece(4, 2, 2), piece(5, 2, 3)));
        assert!(set.contains(&Swap::new(piece(5, 2, 3), piece(4, 2, 2))));
        assert!(!set.insert(Swap::new(piece(5, 2, 3), piece(4, 2, 2))));
    }

    #[test]
    fn test_swap_involves() {
        let swap = Swap::new(piece(1, 0, 0), piece(2, 1, 0));
        assert!(swap.involves(PieceId(2)));
        assert!(!swap.involves(PieceId(3)));
    }
}
