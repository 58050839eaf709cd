//! Chain module - a run of three or more same-kind pieces
//!
//! Pieces are kept in scan order (left to right, or bottom to top). Equality
//! and hashing use the axis plus the set of member ids, so a chain collection
//! behaves like a set keyed by membership.

use std::hash::{Hash, Hasher};

use crate::piece::{Piece, PieceId};
use crate::scoring::chain_score;
use crate::types::{ChainAxis, Kind};

/// Ordered same-kind run tagged with its axis
#[derive(Debug, Clone)]
pub struct Chain {
    axis: ChainAxis,
    pieces: Vec<Piece>,
    score: u32,
}

impl Chain {
    /// Start an empty chain; pieces are appended in scan order
    pub fn new(axis: ChainAxis) -> Self {
        Self {
            axis,
            pieces: Vec::new(),
            score: 0,
        }
    }

    pub fn push(&mut self, piece: Piece) {
        self.pieces.push(piece);
    }

    pub fn axis(&self) -> ChainAxis {
        self.axis
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Kind shared by every member (`None` for an empty chain)
    pub fn kind(&self) -> Option<Kind> {
        self.pieces.first().map(|p| p.kind)
    }

    pub fn first(&self) -> Option<&Piece> {
        self.pieces.first()
    }

    pub fn last(&self) -> Option<&Piece> {
        self.pieces.last()
    }

    pub fn contains(&self, id: PieceId) -> bool {
        self.pieces.iter().any(|p| p.id == id)
    }

    /// Score assigned by [`Chain::assign_score`]; 0 until then
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Derive the score from the current length
    pub fn assign_score(&mut self) -> u32 {
        self.score = chain_score(self.len());
        self.score
    }

    fn sorted_ids(&self) -> Vec<PieceId> {
        let mut ids: Vec<PieceId> = self.pieces.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids
    }
}

impl PartialEq for Chain {
    fn eq(&self, other: &Self) -> bool {
        self.axis == other.axis && self.sorted_ids() == other.sorted_ids()
    }
}

impl Eq for Chain {}

impl Hash for Chain {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.axis.hash(state);
        self.sorted_ids().hash(state);
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} chain of {}", self.axis.as_str(), self.len())?;
        if let Some(kind) = self.kind() {
            write!(f, " {}", kind.as_str())?;
        }
        if let (Some(first), Some(last)) = (self.first(), self.last()) {
            write!(f, " {}..{}", first.coord, last.coord)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coord;
    use std::collections::HashSet;

    fn run(axis: ChainAxis, ids: &[u32]) -> Chain {
        let mut chain = Chain::new(axis);
        for (i, id) in ids.iter().enumerate() {
            chain.push(Piece::new(PieceId(*id), Coord::new(i, 0), Kind::Bee));
        }
        chain
    }

    #[test]
    fn test_chain_equality_ignores_order() {
        let a = run(ChainAxis::Horizontal, &[1, 2, 3]);
        let b = run(ChainAxis::Horizontal, &[3, 1, 2]);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_chain_axis_matters() {
        let h = run(ChainAxis::Horizontal, &[1, 2, 3]);
        let v = run(ChainAxis::Vertical, &[1, 2, 3]);
        assert_ne!(h, v);
    }

    #[test]
    fn test_assign_score() {
        let mut chain = run(ChainAxis::Vertical, &[1, 2, 3, 4]);
        assert_eq!(chain.score(), 0);
        assert_eq!(chain.assign_score(), 120);
        assert_eq!(chain.score(), 120);
        assert_eq!(chain.kind(), Some(Kind::Bee));
        assert!(chain.contains(PieceId(4)));
    }
}
