//! Piece module - pieces on the board
//!
//! A piece has a stable [`PieceId`] handed out by the engine when it is created,
//! plus a coordinate that changes whenever the piece moves. Equality and hashing
//! go through the id only, so a piece compares equal to itself before and after
//! a swap or a fall.

use std::hash::{Hash, Hasher};

use crate::types::{Coord, Kind};

/// Stable identity of a piece for its whole lifetime on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u32);

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A typed piece at a board coordinate
#[derive(Debug, Clone, Copy)]
pub struct Piece {
    pub id: PieceId,
    pub coord: Coord,
    pub kind: Kind,
}

impl Piece {
    pub fn new(id: PieceId, coord: Coord, kind: Kind) -> Self {
        Self { id, coord, kind }
    }

    pub fn column(&self) -> usize {
        self.coord.column
    }

    pub fn row(&self) -> usize {
        self.coord.row
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Piece {}

impl Hash for Piece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}@{}", self.id, self.kind.as_str(), self.coord)
    }
}
