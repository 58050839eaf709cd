//! Shared helpers for integration tests

#![allow(dead_code)]

use tile_crush::core::{BoardShape, MatchEngine};
use tile_crush::types::{Coord, Kind};

/// Build an engine from text rows listed top to bottom
///
/// Kind glyphs (`b e l f s k`) place a piece, `x` marks an empty playable
/// cell, `.` marks a hole.
pub fn engine_from(pattern: &[&str]) -> MatchEngine {
    let shape = BoardShape::from_pattern(pattern);
    let mut engine = MatchEngine::with_seed(shape, 1);
    let rows = pattern.len();
    for (top_index, line) in pattern.iter().enumerate() {
        for (column, c) in line.chars().enumerate() {
            if let Some(kind) = Kind::from_char(c) {
                engine.place_piece(column, rows - top_index - 1, kind);
            }
        }
    }
    engine
}

/// Every (id, coordinate, kind) on the board, row-major
pub fn layout(engine: &MatchEngine) -> Vec<(u32, Coord, Kind)> {
    engine.pieces().map(|p| (p.id.0, p.coord, p.kind)).collect()
}

/// Every orthogonally adjacent pair of cells, each pair listed once
pub fn adjacent_pairs(columns: usize, rows: usize) -> Vec<(Coord, Coord)> {
    let mut pairs = Vec::new();
    for row in 0..rows {
        for column in 0..columns {
            if column + 1 < columns {
                pairs.push((Coord::new(column, row), Coord::new(column + 1, row)));
            }
            if row + 1 < rows {
                pairs.push((Coord::new(column, row), Coord::new(column, row + 1)));
            }
        }
    }
    pairs
}
