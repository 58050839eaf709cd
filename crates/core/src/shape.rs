//! Board shape module - which cells of the bounding rectangle are playable
//!
//! The shape is supplied once per level and never changes afterwards. Cells
//! outside the shape never hold pieces. The shape also owns the board
//! dimensions; nothing else in the engine hard-codes a width or height.

use crate::grid::Grid;
use crate::types::{Coord, MIN_CHAIN_LEN};

/// Immutable set of playable cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardShape {
    tiles: Grid<()>,
}

impl BoardShape {
    /// Build a shape from per-cell flags in row-major order, bottom row first
    ///
    /// # Panics
    ///
    /// Panics if `playable.len() != columns * rows`.
    pub fn new(columns: usize, rows: usize, playable: &[bool]) -> Self {
        assert_eq!(
            playable.len(),
            columns * rows,
            "shape flags do not match {}x{} board",
            columns,
            rows
        );
        let mut tiles = Grid::new(columns, rows);
        for (idx, &flag) in playable.iter().enumerate() {
            if flag {
                tiles.set(idx % columns, idx / columns, Some(()));
            }
        }
        Self { tiles }
    }

    /// A rectangle where every cell is playable
    pub fn full(columns: usize, rows: usize) -> Self {
        Self::new(columns, rows, &vec![true; columns * rows])
    }

    /// Build a shape from text rows listed top to bottom
    ///
    /// `.` and space mark holes; any other character is a playable cell. The
    /// first string is the top row of the board, matching how levels are
    /// written down.
    ///
    /// # Panics
    ///
    /// Panics if the rows are not all the same length.
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_crush_core::BoardShape;
    ///
    /// let shape = BoardShape::from_pattern(&[
    ///     "xxx.",
    ///     "xxxx",
    /// ]);
    /// assert_eq!(shape.columns(), 4);
    /// assert!(shape.is_playable(0, 0));
    /// assert!(!shape.is_playable(3, 1));
    /// ```
    pub fn from_pattern(pattern: &[&str]) -> Self {
        let rows = pattern.len();
        let columns = pattern.first().map_or(0, |line| line.chars().count());
        let mut flags = vec![false; columns * rows];
        for (top_index, line) in pattern.iter().enumerate() {
            assert_eq!(
                line.chars().count(),
                columns,
                "pattern row {} has the wrong width",
                top_index
            );
            let row = rows - top_index - 1;
            for (column, c) in line.chars().enumerate() {
                flags[row * columns + column] = !matches!(c, '.' | ' ');
            }
        }
        Self::new(columns, rows, &flags)
    }

    pub fn columns(&self) -> usize {
        self.tiles.columns()
    }

    pub fn rows(&self) -> usize {
        self.tiles.rows()
    }

    /// Check whether (column, row) lies inside the bounding rectangle
    pub fn contains(&self, column: usize, row: usize) -> bool {
        self.tiles.contains(column, row)
    }

    /// Check whether (column, row) may hold a piece
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the bounding rectangle.
    #[track_caller]
    pub fn is_playable(&self, column: usize, row: usize) -> bool {
        self.tiles.is_occupied(column, row)
    }

    /// Number of playable cells
    pub fn playable_count(&self) -> usize {
        self.tiles.occupied_count()
    }

    /// Iterate over playable cells in row-major order
    pub fn playable_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.tiles
            .iter()
            .filter_map(|(coord, tile)| tile.map(|_| coord))
    }

    /// Whether the shape has at least one straight playable span long enough
    /// to ever hold a chain
    pub fn has_chain_span(&self) -> bool {
        let (columns, rows) = (self.columns(), self.rows());
        let horizontal = (0..rows).any(|row| {
            longest_run((0..columns).map(|column| self.is_playable(column, row))) >= MIN_CHAIN_LEN
        });
        horizontal
            || (0..columns).any(|column| {
                longest_run((0..rows).map(|row| self.is_playable(column, row))) >= MIN_CHAIN_LEN
            })
    }
}

fn longest_run(flags: impl Iterator<Item = bool>) -> usize {
    let mut best = 0;
    let mut current = 0;
    for flag in flags {
        current = if flag { current + 1 } else { 0 };
        best = best.max(current);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_shape_is_all_playable() {
        let shape = BoardShape::full(9, 9);
        assert_eq!(shape.playable_count(), 81);
        assert!(shape.has_chain_span());
        assert_eq!(shape.playable_cells().count(), 81);
    }

    #[test]
    fn test_pattern_is_flipped_bottom_up() {
        let shape = BoardShape::from_pattern(&["x..", "...", "..x"]);
        // Top-left character lands on the highest row.
        assert!(shape.is_playable(0, 2));
        assert!(shape.is_playable(2, 0));
        assert!(!shape.is_playable(0, 0));
        assert_eq!(shape.playable_count(), 2);
    }

    #[test]
    fn test_chain_span_detection() {
        let checker = BoardShape::from_pattern(&["x.x", ".x.", "x.x"]);
        assert!(!checker.has_chain_span());

        let column = BoardShape::from_pattern(&["x..", "x..", "x.."]);
        assert!(column.has_chain_span());

        let short = BoardShape::from_pattern(&["xx.xx"]);
        assert!(!short.has_chain_span());
    }

    #[test]
    #[should_panic(expected = "wrong width")]
    fn test_ragged_pattern_panics() {
        let _ = BoardShape::from_pattern(&["xxx", "xx"]);
    }
}
