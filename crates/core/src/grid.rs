//! Grid module - fixed-size two-dimensional storage
//!
//! The grid maps `(column, row)` to an optional occupant. It uses a flat
//! vector in row-major order (`row * columns + column`) for cache locality;
//! the dimensions are fixed at construction.
//!
//! Out-of-bounds access is a caller bug: `get`, `set` and friends panic instead
//! of clamping or silently ignoring the request. Use [`Grid::contains`] to test
//! a coordinate first when it may legitimately fall outside the board.

use crate::types::Coord;

/// Rectangular grid of optional cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    columns: usize,
    rows: usize,
    /// Flat array of cells, row-major order (row * columns + column)
    cells: Vec<Option<T>>,
}

impl<T> Grid<T> {
    /// Create an empty grid
    pub fn new(columns: usize, rows: usize) -> Self {
        let mut cells = Vec::with_capacity(columns * rows);
        cells.resize_with(columns * rows, || None);
        Self {
            columns,
            rows,
            cells,
        }
    }

    /// Calculate flat index from (column, row) coordinates
    #[inline(always)]
    fn index(&self, column: usize, row: usize) -> Option<usize> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        Some(row * self.columns + column)
    }

    #[inline]
    #[track_caller]
    fn checked_index(&self, column: usize, row: usize) -> usize {
        match self.index(column, row) {
            Some(idx) => idx,
            None => panic!(
                "grid access ({}, {}) out of bounds for {}x{} grid",
                column, row, self.columns, self.rows
            ),
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Check whether (column, row) lies inside the grid
    pub fn contains(&self, column: usize, row: usize) -> bool {
        column < self.columns && row < self.rows
    }

    /// Get the occupant at (column, row)
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    #[track_caller]
    pub fn get(&self, column: usize, row: usize) -> Option<&T> {
        let idx = self.checked_index(column, row);
        self.cells[idx].as_ref()
    }

    /// Mutable access to the occupant at (column, row)
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    #[track_caller]
    pub fn get_mut(&mut self, column: usize, row: usize) -> Option<&mut T> {
        let idx = self.checked_index(column, row);
        self.cells[idx].as_mut()
    }

    /// Replace the occupant at (column, row), returning the previous one
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    #[track_caller]
    pub fn set(&mut self, column: usize, row: usize, value: Option<T>) -> Option<T> {
        let idx = self.checked_index(column, row);
        std::mem::replace(&mut self.cells[idx], value)
    }

    /// Remove and return the occupant at (column, row)
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    #[track_caller]
    pub fn take(&mut self, column: usize, row: usize) -> Option<T> {
        let idx = self.checked_index(column, row);
        self.cells[idx].take()
    }

    /// Check if (column, row) holds an occupant
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    #[track_caller]
    pub fn is_occupied(&self, column: usize, row: usize) -> bool {
        self.get(column, row).is_some()
    }

    /// Exchange the contents of two cells
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside the grid.
    #[track_caller]
    pub fn swap_cells(&mut self, a: Coord, b: Coord) {
        let ia = self.checked_index(a.column, a.row);
        let ib = self.checked_index(b.column, b.row);
        self.cells.swap(ia, ib);
    }

    /// Find the first cell (row-major) whose occupant satisfies `pred`
    pub fn position<F>(&self, mut pred: F) -> Option<Coord>
    where
        F: FnMut(&T) -> bool,
    {
        self.cells.iter().enumerate().find_map(|(idx, cell)| {
            cell.as_ref()
                .filter(|value| pred(*value))
                .map(|_| Coord::new(idx % self.columns, idx / self.columns))
        })
    }

    /// Iterate over every cell in row-major order (bottom row first)
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Option<&T>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| (Coord::new(idx % self.columns, idx / self.columns), cell.as_ref()))
    }

    /// Iterate over occupied cells only, in row-major order
    pub fn occupants(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter().flatten()
    }

    /// Count occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        let grid: Grid<u8> = Grid::new(9, 7);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(8, 0), Some(8));
        assert_eq!(grid.index(0, 1), Some(9));
        assert_eq!(grid.index(8, 6), Some(62));
        assert_eq!(grid.index(9, 0), None);
        assert_eq!(grid.index(0, 7), None);
    }

    #[test]
    fn test_grid_set_get_take() {
        let mut grid = Grid::new(4, 4);
        assert_eq!(grid.set(1, 2, Some('a')), None);
        assert_eq!(grid.get(1, 2), Some(&'a'));
        assert_eq!(grid.set(1, 2, Some('b')), Some('a'));
        assert_eq!(grid.take(1, 2), Some('b'));
        assert_eq!(grid.get(1, 2), None);
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_grid_swap_and_position() {
        let mut grid = Grid::new(3, 3);
        grid.set(0, 0, Some(1));
        grid.set(2, 1, Some(2));
        grid.swap_cells(Coord::new(0, 0), Coord::new(2, 1));
        assert_eq!(grid.get(0, 0), Some(&2));
        assert_eq!(grid.get(2, 1), Some(&1));
        assert_eq!(grid.position(|v| *v == 1), Some(Coord::new(2, 1)));
        assert_eq!(grid.position(|v| *v == 9), None);
    }

    #[test]
    fn test_grid_iter_is_row_major() {
        let grid: Grid<()> = Grid::new(2, 2);
        let coords: Vec<Coord> = grid.iter().map(|(c, _)| c).collect();
        assert_eq!(
            coords,
            vec![
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(0, 1),
                Coord::new(1, 1)
            ]
        );
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_grid_get_out_of_bounds_panics() {
        let grid: Grid<u8> = Grid::new(3, 3);
        let _ = grid.get(3, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_grid_set_out_of_bounds_panics() {
        let mut grid: Grid<u8> = Grid::new(3, 3);
        grid.set(0, 3, Some(1));
    }
}
