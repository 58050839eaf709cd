use crate::types::Kind;

/// What a renderer sees in one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapshotCell {
    /// Not part of the board shape
    Hole,
    /// Playable but currently empty (only between cascade phases)
    Empty,
    Piece(Kind),
}

impl SnapshotCell {
    fn as_char(&self) -> char {
        match self {
            SnapshotCell::Hole => ' ',
            SnapshotCell::Empty => '.',
            SnapshotCell::Piece(kind) => kind.as_char(),
        }
    }

    fn code(&self) -> u8 {
        match self {
            SnapshotCell::Hole => 0,
            SnapshotCell::Empty => 1,
            SnapshotCell::Piece(kind) => 2 + *kind as u8,
        }
    }
}

/// Plain-data copy of the board, row-major with row 0 at the bottom
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    pub columns: usize,
    pub rows: usize,
    pub cells: Vec<SnapshotCell>,
}

impl BoardSnapshot {
    pub fn cell(&self, column: usize, row: usize) -> SnapshotCell {
        self.cells[row * self.columns + column]
    }

    /// Rows as text, top row first
    pub fn lines(&self) -> Vec<String> {
        (0..self.rows)
            .rev()
            .map(|row| {
                (0..self.columns)
                    .map(|column| self.cell(column, row).as_char())
                    .collect()
            })
            .collect()
    }

    /// FNV-1a hash of the cell contents (ids are not included)
    pub fn fingerprint(&self) -> u64 {
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for cell in &self.cells {
            hash ^= cell.code() as u64;
            hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        }
        hash
    }
}

impl std::fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
