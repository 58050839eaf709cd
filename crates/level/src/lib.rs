//! Level module - loading board shapes and goals from JSON level files
//!
//! The match engine never reads files; this crate is the collaborator that
//! turns a level description into a [`BoardShape`] plus the numbers a session
//! needs.
//!
//! # File Format
//!
//! ```json
//! {
//!   "tiles": [[0, 1, 1, 0],
//!             [1, 1, 1, 1],
//!             [1, 1, 1, 1]],
//!   "targetScore": 1000,
//!   "moves": 15,
//!   "background": 2
//! }
//! ```
//!
//! - `tiles` lists rows **top to bottom**; `1` marks a playable cell, `0` a hole.
//!   The loader flips them so row 0 is the bottom of the board.
//! - `background` is a theme id for renderers; the engine ignores it.
//!
//! Level files are named `Level_<n>.json`; see [`level_file_name`].
//!
//! # Example
//!
//! ```
//! use tile_crush_level::LevelData;
//!
//! let json = r#"{"tiles":[[1,1,1],[1,0,1]],"targetScore":500,"moves":10,"background":1}"#;
//! let level = LevelData::from_json(json).unwrap().into_level().unwrap();
//!
//! assert_eq!(level.shape.columns(), 3);
//! assert!(!level.shape.is_playable(1, 0)); // bottom row hole
//! assert!(level.shape.is_playable(1, 1));
//! assert_eq!(level.moves, 10);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use tile_crush_core::BoardShape;
use tile_crush_types::{LEVEL_COUNT, MAX_BOARD_DIMENSION};

/// Problems reading or validating a level file
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("could not read level file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("level is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("level has no tiles")]
    EmptyTiles,
    #[error("tile row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("tile at row {row}, column {column} is {value}; expected 0 or 1")]
    InvalidFlag { row: usize, column: usize, value: i64 },
    #[error("level is {columns}x{rows}; at most {max}x{max} is supported")]
    TooLarge {
        columns: usize,
        rows: usize,
        max: usize,
    },
    #[error("level has no playable cells")]
    NoPlayableCells,
}

/// Level file contents, exactly as written on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelData {
    pub tiles: Vec<Vec<i64>>,
    pub target_score: u32,
    pub moves: u32,
    #[serde(default)]
    pub background: u32,
}

/// A validated level ready to start a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub shape: BoardShape,
    pub target_score: u32,
    pub moves: u32,
    pub background: u32,
}

impl LevelData {
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a level file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("[Level] read {} bytes from {}", text.len(), path.display());
        Self::from_json(&text)
    }

    /// Validate the tile matrix and flip it so row 0 is the bottom
    pub fn into_level(self) -> Result<Level, LevelError> {
        let rows = self.tiles.len();
        let columns = self.tiles.first().map_or(0, Vec::len);
        if rows == 0 || columns == 0 {
            return Err(LevelError::EmptyTiles);
        }
        if rows > MAX_BOARD_DIMENSION || columns > MAX_BOARD_DIMENSION {
            return Err(LevelError::TooLarge {
                columns,
                rows,
                max: MAX_BOARD_DIMENSION,
            });
        }

        let mut flags = vec![false; columns * rows];
        for (top_index, line) in self.tiles.iter().enumerate() {
            if line.len() != columns {
                return Err(LevelError::RaggedRow {
                    row: top_index,
                    expected: columns,
                    found: line.len(),
                });
            }
            let row = rows - top_index - 1;
            for (column, &value) in line.iter().enumerate() {
                flags[row * columns + column] = match value {
                    0 => false,
                    1 => true,
                    _ => {
                        return Err(LevelError::InvalidFlag {
                            row: top_index,
                            column,
                            value,
                        })
                    }
                };
            }
        }
        if !flags.iter().any(|f| *f) {
            return Err(LevelError::NoPlayableCells);
        }

        Ok(Level {
            shape: BoardShape::new(columns, rows, &flags),
            target_score: self.target_score,
            moves: self.moves,
            background: self.background,
        })
    }
}

/// Load and validate a level file in one step
pub fn load_level(path: impl AsRef<Path>) -> Result<Level, LevelError> {
    LevelData::load(path)?.into_level()
}

/// File name of level `number`
pub fn level_file_name(number: u32) -> String {
    format!("Level_{}.json", number)
}

/// Level that follows a completed level
///
/// Counting starts at level 0, which is only played once: after the last
/// level the sequence wraps to level 1.
pub fn next_level(current: u32) -> u32 {
    if current < LEVEL_COUNT {
        current + 1
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(tiles: Vec<Vec<i64>>) -> LevelData {
        LevelData {
            tiles,
            target_score: 100,
            moves: 5,
            background: 0,
        }
    }

    #[test]
    fn test_rows_are_flipped() {
        let level = data(vec![vec![1, 0], vec![0, 0], vec![0, 1]])
            .into_level()
            .unwrap();
        assert!(level.shape.is_playable(0, 2));
        assert!(level.shape.is_playable(1, 0));
        assert_eq!(level.shape.playable_count(), 2);
    }

    #[test]
    fn test_rejects_bad_matrices() {
        assert!(matches!(data(vec![]).into_level(), Err(LevelError::EmptyTiles)));
        assert!(matches!(
            data(vec![vec![1, 1], vec![1]]).into_level(),
            Err(LevelError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        ));
        assert!(matches!(
            data(vec![vec![1, 2]]).into_level(),
            Err(LevelError::InvalidFlag {
                row: 0,
                column: 1,
                value: 2
            })
        ));
        assert!(matches!(
            data(vec![vec![0, 0]]).into_level(),
            Err(LevelError::NoPlayableCells)
        ));
        assert!(matches!(
            data(vec![vec![1; MAX_BOARD_DIMENSION + 1]]).into_level(),
            Err(LevelError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_background_defaults_to_zero() {
        let level = LevelData::from_json(r#"{"tiles":[[1]],"targetScore":1,"moves":1}"#).unwrap();
        assert_eq!(level.background, 0);
    }

    #[test]
    fn test_missing_field_is_json_error() {
        let err = LevelData::from_json(r#"{"tiles":[[1]]}"#).unwrap_err();
        assert!(matches!(err, LevelError::Json(_)));
    }

    #[test]
    fn test_level_sequence_wraps_to_one() {
        assert_eq!(level_file_name(3), "Level_3.json");
        assert_eq!(next_level(0), 1);
        assert_eq!(next_level(LEVEL_COUNT - 1), LEVEL_COUNT);
        assert_eq!(next_level(LEVEL_COUNT), 1);
    }
}
