//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, level loading, headless runner, renderers).
//!
//! # Orientation
//!
//! Boards are addressed by `(column, row)`:
//!
//! - **Columns** grow left to right, starting at 0
//! - **Rows** grow bottom to top, starting at 0 (row 0 is where pieces fall to)
//!
//! Level files list rows top to bottom; the loader flips them so this holds.
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_CHAIN_LEN` | 3 | Shortest run that counts as a match |
//! | `CHAIN_BASE_SCORE` | 60 | Points per piece beyond `MIN_CHAIN_LEN - 1` |
//! | `DEFAULT_COLUMNS` | 9 | Width of a generated full board |
//! | `DEFAULT_ROWS` | 9 | Height of a generated full board |
//! | `MAX_POPULATE_ATTEMPTS` | 1000 | Board regenerations before giving up |
//! | `MAX_BOARD_DIMENSION` | 32 | Largest accepted column/row count |
//!
//! # Examples
//!
//! ```
//! use tile_crush_types::{Coord, Kind, MIN_CHAIN_LEN};
//!
//! let kind = Kind::from_str("ladybug").unwrap();
//! assert_eq!(kind, Kind::Ladybug);
//! assert_eq!(Kind::from_char(kind.as_char()), Some(kind));
//!
//! let here = Coord::new(2, 0);
//! assert!(here.is_adjacent(Coord::new(3, 0)));
//! assert!(!here.is_adjacent(Coord::new(3, 1)));
//!
//! assert_eq!(MIN_CHAIN_LEN, 3);
//! ```

/// Shortest run of same-kind pieces that forms a chain
pub const MIN_CHAIN_LEN: usize = 3;

/// Points awarded per piece beyond the minimum match (3-chain = 60, 4-chain = 120, ...)
pub const CHAIN_BASE_SCORE: u32 = 60;

/// Default board width for generated (shape-less) levels
pub const DEFAULT_COLUMNS: usize = 9;

/// Default board height for generated (shape-less) levels
pub const DEFAULT_ROWS: usize = 9;

/// How many times a board is regenerated looking for one legal swap
pub const MAX_POPULATE_ATTEMPTS: u32 = 1000;

/// Largest column or row count a level may declare
pub const MAX_BOARD_DIMENSION: usize = 32;

/// Number of levels shipped with the runner; the level after the last wraps to the first
pub const LEVEL_COUNT: u32 = 5;


/// The six piece species
///
/// Each kind is drawn with its own sprite by the renderer; the engine only
/// compares kinds for equality. "No piece" is expressed as `Option<Kind>`,
/// never as a sentinel variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Bee,
    Beetle,
    Ladybug,
    LeafBeetle,
    StarBeetle,
    StinkBug,
}

impl Kind {
    /// Every playable kind, in declaration order
    pub const ALL: [Kind; 6] = [
        Kind::Bee,
        Kind::Beetle,
        Kind::Ladybug,
        Kind::LeafBeetle,
        Kind::StarBeetle,
        Kind::StinkBug,
    ];

    /// Number of playable kinds
    pub const COUNT: usize = Self::ALL.len();

    /// Parse kind from string (case-insensitive)
    ///
    /// Accepts the snake_case name or the single display character.
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_crush_types::Kind;
    ///
    /// assert_eq!(Kind::from_str("bee"), Some(Kind::Bee));
    /// assert_eq!(Kind::from_str("Star_Beetle"), Some(Kind::StarBeetle));
    /// assert_eq!(Kind::from_str("s"), Some(Kind::StarBeetle));
    /// assert_eq!(Kind::from_str("wasp"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        let mut chars = lower.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::from_char(c);
        }
        Self::ALL.into_iter().find(|k| k.as_str() == lower)
    }

    /// Convert to snake_case string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Bee => "bee",
            Kind::Beetle => "beetle",
            Kind::Ladybug => "ladybug",
            Kind::LeafBeetle => "leaf_beetle",
            Kind::StarBeetle => "star_beetle",
            Kind::StinkBug => "stink_bug",
        }
    }

    /// Single-character glyph used by text dumps and test layouts
    pub fn as_char(&self) -> char {
        match self {
            Kind::Bee => 'b',
            Kind::Beetle => 'e',
            Kind::Ladybug => 'l',
            Kind::LeafBeetle => 'f',
            Kind::StarBeetle => 's',
            Kind::StinkBug => 'k',
        }
    }

    /// Inverse of [`Kind::as_char`] (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        let c = c.to_ascii_lowercase();
        Self::ALL.into_iter().find(|k| k.as_char() == c)
    }
}

/// A cell position on the board
///
/// `column` counts from the left edge, `row` from the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub column: usize,
    pub row: usize,
}

impl Coord {
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// True when `other` shares an edge with `self`
    pub fn is_adjacent(&self, other: Coord) -> bool {
        self.column.abs_diff(other.column) + self.row.abs_diff(other.row) == 1
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.column, self.row)
    }
}

/// Axis along which a chain runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainAxis {
    /// Along a row, left to right
    Horizontal,
    /// Along a column, bottom to top
    Vertical,
}

impl ChainAxis {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainAxis::Horizontal => "horizontal",
            ChainAxis::Vertical => "vertical",
        }
    }
}
