//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the tile-matching rules: the board, swap legality,
//! chain detection, removal, gravity and refill. It has **no dependencies** on
//! UI, audio, input or I/O, making it:
//!
//! - **Deterministic**: Same seed deals identical boards and refills
//! - **Testable**: Every phase is a plain method returning plain data
//! - **Portable**: Can run under any renderer, or headless
//!
//! # Module Structure
//!
//! - [`grid`]: Fixed-size 2D storage with fail-fast bounds checks
//! - [`shape`]: Which cells of the rectangle are playable
//! - [`piece`]: Pieces with stable ids and mutable coordinates
//! - [`rng`]: Seedable LCG and kind sampling
//! - [`swap`] / [`chain`]: Value objects with set semantics
//! - [`scoring`]: `60 × (length − 2)` per chain
//! - [`engine`]: The match engine and its cascade loop
//! - [`session`]: Target score, moves and combo counters
//! - [`game`]: Turn orchestration tying engine and session together
//! - [`snapshot`]: Plain-data board copy for renderers
//!
//! # Game Rules
//!
//! - Swapping two adjacent pieces is legal only if it creates a run of three or
//!   more of the same kind in a row or column
//! - Runs are removed and scored; horizontal and vertical runs are scored
//!   separately, so a piece at a crossing counts twice
//! - Pieces above holes fall straight down, then empty cells at the top of
//!   each column are refilled, and the process repeats until nothing matches
//! - A dealt board never starts with a run and always has a legal swap
//!
//! # Example
//!
//! ```
//! use tile_crush_core::{BoardShape, Game};
//!
//! let mut game = Game::with_seed(BoardShape::full(9, 9), 1000, 20, 12345);
//! game.begin().unwrap();
//!
//! let swap = game.engine().possible_swaps()[0];
//! let report = game.play(swap).unwrap();
//!
//! assert!(report.points >= 60);
//! assert!(!game.engine().has_matches());
//! assert_eq!(game.session().moves_left(), 19);
//! ```

pub mod chain;
pub mod engine;
pub mod error;
pub mod game;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shape;
pub mod snapshot;
pub mod swap;

pub use tile_crush_types as types;

// Re-export commonly used types for convenience
pub use chain::Chain;
pub use engine::{CascadeStep, EngineConfig, MatchEngine};
pub use error::{EngineError, TurnError};
pub use game::{Game, TurnReport};
pub use grid::Grid;
pub use piece::{Piece, PieceId};
pub use rng::{random_kind, random_kind_except, SimpleRng};
pub use scoring::chain_score;
pub use session::{Outcome, Session};
pub use shape::BoardShape;
pub use snapshot::{BoardSnapshot, SnapshotCell};
pub use swap::Swap;
