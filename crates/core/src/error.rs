//! Error types for recoverable engine failures
//!
//! Contract violations (out-of-bounds access, swapping pieces that are not on
//! the board) panic instead; see the `# Panics` sections on the engine methods.

use thiserror::Error;

use crate::session::Outcome;
use crate::swap::Swap;

/// Failures of the match engine itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// No board with at least one legal swap could be dealt for this shape
    #[error("board shape cannot be dealt with a legal swap (gave up after {attempts} attempts)")]
    UnsatisfiableShape { attempts: u32 },
}

/// Reasons a turn request is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("game has not begun")]
    NotStarted,
    #[error("game is over ({0:?})")]
    GameOver(Outcome),
    #[error("illegal {0}")]
    IllegalSwap(Swap),
    #[error(transparent)]
    Engine(#[from] EngineError),
}
