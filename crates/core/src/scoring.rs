//! Scoring module - points for cleared chains
//!
//! Compatibility note:
//! The chain score is linear in length and must stay exactly
//! `CHAIN_BASE_SCORE * (length - 2)`: 3-chain = 60, 4-chain = 120, 5-chain = 180.
//! A piece sitting in both a horizontal and a vertical chain is scored once per
//! chain; chains are never merged across axes.

use crate::types::{CHAIN_BASE_SCORE, MIN_CHAIN_LEN};

/// Score for a single chain of `length` pieces
///
/// Runs shorter than [`MIN_CHAIN_LEN`] are not chains and score 0.
pub fn chain_score(length: usize) -> u32 {
    if length < MIN_CHAIN_LEN {
        return 0;
    }
    let extra = (length - (MIN_CHAIN_LEN - 1)) as u32;
    CHAIN_BASE_SCORE.saturating_mul(extra)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_scores() {
        assert_eq!(chain_score(3), 60);
        assert_eq!(chain_score(4), 120);
        assert_eq!(chain_score(5), 180);
        assert_eq!(chain_score(7), 300);
    }

    #[test]
    fn test_short_runs_score_nothing() {
        assert_eq!(chain_score(0), 0);
        assert_eq!(chain_score(2), 0);
    }
}
