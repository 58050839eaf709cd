//! Session module - per-level counters
//!
//! Tracks the target score, remaining moves, accumulated score and the combo
//! multiplier. The engine never touches these; the turn orchestrator feeds
//! them with the chains each cascade returns.

use crate::chain::Chain;

/// Where a level stands after a move is consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    /// Target score reached
    Won,
    /// Moves exhausted below the target score
    Lost,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::InProgress => "in_progress",
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        }
    }
}

/// Counters for one level attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    target_score: u32,
    moves_left: u32,
    score: u32,
    combo_multiplier: u32,
    outcome: Outcome,
}

impl Session {
    pub fn new(target_score: u32, moves: u32) -> Self {
        Self {
            target_score,
            moves_left: moves,
            score: 0,
            combo_multiplier: 1,
            outcome: Outcome::InProgress,
        }
    }

    /// Start over with a fresh move budget
    pub fn reset(&mut self, moves: u32) {
        self.moves_left = moves;
        self.score = 0;
        self.combo_multiplier = 1;
        self.outcome = Outcome::InProgress;
    }

    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combo_multiplier(&self) -> u32 {
        self.combo_multiplier
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Add the scores of cleared chains; bumps the combo once per chain
    ///
    /// Returns the points gained.
    pub fn record_chains(&mut self, chains: &[Chain]) -> u32 {
        let mut gained = 0u32;
        for chain in chains {
            gained = gained.saturating_add(chain.score());
            self.combo_multiplier = self.combo_multiplier.saturating_add(1);
        }
        self.score = self.score.saturating_add(gained);
        gained
    }

    pub fn reset_combo(&mut self) {
        self.combo_multiplier = 1;
    }

    /// Spend one move and re-evaluate the outcome
    ///
    /// Reaching the target wins even on the last move.
    pub fn consume_move(&mut self) -> Outcome {
        self.moves_left = self.moves_left.saturating_sub(1);
        self.outcome = if self.score >= self.target_score {
            Outcome::Won
        } else if self.moves_left == 0 {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };
        self.outcome
    }
}
