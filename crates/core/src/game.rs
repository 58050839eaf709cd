//! Game module - turn orchestration for one level
//!
//! This module ties together the match engine and the session counters. It
//! owns the cascade loop and the move budget, and returns everything a
//! renderer needs to animate a turn as plain data.

use log::{debug, info};
use rand::Rng;

use crate::engine::{CascadeStep, MatchEngine};
use crate::error::{EngineError, TurnError};
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::session::{Outcome, Session};
use crate::shape::BoardShape;
use crate::swap::Swap;

/// Result of one accepted swap
#[derive(Debug, Clone)]
pub struct TurnReport {
    pub swap: Swap,
    /// Every cascade pass, in order
    pub cascade: Vec<CascadeStep>,
    /// Points gained this turn
    pub points: u32,
    pub moves_left: u32,
    pub outcome: Outcome,
}

impl TurnReport {
    pub fn chains_cleared(&self) -> usize {
        self.cascade.iter().map(|step| step.chains.len()).sum()
    }
}

/// A level in play
#[derive(Debug, Clone)]
pub struct Game<R = SimpleRng> {
    engine: MatchEngine<R>,
    session: Session,
    moves: u32,
    started: bool,
}

impl Game<SimpleRng> {
    /// Create a game on `shape` driven by the built-in LCG
    pub fn with_seed(shape: BoardShape, target_score: u32, moves: u32, seed: u32) -> Self {
        Self::new(MatchEngine::with_seed(shape, seed), target_score, moves)
    }
}

impl<R: Rng> Game<R> {
    pub fn new(engine: MatchEngine<R>, target_score: u32, moves: u32) -> Self {
        Self {
            engine,
            session: Session::new(target_score, moves),
            moves,
            started: false,
        }
    }

    pub fn engine(&self) -> &MatchEngine<R> {
        &self.engine
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn outcome(&self) -> Outcome {
        self.session.outcome()
    }

    /// Reset the counters and deal the first board
    pub fn begin(&mut self) -> Result<Vec<Piece>, EngineError> {
        self.session.reset(self.moves);
        let pieces = self.engine.populate()?;
        self.started = true;
        info!(
            "[Game] level begins: target {} in {} moves, {} legal swaps",
            self.session.target_score(),
            self.moves,
            self.engine.possible_swaps().len()
        );
        Ok(pieces)
    }

    fn ensure_playable(&self) -> Result<(), TurnError> {
        if !self.started {
            return Err(TurnError::NotStarted);
        }
        let outcome = self.session.outcome();
        if outcome.is_over() {
            return Err(TurnError::GameOver(outcome));
        }
        Ok(())
    }

    /// Play one swap through to a settled board
    ///
    /// An illegal swap leaves the board and the move budget untouched.
    pub fn play(&mut self, swap: Swap) -> Result<TurnReport, TurnError> {
        self.ensure_playable()?;
        if !self.engine.is_possible_swap(&swap) {
            debug!("[Game] rejected {}", swap);
            return Err(TurnError::IllegalSwap(swap));
        }

        self.session.reset_combo();
        self.engine.perform_swap(&swap);
        let cascade = self.engine.resolve_cascade();

        let mut points = 0u32;
        for step in &cascade {
            points = points.saturating_add(self.session.record_chains(&step.chains));
        }

        self.engine.detect_possible_swaps();
        let outcome = self.session.consume_move();
        debug!(
            "[Game] {} scored {} over {} passes, {} moves left",
            swap,
            points,
            cascade.len(),
            self.session.moves_left()
        );

        Ok(TurnReport {
            swap,
            cascade,
            points,
            moves_left: self.session.moves_left(),
            outcome,
        })
    }

    /// Deal a new board at the cost of one move
    pub fn shuffle(&mut self) -> Result<Vec<Piece>, TurnError> {
        self.ensure_playable()?;
        let pieces = self.engine.populate()?;
        self.session.consume_move();
        debug!("[Game] shuffled, {} moves left", self.session.moves_left());
        Ok(pieces)
    }
}
