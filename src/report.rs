//! Report module - JSON records for the headless runner
//!
//! One record is printed per line. Every record carries `type` and `seq`
//! (monotonic per run) so a consumer can detect dropped lines.

use serde::{Deserialize, Serialize};

use crate::core::{Chain, Outcome, Session, TurnReport};
use crate::types::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    pub column: usize,
    pub row: usize,
}

impl From<Coord> for CellRecord {
    fn from(value: Coord) -> Self {
        Self {
            column: value.column,
            row: value.row,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainRecord {
    pub axis: String,
    pub kind: String,
    pub length: usize,
    pub score: u32,
    pub cells: Vec<CellRecord>,
}

impl From<&Chain> for ChainRecord {
    fn from(chain: &Chain) -> Self {
        Self {
            axis: chain.axis().as_str().to_string(),
            kind: chain.kind().map_or("", |k| k.as_str()).to_string(),
            length: chain.len(),
            score: chain.score(),
            cells: chain.pieces().iter().map(|p| p.coord.into()).collect(),
        }
    }
}

/// Line-delimited runner output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    Begin {
        seq: u64,
        level: Option<u32>,
        columns: usize,
        rows: usize,
        target_score: u32,
        moves: u32,
        legal_swaps: usize,
        board: Vec<String>,
    },
    Turn {
        seq: u64,
        turn: u32,
        from: CellRecord,
        to: CellRecord,
        passes: usize,
        chains: Vec<ChainRecord>,
        points: u32,
        score: u32,
        moves_left: u32,
        outcome: String,
    },
    Shuffle {
        seq: u64,
        moves_left: u32,
        outcome: String,
    },
    End {
        seq: u64,
        score: u32,
        target_score: u32,
        moves_left: u32,
        outcome: String,
    },
}

impl Record {
    pub fn turn(seq: u64, turn: u32, report: &TurnReport, session: &Session) -> Self {
        Record::Turn {
            seq,
            turn,
            // Coordinates before the swap was applied.
            from: report.swap.a.coord.into(),
            to: report.swap.b.coord.into(),
            passes: report.cascade.len(),
            chains: report
                .cascade
                .iter()
                .flat_map(|step| step.chains.iter().map(ChainRecord::from))
                .collect(),
            points: report.points,
            score: session.score(),
            moves_left: report.moves_left,
            outcome: report.outcome.as_str().to_string(),
        }
    }

    pub fn end(seq: u64, session: &Session) -> Self {
        Record::End {
            seq,
            score: session.score(),
            target_score: session.target_score(),
            moves_left: session.moves_left(),
            outcome: session.outcome().as_str().to_string(),
        }
    }

    pub fn shuffle(seq: u64, session: &Session) -> Self {
        Record::Shuffle {
            seq,
            moves_left: session.moves_left(),
            outcome: session.outcome().as_str().to_string(),
        }
    }

    pub fn seq(&self) -> u64 {
        match self {
            Record::Begin { seq, .. }
            | Record::Turn { seq, .. }
            | Record::Shuffle { seq, .. }
            | Record::End { seq, .. } => *seq,
        }
    }
}

/// Short human-readable label for an outcome
pub fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::InProgress => "in progress",
        Outcome::Won => "level complete",
        Outcome::Lost => "game over",
    }
}
