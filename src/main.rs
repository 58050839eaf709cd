//! Headless level runner (default binary).
//!
//! Deals a level and autoplays it: every turn takes the first legal swap in
//! discovery order, shuffling (at the cost of a move) when none is left. It is
//! a smoke driver for the engine, not an opponent.
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` to watch cascades.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};

use tile_crush::core::{BoardShape, Game, Outcome};
use tile_crush::level::{level_file_name, load_level, next_level, Level};
use tile_crush::report::{outcome_label, Record};
use tile_crush::types::{DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_BOARD_DIMENSION};

/// Autoplay match-three levels without a UI.
#[derive(Debug, Parser)]
#[command(name = "tile-crush", version, about)]
struct Args {
    /// Level file to play (JSON). Overrides the generated rectangle.
    #[arg(short, long, value_name = "FILE", conflicts_with = "levels_dir")]
    level: Option<PathBuf>,

    /// Directory holding Level_<n>.json files; winning advances to the next level.
    #[arg(long, value_name = "DIR")]
    levels_dir: Option<PathBuf>,

    /// First level number to load from --levels-dir.
    #[arg(long, default_value_t = 0, value_name = "N")]
    start_level: u32,

    /// How many levels to play from --levels-dir before stopping.
    #[arg(long, default_value_t = 1, value_name = "N")]
    levels: u32,

    /// Width of the generated rectangle.
    #[arg(long, default_value_t = DEFAULT_COLUMNS, value_name = "COLS")]
    columns: usize,

    /// Height of the generated rectangle.
    #[arg(long, default_value_t = DEFAULT_ROWS, value_name = "ROWS")]
    rows: usize,

    /// Target score for the generated rectangle.
    #[arg(long, default_value_t = 1000)]
    target: u32,

    /// Move budget for the generated rectangle.
    #[arg(long, default_value_t = 20)]
    moves: u32,

    /// Seed for the piece generator.
    #[arg(short, long, default_value_t = 1)]
    seed: u32,

    /// Stop each level after this many turns even if it is not decided.
    #[arg(long, value_name = "N")]
    max_turns: Option<u32>,

    /// Print one JSON record per line instead of text.
    #[arg(long)]
    json: bool,

    /// Only print the final result of each level (text mode).
    #[arg(short, long)]
    quiet: bool,
}

struct Printer {
    json: bool,
    quiet: bool,
    seq: u64,
}

impl Printer {
    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    fn emit(&self, record: &Record) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string(record)?);
            return Ok(());
        }
        match record {
            Record::Begin {
                level,
                columns,
                rows,
                target_score,
                moves,
                legal_swaps,
                board,
                ..
            } => {
                match level {
                    Some(n) => println!("level {} ({}x{})", n, columns, rows),
                    None => println!("board {}x{}", columns, rows),
                }
                println!(
                    "target {} in {} moves, {} legal swaps",
                    target_score, moves, legal_swaps
                );
                if !self.quiet {
                    for line in board {
                        println!("  |{}|", line);
                    }
                }
            }
            Record::Turn {
                turn,
                from,
                to,
                passes,
                chains,
                points,
                score,
                moves_left,
                ..
            } if !self.quiet => {
                println!(
                    "turn {:>3}: ({},{}) <-> ({},{})  +{} ({} chains, {} passes)  score {}  moves left {}",
                    turn,
                    from.column,
                    from.row,
                    to.column,
                    to.row,
                    points,
                    chains.len(),
                    passes,
                    score,
                    moves_left
                );
            }
            Record::Shuffle { moves_left, .. } if !self.quiet => {
                println!("no legal swaps, shuffled  moves left {}", moves_left);
            }
            Record::End {
                score,
                target_score,
                moves_left,
                ..
            } => {
                println!(
                    "final score {} / {}  moves left {}",
                    score, target_score, moves_left
                );
            }
            _ => {}
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut printer = Printer {
        json: args.json,
        quiet: args.quiet,
        seq: 0,
    };

    if let Some(dir) = &args.levels_dir {
        let mut number = args.start_level;
        for _ in 0..args.levels {
            let path = dir.join(level_file_name(number));
            let level = load_level(&path)
                .with_context(|| format!("failed to load level {}", path.display()))?;
            let outcome = play_level(&args, level, Some(number), &mut printer)?;
            if outcome != Outcome::Won {
                break;
            }
            number = next_level(number);
        }
        return Ok(());
    }

    let level = match &args.level {
        Some(path) => load_level(path)
            .with_context(|| format!("failed to load level {}", path.display()))?,
        None => generated_level(&args)?,
    };
    play_level(&args, level, None, &mut printer)?;
    Ok(())
}

fn generated_level(args: &Args) -> Result<Level> {
    if args.columns == 0 || args.rows == 0 {
        bail!("board must have at least one column and one row");
    }
    if args.columns > MAX_BOARD_DIMENSION || args.rows > MAX_BOARD_DIMENSION {
        bail!(
            "board {}x{} exceeds the {}x{} limit",
            args.columns,
            args.rows,
            MAX_BOARD_DIMENSION,
            MAX_BOARD_DIMENSION
        );
    }
    Ok(Level {
        shape: BoardShape::full(args.columns, args.rows),
        target_score: args.target,
        moves: args.moves,
        background: 0,
    })
}

fn play_level(
    args: &Args,
    level: Level,
    number: Option<u32>,
    printer: &mut Printer,
) -> Result<Outcome> {
    let (columns, rows) = (level.shape.columns(), level.shape.rows());
    let mut game = Game::with_seed(level.shape, level.target_score, level.moves, args.seed);
    game.begin().context("could not deal the first board")?;

    let begin = Record::Begin {
        seq: printer.next_seq(),
        level: number,
        columns,
        rows,
        target_score: level.target_score,
        moves: level.moves,
        legal_swaps: game.engine().possible_swaps().len(),
        board: game.engine().snapshot().lines(),
    };
    printer.emit(&begin)?;

    let mut turn = 0u32;
    while !game.outcome().is_over() {
        if args.max_turns.is_some_and(|max| turn >= max) {
            warn!("[Runner] stopping undecided level after {} turns", turn);
            break;
        }

        let Some(swap) = game.engine().possible_swaps().first().copied() else {
            game.shuffle().context("shuffle failed")?;
            let record = Record::shuffle(printer.next_seq(), game.session());
            printer.emit(&record)?;
            continue;
        };

        let report = game.play(swap).context("engine refused its own legal swap")?;
        turn += 1;
        let record = Record::turn(printer.next_seq(), turn, &report, game.session());
        printer.emit(&record)?;
    }

    let outcome = game.outcome();
    info!(
        "[Runner] {} after {} turns with {} points",
        outcome_label(outcome),
        turn,
        game.session().score()
    );
    let end = Record::end(printer.next_seq(), game.session());
    printer.emit(&end)?;
    if !args.json {
        println!("{}", outcome_label(outcome));
    }
    Ok(outcome)
}
