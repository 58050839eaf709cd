//! Match engine module - the board and every rule that changes it
//!
//! The engine owns the grid of pieces, the board shape, the random source and
//! the last-computed set of legal swaps. It is a synchronous state transformer:
//! the orchestrator calls one phase at a time and waits for it to finish before
//! issuing the next.
//!
//! A turn looks like this:
//!
//! 1. [`MatchEngine::populate`] deals a board with no chains and at least one legal swap
//! 2. [`MatchEngine::is_possible_swap`] validates the player's swap
//! 3. [`MatchEngine::perform_swap`] applies it
//! 4. [`MatchEngine::remove_matches`], [`MatchEngine::fill_holes`] and
//!    [`MatchEngine::top_up`] repeat until no chain is left
//!    ([`MatchEngine::resolve_cascade`] runs that loop in one call)
//! 5. [`MatchEngine::detect_possible_swaps`] recomputes the legal set for the next turn

use arrayvec::ArrayVec;
use log::{debug, trace, warn};
use rand::Rng;

use crate::chain::Chain;
use crate::error::EngineError;
use crate::grid::Grid;
use crate::piece::{Piece, PieceId};
use crate::rng::{random_kind, random_kind_except, SimpleRng};
use crate::shape::BoardShape;
use crate::snapshot::{BoardSnapshot, SnapshotCell};
use crate::swap::Swap;
use crate::types::{ChainAxis, Coord, Kind, MAX_POPULATE_ATTEMPTS, MIN_CHAIN_LEN};

/// Tunables for a match engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Boards dealt by `populate` before reporting an unsatisfiable shape
    pub max_populate_attempts: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_populate_attempts: MAX_POPULATE_ATTEMPTS,
        }
    }
}

/// Everything one pass of the cascade loop changed, in the order it happened
#[derive(Debug, Clone)]
pub struct CascadeStep {
    /// Chains removed, horizontal ones first
    pub chains: Vec<Chain>,
    /// Pieces that fell, grouped per column, bottom-most hole first
    pub falls: Vec<Vec<Piece>>,
    /// Pieces created by the refill, grouped per column, top first
    pub refills: Vec<Vec<Piece>>,
}

impl CascadeStep {
    /// Sum of the scores of every chain in this pass
    pub fn score(&self) -> u32 {
        self.chains
            .iter()
            .fold(0u32, |acc, chain| acc.saturating_add(chain.score()))
    }
}

/// Tile-matching engine for one level
#[derive(Debug, Clone)]
pub struct MatchEngine<R = SimpleRng> {
    shape: BoardShape,
    pieces: Grid<Piece>,
    possible_swaps: Vec<Swap>,
    rng: R,
    config: EngineConfig,
    next_id: u32,
}

impl MatchEngine<SimpleRng> {
    /// Create an engine driven by the built-in LCG
    pub fn with_seed(shape: BoardShape, seed: u32) -> Self {
        Self::new(shape, SimpleRng::new(seed))
    }
}

impl<R: Rng> MatchEngine<R> {
    /// Create an empty engine for `shape`, drawing kinds from `rng`
    pub fn new(shape: BoardShape, rng: R) -> Self {
        Self::with_config(shape, rng, EngineConfig::default())
    }

    pub fn with_config(shape: BoardShape, rng: R, config: EngineConfig) -> Self {
        let pieces = Grid::new(shape.columns(), shape.rows());
        Self {
            shape,
            pieces,
            possible_swaps: Vec::new(),
            rng,
            config,
            next_id: 0,
        }
    }

    pub fn shape(&self) -> &BoardShape {
        &self.shape
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn columns(&self) -> usize {
        self.shape.columns()
    }

    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    /// Piece at (column, row), if any
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the board.
    #[track_caller]
    pub fn piece_at(&self, column: usize, row: usize) -> Option<Piece> {
        self.pieces.get(column, row).copied()
    }

    /// Whether (column, row) is part of the board shape
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the board.
    #[track_caller]
    pub fn tile_at(&self, column: usize, row: usize) -> bool {
        self.shape.is_playable(column, row)
    }

    /// Every piece on the board, row-major from the bottom row
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.occupants()
    }

    /// Current coordinate of the piece with `id`
    pub fn locate(&self, id: PieceId) -> Option<Coord> {
        self.pieces.position(|p| p.id == id)
    }

    /// Legal swaps found by the last [`MatchEngine::detect_possible_swaps`]
    pub fn possible_swaps(&self) -> &[Swap] {
        &self.possible_swaps
    }

    /// Kind at (column, row); `None` for empty cells and coordinates off the board
    fn kind_at(&self, column: usize, row: usize) -> Option<Kind> {
        if !self.pieces.contains(column, row) {
            return None;
        }
        self.pieces.get(column, row).map(|p| p.kind)
    }

    fn spawn(&mut self, coord: Coord, kind: Kind) -> Piece {
        let piece = Piece::new(PieceId(self.next_id), coord, kind);
        self.next_id = self.next_id.wrapping_add(1);
        self.pieces.set(coord.column, coord.row, Some(piece));
        piece
    }

    /// Remove every piece and forget the legal swaps
    pub fn clear(&mut self) {
        self.pieces.clear();
        self.possible_swaps.clear();
    }

    /// Put a new piece of `kind` at (column, row), replacing any occupant
    ///
    /// Meant for laying out explicit boards; normal play only creates pieces
    /// through [`MatchEngine::populate`] and [`MatchEngine::top_up`].
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the board or not playable.
    #[track_caller]
    pub fn place_piece(&mut self, column: usize, row: usize, kind: Kind) -> Piece {
        assert!(
            self.shape.is_playable(column, row),
            "cannot place a piece on non-playable cell ({}, {})",
            column,
            row
        );
        self.spawn(Coord::new(column, row), kind)
    }

    /// Deal a fresh board
    ///
    /// Every playable cell gets a random kind that does not complete a run of
    /// three with the two cells to its left or the two cells below it. If the
    /// finished board has no legal swap, the whole board is dealt again, up to
    /// [`EngineConfig::max_populate_attempts`] times.
    ///
    /// Returns the new pieces in row-major order and leaves the legal-swap set
    /// computed.
    pub fn populate(&mut self) -> Result<Vec<Piece>, EngineError> {
        if !self.shape.has_chain_span() {
            warn!(
                "[Engine] {}x{} shape has no straight span of {} playable cells",
                self.columns(),
                self.rows(),
                MIN_CHAIN_LEN
            );
            self.clear();
            return Err(EngineError::UnsatisfiableShape { attempts: 0 });
        }

        let attempts = self.config.max_populate_attempts;
        for attempt in 1..=attempts {
            let pieces = self.create_initial_pieces();
            self.detect_possible_swaps();
            if !self.possible_swaps.is_empty() {
                debug!(
                    "[Engine] dealt {} pieces with {} legal swaps (attempt {})",
                    pieces.len(),
                    self.possible_swaps.len(),
                    attempt
                );
                return Ok(pieces);
            }
            debug!("[Engine] attempt {} has no legal swap, dealing again", attempt);
        }

        warn!("[Engine] gave up dealing after {} attempts", attempts);
        self.clear();
        Err(EngineError::UnsatisfiableShape { attempts })
    }

    fn create_initial_pieces(&mut self) -> Vec<Piece> {
        self.pieces.clear();
        let mut created = Vec::with_capacity(self.shape.playable_count());
        for row in 0..self.rows() {
            for column in 0..self.columns() {
                if !self.shape.is_playable(column, row) {
                    continue;
                }
                let kind = loop {
                    let kind = random_kind(&mut self.rng);
                    let left_run = column >= 2
                        && self.kind_at(column - 1, row) == Some(kind)
                        && self.kind_at(column - 2, row) == Some(kind);
                    let down_run = row >= 2
                        && self.kind_at(column, row - 1) == Some(kind)
                        && self.kind_at(column, row - 2) == Some(kind);
                    if !left_run && !down_run {
                        break kind;
                    }
                };
                created.push(self.spawn(Coord::new(column, row), kind));
            }
        }
        created
    }

    /// Whether the piece at (column, row) sits in a run of three or more
    ///
    /// Counts same-kind neighbours left and right, then down and up.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the board or empty.
    #[track_caller]
    pub fn has_chain(&self, column: usize, row: usize) -> bool {
        let kind = match self.pieces.get(column, row) {
            Some(piece) => piece.kind,
            None => panic!("has_chain probed empty cell ({}, {})", column, row),
        };

        let mut horizontal = 1;
        let mut i = column;
        while i > 0 && self.kind_at(i - 1, row) == Some(kind) {
            i -= 1;
            horizontal += 1;
        }
        i = column + 1;
        while self.kind_at(i, row) == Some(kind) {
            i += 1;
            horizontal += 1;
        }
        if horizontal >= MIN_CHAIN_LEN {
            return true;
        }

        let mut vertical = 1;
        let mut i = row;
        while i > 0 && self.kind_at(column, i - 1) == Some(kind) {
            i -= 1;
            vertical += 1;
        }
        i = row + 1;
        while self.kind_at(column, i) == Some(kind) {
            i += 1;
            vertical += 1;
        }
        vertical >= MIN_CHAIN_LEN
    }

    /// Recompute the set of swaps that would create a chain
    ///
    /// Each occupied cell is tried against its right and upper neighbour by
    /// swapping them in place, probing both cells, and swapping back. Swaps are
    /// listed in discovery order (row-major, right neighbour before upper).
    pub fn detect_possible_swaps(&mut self) -> &[Swap] {
        let mut found = Vec::new();
        for row in 0..self.rows() {
            for column in 0..self.columns() {
                let Some(piece) = self.piece_at(column, row) else {
                    continue;
                };
                let here = Coord::new(column, row);

                let mut neighbours: ArrayVec<Coord, 2> = ArrayVec::new();
                if column + 1 < self.columns() {
                    neighbours.push(Coord::new(column + 1, row));
                }
                if row + 1 < self.rows() {
                    neighbours.push(Coord::new(column, row + 1));
                }

                for there in neighbours {
                    let Some(other) = self.piece_at(there.column, there.row) else {
                        continue;
                    };
                    self.pieces.swap_cells(here, there);
                    let creates_chain = self.has_chain(there.column, there.row)
                        || self.has_chain(here.column, here.row);
                    self.pieces.swap_cells(here, there);
                    if creates_chain {
                        found.push(Swap::new(piece, other));
                    }
                }
            }
        }
        trace!("[Engine] {} legal swaps", found.len());
        self.possible_swaps = found;
        &self.possible_swaps
    }

    /// Whether `swap` is in the last-computed legal set (either orientation)
    pub fn is_possible_swap(&self, swap: &Swap) -> bool {
        self.possible_swaps.contains(swap)
    }

    /// Build a swap from two adjacent occupied cells
    ///
    /// Returns `None` when the cells are not neighbours, lie off the board, or
    /// either is empty. Legality is not checked.
    pub fn swap_between(&self, from: Coord, to: Coord) -> Option<Swap> {
        if !from.is_adjacent(to)
            || !self.pieces.contains(from.column, from.row)
            || !self.pieces.contains(to.column, to.row)
        {
            return None;
        }
        let a = self.piece_at(from.column, from.row)?;
        let b = self.piece_at(to.column, to.row)?;
        Some(Swap::new(a, b))
    }

    /// Exchange the two pieces of `swap`
    ///
    /// Pieces are looked up by id, so applying the same swap twice restores
    /// the board. No legality check happens here; validate with
    /// [`MatchEngine::is_possible_swap`] first.
    ///
    /// # Panics
    ///
    /// Panics if either piece is not on the board or the two are not adjacent.
    #[track_caller]
    pub fn perform_swap(&mut self, swap: &Swap) {
        let pos_a = match self.locate(swap.a.id) {
            Some(pos) => pos,
            None => panic!("swap piece {} is not on the board", swap.a.id),
        };
        let pos_b = match self.locate(swap.b.id) {
            Some(pos) => pos,
            None => panic!("swap piece {} is not on the board", swap.b.id),
        };
        assert!(
            pos_a.is_adjacent(pos_b),
            "swap pieces at {} and {} are not adjacent",
            pos_a,
            pos_b
        );

        self.pieces.swap_cells(pos_a, pos_b);
        for pos in [pos_a, pos_b] {
            if let Some(piece) = self.pieces.get_mut(pos.column, pos.row) {
                piece.coord = pos;
            }
        }
        trace!("[Engine] swapped {} <-> {}", pos_a, pos_b);
    }

    /// All maximal horizontal runs of three or more, scanning each row left to right
    pub fn detect_horizontal_matches(&self) -> Vec<Chain> {
        self.detect_matches(ChainAxis::Horizontal)
    }

    /// All maximal vertical runs of three or more, scanning each column bottom to top
    pub fn detect_vertical_matches(&self) -> Vec<Chain> {
        self.detect_matches(ChainAxis::Vertical)
    }

    fn detect_matches(&self, axis: ChainAxis) -> Vec<Chain> {
        let (lines, length) = match axis {
            ChainAxis::Horizontal => (self.rows(), self.columns()),
            ChainAxis::Vertical => (self.columns(), self.rows()),
        };
        let at = |line: usize, i: usize| match axis {
            ChainAxis::Horizontal => Coord::new(i, line),
            ChainAxis::Vertical => Coord::new(line, i),
        };
        let kind_at = |line: usize, i: usize| {
            let c = at(line, i);
            self.kind_at(c.column, c.row)
        };

        let mut chains = Vec::new();
        for line in 0..lines {
            let mut i = 0;
            while i + MIN_CHAIN_LEN <= length {
                let Some(kind) = kind_at(line, i) else {
                    i += 1;
                    continue;
                };
                if (1..MIN_CHAIN_LEN).all(|d| kind_at(line, i + d) == Some(kind)) {
                    let mut chain = Chain::new(axis);
                    while i < length && kind_at(line, i) == Some(kind) {
                        let c = at(line, i);
                        if let Some(piece) = self.piece_at(c.column, c.row) {
                            chain.push(piece);
                        }
                        i += 1;
                    }
                    chains.push(chain);
                    continue;
                }
                i += 1;
            }
        }
        chains
    }

    /// True when at least one chain exists on the board
    pub fn has_matches(&self) -> bool {
        !self.detect_horizontal_matches().is_empty() || !self.detect_vertical_matches().is_empty()
    }

    /// Detect, score and clear every chain
    ///
    /// Horizontal and vertical chains are found independently on the same
    /// board, so a piece at the crossing of an L or T shape belongs to (and is
    /// scored in) both. Returns horizontal chains followed by vertical ones.
    pub fn remove_matches(&mut self) -> Vec<Chain> {
        let mut chains = self.detect_horizontal_matches();
        chains.extend(self.detect_vertical_matches());

        for chain in &mut chains {
            for piece in chain.pieces() {
                self.pieces.take(piece.column(), piece.row());
            }
            chain.assign_score();
        }

        if !chains.is_empty() {
            debug!(
                "[Engine] removed {} chains worth {} points",
                chains.len(),
                chains.iter().map(Chain::score).sum::<u32>()
            );
        }
        chains
    }

    /// Let pieces fall into the holes below them
    ///
    /// For each column, bottom up, every empty playable cell takes the nearest
    /// piece above it. Returns the moved pieces per column (columns without
    /// movement are left out), bottom-most hole first.
    pub fn fill_holes(&mut self) -> Vec<Vec<Piece>> {
        let mut columns = Vec::new();
        for column in 0..self.columns() {
            let mut moved = Vec::new();
            for row in 0..self.rows() {
                if !self.shape.is_playable(column, row) || self.pieces.is_occupied(column, row) {
                    continue;
                }
                for lookup in (row + 1)..self.rows() {
                    if let Some(mut piece) = self.pieces.take(column, lookup) {
                        piece.coord = Coord::new(column, row);
                        self.pieces.set(column, row, Some(piece));
                        moved.push(piece);
                        break;
                    }
                }
            }
            if !moved.is_empty() {
                columns.push(moved);
            }
        }
        trace!("[Engine] pieces fell in {} columns", columns.len());
        columns
    }

    /// Create new pieces in the empty cells at the top of each column
    ///
    /// Scans each column from the top row down until it meets a piece. Each
    /// new piece differs in kind from the piece created just before it in this
    /// pass (across columns too). Runs with pieces already on the board are not
    /// prevented; the next cascade pass clears them.
    pub fn top_up(&mut self) -> Vec<Vec<Piece>> {
        let mut columns = Vec::new();
        let mut previous: Option<Kind> = None;
        for column in 0..self.columns() {
            let mut created = Vec::new();
            for row in (0..self.rows()).rev() {
                if self.pieces.is_occupied(column, row) {
                    break;
                }
                if !self.shape.is_playable(column, row) {
                    continue;
                }
                let kind = random_kind_except(&mut self.rng, previous);
                previous = Some(kind);
                created.push(self.spawn(Coord::new(column, row), kind));
            }
            if !created.is_empty() {
                columns.push(created);
            }
        }
        trace!(
            "[Engine] topped up {} pieces",
            columns.iter().map(Vec::len).sum::<usize>()
        );
        columns
    }

    /// Run remove / fill / top-up until a pass removes nothing
    ///
    /// Returns one step per pass that removed at least one chain. Does not
    /// recompute the legal swaps.
    pub fn resolve_cascade(&mut self) -> Vec<CascadeStep> {
        let mut steps = Vec::new();
        loop {
            let chains = self.remove_matches();
            if chains.is_empty() {
                break;
            }
            let falls = self.fill_holes();
            let refills = self.top_up();
            steps.push(CascadeStep {
                chains,
                falls,
                refills,
            });
        }
        if !steps.is_empty() {
            debug!("[Engine] cascade settled after {} passes", steps.len());
        }
        steps
    }

    /// Whether every piece sits on a playable cell and knows its own coordinate
    pub fn respects_shape(&self) -> bool {
        self.pieces.iter().all(|(coord, piece)| match piece {
            Some(piece) => piece.coord == coord && self.shape.is_playable(coord.column, coord.row),
            None => true,
        })
    }

    /// Whether every playable cell holds a piece (and nothing else does)
    pub fn is_settled(&self) -> bool {
        self.respects_shape() && self.pieces.occupied_count() == self.shape.playable_count()
    }

    /// Plain-data copy of the board for renderers
    pub fn snapshot(&self) -> BoardSnapshot {
        let cells = self
            .pieces
            .iter()
            .map(|(coord, piece)| match piece {
                Some(piece) => SnapshotCell::Piece(piece.kind),
                None if self.shape.is_playable(coord.column, coord.row) => SnapshotCell::Empty,
                None => SnapshotCell::Hole,
            })
            .collect();
        BoardSnapshot {
            columns: self.columns(),
            rows: self.rows(),
            cells,
        }
    }
}
