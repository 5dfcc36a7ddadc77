//! Alpha-beta search with iterative deepening
//!
//! This module implements the move-choosing side of the engine:
//! - Negamax variant of alpha-beta pruning
//! - Iterative deepening under a wall-clock deadline
//! - Transposition table with depth and bound tags
//! - Move ordering for better pruning
//!
//! Every search call owns its table, statistics and deadline; nothing is
//! shared between calls or held in globals. The game state is borrowed
//! mutably for the duration of one decision and handed back unchanged.
//!
//! ## Module Organization
//!
//! - `alphabeta` - Core negamax search and the root driver
//! - `ordering` - Move ordering heuristics
//! - `make_unmake` - Move making/unmaking inside the tree
//! - `iterative` - Iterative deepening wrapper

mod alphabeta;
mod iterative;
mod make_unmake;
mod ordering;

use crate::constants::{DEFAULT_THINK_TIME_MS, DEFAULT_TT_CAPACITY, MAX_DEPTH};
use crate::error::EngineResult;
use crate::game::GameState;
use crate::moves::Move;
use crate::tt::TranspositionTable;
use crate::types::{Color, Score};
use instant::Instant;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Budget for one move decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    /// Wall-clock budget in milliseconds
    pub think_time_ms: u64,
    /// Deepest iteration to attempt, clamped to `1..=MAX_DEPTH`
    pub max_depth: u8,
    /// Transposition table slots
    pub table_capacity: usize,
}

impl SearchLimits {
    pub fn think_time(&self) -> Duration {
        Duration::from_millis(self.think_time_ms)
    }

    /// Depth cap actually used by the search
    pub fn depth_cap(&self) -> u8 {
        self.max_depth.clamp(1, MAX_DEPTH)
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            think_time_ms: DEFAULT_THINK_TIME_MS,
            max_depth: MAX_DEPTH,
            table_capacity: DEFAULT_TT_CAPACITY,
        }
    }
}

/// Counters for one decision
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
    pub tt_hits: u64,
}

/// Outcome of [`SearchEngine::find_best_move`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchReport {
    pub best_move: Move,
    /// Score of `best_move` for the searching side
    pub score: Score,
    /// Deepest fully completed iteration, 0 when none completed
    pub depth: u8,
    pub nodes: u64,
    pub cutoffs: u64,
    pub tt_hits: u64,
    pub elapsed: Duration,
}

/// Wall-clock cut-off, polled at every node
#[derive(Debug, Clone, Copy)]
pub(crate) struct Deadline {
    start: Instant,
    budget: Duration,
}

impl Deadline {
    pub(crate) fn new(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }

    #[inline]
    pub(crate) fn expired(&self) -> bool {
        self.start.elapsed() >= self.budget
    }

    #[inline]
    pub(crate) fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Move chooser owning its transposition table
pub struct SearchEngine {
    limits: SearchLimits,
    table: TranspositionTable,
    stats: SearchStats,
}

impl SearchEngine {
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            table: TranspositionTable::new(limits.table_capacity),
            limits,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Counters of the most recent decision
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[inline]
    pub fn table(&self) -> &TranspositionTable {
        &self.table
    }

    /// Choose a move for `color`
    ///
    /// Returns the best move of the deepest iteration that finished before the
    /// deadline. `game` is searched in place and restored before returning.
    ///
    /// # Errors
    ///
    /// - [`crate::EngineError::GameOver`] if the position is already decided
    /// - [`crate::EngineError::Invariant`] if `color` has no legal move or the
    ///   state was not restored
    pub fn find_best_move(
        &mut self,
        game: &mut GameState,
        color: Color,
    ) -> EngineResult<SearchReport> {
        iterative::iterative_deepening(self, game, color)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchLimits::default())
    }
}

/// One-shot search with a fresh engine
pub fn find_best_move(
    game: &mut GameState,
    limits: SearchLimits,
    color: Color,
) -> EngineResult<SearchReport> {
    SearchEngine::new(limits).find_best_move(game, color)
}
