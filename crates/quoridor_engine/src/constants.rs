//! # Engine Constants - Board Limits, Evaluation Weights & Search Parameters
//!
//! ## Board Size Rule
//!
//! A board has an odd side length so that both pawns start on the centre
//! column of their baseline. The smallest playable board is 3×3; the largest
//! is capped at 25×25 so that every coordinate fits in a `u8` and the Zobrist
//! tables stay small.
//!
//! ## Score Units
//!
//! Scores are integers. One step of shortest-path advantage is worth
//! [`PATH_WEIGHT`]; one wall token in hand is worth [`WALL_WEIGHT`]. A wall
//! token is deliberately worth less than a step, so the engine only spends a
//! wall when it costs the opponent at least one step.
//!
//! Values at or beyond [`WIN_THRESHOLD`] denote a forced result. The distance
//! to the win is folded into the score (`WIN_SCORE - ply`) so that the search
//! prefers the fastest win and the slowest loss.

use super::types::Score;

/// Smallest legal board dimension
pub const MIN_DIMENSION: u8 = 3;

/// Largest legal board dimension
pub const MAX_DIMENSION: u8 = 25;

/// Standard tournament board
pub const DEFAULT_DIMENSION: u8 = 9;

/// Standard two-player wall allowance
pub const DEFAULT_WALLS: u8 = 10;

/// Absolute iterative deepening cap
pub const MAX_DEPTH: u8 = 32;

/// Default number of transposition table slots
pub const DEFAULT_TT_CAPACITY: usize = 1 << 18;

/// Default wall-clock budget per decision
pub const DEFAULT_THINK_TIME_MS: u64 = 2_000;

/// Score of a position where the evaluated side has reached its goal row
pub const WIN_SCORE: Score = 100_000;

/// Any score at or above this magnitude is a proven result
pub const WIN_THRESHOLD: Score = WIN_SCORE - 1_000;

/// Alpha-beta window bound
pub const AB_INF: Score = WIN_SCORE + 1;

/// Weight of one step of shortest-path advantage
pub const PATH_WEIGHT: Score = 10;

/// Weight of one wall token in hand
pub const WALL_WEIGHT: Score = 3;

/// Seed for the Zobrist key generator (mixed with the board dimension)
pub const ZOBRIST_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Orthogonal step offsets as (row delta, column delta)
pub const DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
