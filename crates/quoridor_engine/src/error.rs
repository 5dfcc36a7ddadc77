//! Error types for the quoridor engine
//!
//! Three families of failure exist:
//! - [`InvalidMove`]: a proposed move breaks a rule. Always recoverable, the
//!   game state is left exactly as it was.
//! - [`EngineError::InvalidDimension`]: a board could not be built.
//! - [`EngineError::Invariant`] / [`EngineError::UndoMismatch`]: the engine
//!   itself is inconsistent. These are fatal and must be surfaced to the caller.

use crate::moves::Move;
use crate::types::{Color, Square};
use thiserror::Error;

/// Why a proposed move was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    /// Target square or wall anchor lies outside the board
    #[error("target ({row}, {col}) is outside the board")]
    OutOfBounds { row: u8, col: u8 },

    /// Translation is not a single orthogonal step
    #[error("{from} -> {to} is not a single orthogonal step")]
    NotAdjacent { from: Square, to: Square },

    /// Translation does not start from the mover's square
    #[error("{color} pawn is not on {from}")]
    WrongOrigin { color: Color, from: Square },

    /// A wall separates origin and destination
    #[error("a wall blocks {from} -> {to}")]
    WallBlocked { from: Square, to: Square },

    /// Destination holds the other pawn
    #[error("{square} is occupied by the other pawn")]
    SquareOccupied { square: Square },

    /// Mover has no wall tokens left
    #[error("{color} has no walls remaining")]
    NoWallsRemaining { color: Color },

    /// One of the two wall segments is already in use
    #[error("wall segment at ({row}, {col}) is already occupied")]
    SegmentOccupied { row: u8, col: u8 },

    /// Another wall already crosses at the same corner
    #[error("another wall already crosses corner ({row}, {col})")]
    WallCrossing { row: u8, col: u8 },

    /// The wall would leave a player without a path to its goal row
    #[error("wall would cut {color} off from its goal row")]
    DisconnectsPlayer { color: Color },
}

/// Errors that can occur in the quoridor engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A rule-breaking move was proposed
    #[error("Invalid move: {0}")]
    InvalidMove(#[from] InvalidMove),

    /// Board dimension fails the odd-size rule
    #[error("Invalid board dimension {dimension} (must be odd, between {min} and {max})")]
    InvalidDimension { dimension: u8, min: u8, max: u8 },

    /// Search was asked to move in a finished game
    #[error("Game is already over")]
    GameOver,

    /// Undo requested for a move that is not the most recent one
    #[error("Undo mismatch: expected {expected:?}, got {actual}")]
    UndoMismatch { expected: Option<Move>, actual: Move },

    /// Internal consistency check failed
    #[error("Engine invariant violated: {message}")]
    Invariant { message: String },
}

impl EngineError {
    /// True for the fatal family (bugs, not user mistakes)
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            EngineError::Invariant { .. } | EngineError::UndoMismatch { .. }
        )
    }

    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        EngineError::Invariant {
            message: message.into(),
        }
    }
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
