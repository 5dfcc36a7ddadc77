//! Move making and unmaking for search
//!
//! Inside the tree every move comes from move generation on the very position
//! it is applied to, so a rejection here is an engine bug, never a user error.

use crate::error::{EngineError, EngineResult};
use crate::game::GameState;
use crate::moves::Move;

/// Apply a generated move
pub(crate) fn make_move(game: &mut GameState, mv: Move) -> EngineResult<()> {
    game.apply_generated(mv).map_err(|err| match err {
        EngineError::InvalidMove(reason) => {
            EngineError::invariant(format!("search generated an illegal move {mv}: {reason}"))
        }
        other => other,
    })
}

/// Revert the move applied by the matching [`make_move`]
pub(crate) fn unmake_move(game: &mut GameState, mv: Move) -> EngineResult<()> {
    game.undo_move(mv)
}
