//! Game state queries and AI move selection
//!
//! Functions for querying the game and asking the engine for a move.

use crate::error::EngineResult;
use crate::game::GameState;
use crate::search::{find_best_move, SearchLimits, SearchReport};
use crate::types::{Color, Orientation, Score};

/// Get the engine's reply for `color` in the current position
///
/// The game is searched in place and handed back unchanged; the caller
/// applies the returned move.
pub fn reply(
    game: &mut GameState,
    limits: SearchLimits,
    color: Color,
) -> EngineResult<SearchReport> {
    find_best_move(game, limits, color)
}

/// True once either player has reached its goal row
pub fn is_terminal_state(game: &GameState) -> bool {
    game.is_terminal()
}

/// Heuristic score for `color`, higher is better
pub fn evaluate_state(game: &GameState, color: Color) -> Score {
    game.evaluate(color)
}

pub fn position_hash(game: &GameState) -> u64 {
    game.position_hash()
}

pub fn get_coordinates(game: &GameState, color: Color) -> (u8, u8) {
    game.coordinates(color)
}

pub fn get_walls_remaining(game: &GameState, color: Color) -> u8 {
    game.walls_remaining(color)
}

pub fn has_wall_segment(game: &GameState, row: u8, col: u8, orientation: Orientation) -> bool {
    game.has_wall_segment(row, col, orientation)
}
