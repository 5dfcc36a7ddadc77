//! Game lifecycle management
//!
//! Functions for creating, resetting and setting up games.

use crate::error::EngineResult;
use crate::game::GameState;
use crate::types::Color;

/// Create a new game on a `dimension`×`dimension` board with `walls` per player
pub fn new_game(dimension: u8, walls: u8) -> EngineResult<GameState> {
    GameState::with_walls(dimension, walls)
}

/// Reset the game to the starting position on a board of `dimension`
///
/// An invalid dimension is rejected and the running game is kept.
pub fn reset_game(game: &mut GameState, dimension: u8) -> EngineResult<()> {
    game.reset(dimension)
}

/// Give `color` exactly `count` wall tokens
pub fn set_player_walls(game: &mut GameState, color: Color, count: u8) {
    game.set_player_walls(color, count);
}
