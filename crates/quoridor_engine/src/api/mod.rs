//! Public API for the engine
//!
//! The collaborator contract used by front ends (text protocol, terminal
//! renderer, GUI). Every function is a thin, validated wrapper over
//! [`GameState`](crate::GameState) and the search.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, reset_game, set_player_walls)
//! - `moves` - Move generation, execution and undo
//! - `state` - State queries and AI (evaluate_state, position_hash, reply)

mod game;
mod moves;
mod state;

pub use game::{new_game, reset_game, set_player_walls};
pub use moves::{build_move, execute_move, is_legal_move, legal_moves, undo_move};
pub use state::{
    evaluate_state, get_coordinates, get_walls_remaining, has_wall_segment, is_terminal_state,
    position_hash, reply,
};
