//! Move execution and validation
//!
//! Front ends describe a move as (color, optional orientation, row, column).
//! [`build_move`] turns that description into a [`Move`] against the current
//! position, filling in the origin square of a translation.

use crate::error::EngineResult;
use crate::game::GameState;
use crate::moves::Move;
use crate::types::{Color, Orientation, Square};

/// Build a move from its caller-facing description
///
/// Without an orientation the move is a translation from `color`'s current
/// square to `(row, col)`; with one it is a wall anchored at `(row, col)`.
/// The move is not validated.
pub fn build_move(
    game: &GameState,
    color: Color,
    orientation: Option<Orientation>,
    row: u8,
    col: u8,
) -> Move {
    match orientation {
        Some(orientation) => Move::wall(color, row, col, orientation),
        None => Move::translation(color, game.player(color).position, Square::new(row, col)),
    }
}

/// All legal moves for `color`
pub fn legal_moves(game: &GameState, color: Color) -> Vec<Move> {
    game.legal_moves(color)
}

/// Check a move without applying it
pub fn is_legal_move(game: &GameState, mv: &Move) -> bool {
    game.validate_move(mv).is_ok()
}

/// Validate and apply a move; rejected moves leave the game unchanged
pub fn execute_move(game: &mut GameState, mv: Move) -> EngineResult<()> {
    game.execute_move(mv)
}

/// Undo the most recently executed move
pub fn undo_move(game: &mut GameState, mv: Move) -> EngineResult<()> {
    game.undo_move(mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::new_game;

    #[test]
    fn test_build_move_fills_origin() {
        let game = new_game(9, 10).unwrap();
        let step = build_move(&game, Color::Black, None, 7, 4);
        assert_eq!(
            step,
            Move::translation(Color::Black, Square::new(8, 4), Square::new(7, 4))
        );
        assert!(is_legal_move(&game, &step));

        let wall = build_move(&game, Color::White, Some(Orientation::Vertical), 2, 2);
        assert_eq!(wall.target(), (Color::White, Some(Orientation::Vertical), 2, 2));
    }

    #[test]
    fn test_execute_then_undo() {
        let mut game = new_game(9, 10).unwrap();
        let hash = game.position_hash();
        let moves = legal_moves(&game, Color::White);
        assert_eq!(moves.len(), 3 + 128, "three steps and every wall on an empty board");

        let wall = build_move(&game, Color::White, Some(Orientation::Horizontal), 5, 5);
        execute_move(&mut game, wall).unwrap();
        assert!(!is_legal_move(&game, &wall), "same wall twice is illegal");
        undo_move(&mut game, wall).unwrap();
        assert_eq!(game.position_hash(), hash);
    }
}
