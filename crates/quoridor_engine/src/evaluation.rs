//! Static position evaluation
//!
//! The score is a race count. Each side's remaining distance is the length of
//! its shortest path to the goal row; being closer than the opponent is what
//! wins. Wall tokens still in hand break ties, since they can lengthen the
//! opponent's path later.

use crate::constants::{PATH_WEIGHT, WALL_WEIGHT, WIN_SCORE};
use crate::game::GameState;
use crate::types::{Color, Score};

/// Shortest-path distance for `color`, as a score term
///
/// The wall rule keeps every player connected, so the path always exists.
/// A cut-off player would be a broken invariant; it is treated as maximally
/// far away rather than panicking mid-search.
pub fn path_distance(game: &GameState, color: Color) -> Score {
    let unreachable = Score::from(game.dimension()).pow(2);
    game.distance_to_goal(color)
        .map_or(unreachable, |distance| distance as Score)
}

/// Heuristic value of the position for `color`, higher is better
pub fn evaluate(game: &GameState, color: Color) -> Score {
    if let Some(winner) = game.winner() {
        return if winner == color { WIN_SCORE } else { -WIN_SCORE };
    }

    let opponent = color.opponent();
    let race = path_distance(game, opponent) - path_distance(game, color);
    let walls =
        Score::from(game.walls_remaining(color)) - Score::from(game.walls_remaining(opponent));

    race * PATH_WEIGHT + walls * WALL_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;
    use crate::types::{Orientation, Square};

    #[test]
    fn test_start_position_is_balanced() {
        let game = GameState::new(9).unwrap();
        assert_eq!(evaluate(&game, Color::White), 0);
        assert_eq!(evaluate(&game, Color::Black), 0);
        assert_eq!(path_distance(&game, Color::White), 8);
    }

    #[test]
    fn test_evaluation_is_antisymmetric() {
        let mut game = GameState::new(9).unwrap();
        game.execute_move(Move::translation(
            Color::White,
            Square::new(0, 4),
            Square::new(1, 4),
        ))
        .unwrap();
        game.execute_move(Move::wall(Color::White, 6, 3, Orientation::Horizontal))
            .unwrap();

        let white = evaluate(&game, Color::White);
        assert_eq!(white, -evaluate(&game, Color::Black));
        // The wall costs both pawns a detour step: white 8 to go, black 9
        assert_eq!(white, PATH_WEIGHT - WALL_WEIGHT);
    }

    #[test]
    fn test_terminal_scores() {
        let mut game = GameState::new(3).unwrap();
        game.execute_move(Move::translation(
            Color::White,
            Square::new(0, 1),
            Square::new(0, 0),
        ))
        .unwrap();
        game.execute_move(Move::translation(
            Color::White,
            Square::new(0, 0),
            Square::new(1, 0),
        ))
        .unwrap();
        game.execute_move(Move::translation(
            Color::White,
            Square::new(1, 0),
            Square::new(2, 0),
        ))
        .unwrap();

        assert!(game.is_terminal());
        assert_eq!(evaluate(&game, Color::White), WIN_SCORE);
        assert_eq!(evaluate(&game, Color::Black), -WIN_SCORE);
    }
}
