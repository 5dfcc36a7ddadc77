//! Move ordering for alpha-beta pruning
//!
//! Tries the moves most likely to be best first:
//! - the hinted move (previous iteration's best, or the table move)
//! - pawn steps that shorten the mover's path
//! - walls that cut the opponent's current shortest path, nearest first
//! - everything else

use crate::board::{BoardModel, Wall};
use crate::evaluation::path_distance;
use crate::game::GameState;
use crate::moves::Move;
use crate::types::{Color, Square};

const HINT_BONUS: i32 = 1_000_000;
const TRANSLATION_BASE: i32 = 1_000;
const STEP_GAIN: i32 = 100;
const CUTS_OPPONENT: i32 = 500;
const CUTS_OWN: i32 = -200;

/// Sort `moves` in place, most promising first
///
/// The sort is stable, so equally scored moves keep generation order.
pub(crate) fn order_moves(game: &GameState, color: Color, moves: &mut [Move], hint: Option<Move>) {
    let board = game.board();
    let own = game.player(color);
    let opponent = game.player(color.opponent());
    let own_distance = path_distance(game, color);

    let path_of = |from: Square, goal: u8| {
        board
            .shortest_path(from, goal)
            .map(|squares| BoardModel::path_segments(&squares))
            .unwrap_or_default()
    };
    let opponent_path = path_of(opponent.position, opponent.goal_row);
    let own_path = path_of(own.position, own.goal_row);
    let reach = 2 * i32::from(game.dimension());

    let score = |mv: &Move| -> i32 {
        if Some(*mv) == hint {
            return HINT_BONUS;
        }
        match *mv {
            Move::Translation { to, .. } => {
                let after = board
                    .distance_to_goal(to, own.goal_row)
                    .map_or(own_distance, |d| d as i32);
                TRANSLATION_BASE + (own_distance - after) * STEP_GAIN
            }
            Move::WallPlacement {
                row,
                col,
                orientation,
                ..
            } => {
                let wall = Wall::new(row, col, orientation);
                let mut score = 0;
                if wall.cuts(&opponent_path) {
                    score += CUTS_OPPONENT;
                }
                if wall.cuts(&own_path) {
                    score += CUTS_OWN;
                }
                score + reach - opponent.position.manhattan(Square::new(row, col)) as i32
            }
        }
    };

    moves.sort_by_cached_key(|mv| std::cmp::Reverse(score(mv)));
}
