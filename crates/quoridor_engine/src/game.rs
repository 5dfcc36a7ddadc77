//! Game state: board, both players, move history and side to move
//!
//! Moves follow a strict life cycle: a proposed move is validated, then
//! applied, and may later be undone. Validation failures leave the state
//! untouched; every mutating path either fully succeeds or changes nothing.
//!
//! Undo is stack disciplined. Only the most recently executed move can be
//! undone, which is exactly how the search walks the tree: every
//! `execute_move` on the way down is paired with one `undo_move` on the way
//! back up.

use crate::board::{BoardModel, Segment, Wall};
use crate::constants::DEFAULT_WALLS;
use crate::error::{EngineError, EngineResult, InvalidMove};
use crate::evaluation;
use crate::hash::ZobristKeys;
use crate::moves::Move;
use crate::types::{Color, Orientation, PlayerState, Score, Square};
use std::sync::Arc;

/// One applied move plus what undo needs to restore the turn indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Ply {
    mv: Move,
    side_before: Color,
}

#[derive(Debug, Clone)]
pub struct GameState {
    board: BoardModel,
    players: [PlayerState; 2],
    history: Vec<Ply>,
    side_to_move: Color,
    starting_walls: u8,
    keys: Arc<ZobristKeys>,
    hash: u64,
}

impl GameState {
    /// New game with the standard wall allowance
    pub fn new(dimension: u8) -> EngineResult<Self> {
        Self::with_walls(dimension, DEFAULT_WALLS)
    }

    /// New game where each player starts with `walls` tokens
    pub fn with_walls(dimension: u8, walls: u8) -> EngineResult<Self> {
        let board = BoardModel::new(dimension)?;
        let players = [
            PlayerState::at_start(Color::White, dimension, walls),
            PlayerState::at_start(Color::Black, dimension, walls),
        ];
        let keys = Arc::new(ZobristKeys::new(dimension));
        let hash = keys.compute(&board, &players, Color::White);
        Ok(Self {
            board,
            players,
            history: Vec::new(),
            side_to_move: Color::White,
            starting_walls: walls,
            keys,
            hash,
        })
    }

    /// Start over on a board of `dimension`, keeping the wall allowance
    ///
    /// On error the current game is left as it was.
    pub fn reset(&mut self, dimension: u8) -> EngineResult<()> {
        *self = Self::with_walls(dimension, self.starting_walls)?;
        Ok(())
    }

    /// Override a player's wall count (setup only)
    pub fn set_player_walls(&mut self, color: Color, count: u8) {
        self.set_walls(color, count);
    }

    #[inline]
    pub fn dimension(&self) -> u8 {
        self.board.dimension()
    }

    #[inline]
    pub fn board(&self) -> &BoardModel {
        &self.board
    }

    #[inline]
    pub fn player(&self, color: Color) -> &PlayerState {
        &self.players[color.index()]
    }

    #[inline]
    pub fn coordinates(&self, color: Color) -> (u8, u8) {
        let position = self.player(color).position;
        (position.row, position.col)
    }

    #[inline]
    pub fn walls_remaining(&self, color: Color) -> u8 {
        self.player(color).walls_remaining
    }

    #[inline]
    pub fn has_wall_segment(&self, row: u8, col: u8, orientation: Orientation) -> bool {
        self.board.has_wall_segment(row, col, orientation)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Executed moves, oldest first
    pub fn history(&self) -> impl Iterator<Item = &Move> + '_ {
        self.history.iter().map(|ply| &ply.mv)
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|ply| ply.mv)
    }

    /// Incrementally maintained position hash
    #[inline]
    pub fn position_hash(&self) -> u64 {
        self.hash
    }

    /// Position hash computed from scratch
    pub fn recompute_hash(&self) -> u64 {
        self.keys.compute(&self.board, &self.players, self.side_to_move)
    }

    /// True when either pawn stands on its goal row
    pub fn is_terminal(&self) -> bool {
        self.players.iter().any(PlayerState::has_reached_goal)
    }

    pub fn winner(&self) -> Option<Color> {
        self.players
            .iter()
            .find(|p| p.has_reached_goal())
            .map(|p| p.color)
    }

    /// Shortest-path length from a player's square to its goal row
    pub fn distance_to_goal(&self, color: Color) -> Option<u32> {
        let player = self.player(color);
        self.board.distance_to_goal(player.position, player.goal_row)
    }

    /// Heuristic score from `color`'s point of view
    pub fn evaluate(&self, color: Color) -> Score {
        evaluation::evaluate(self, color)
    }

    /// Check a move against the rules without applying it
    pub fn validate_move(&self, mv: &Move) -> Result<(), InvalidMove> {
        match *mv {
            Move::Translation { from, to, color } => self.validate_translation(color, from, to),
            Move::WallPlacement {
                row,
                col,
                orientation,
                color,
            } => self.validate_wall(color, Wall::new(row, col, orientation), None),
        }
    }

    fn validate_translation(
        &self,
        color: Color,
        from: Square,
        to: Square,
    ) -> Result<(), InvalidMove> {
        let player = self.player(color);
        if player.position != from {
            return Err(InvalidMove::WrongOrigin { color, from });
        }
        if !self.board.is_valid_square(to.row, to.col) {
            return Err(InvalidMove::OutOfBounds {
                row: to.row,
                col: to.col,
            });
        }
        if !from.is_adjacent(to) {
            return Err(InvalidMove::NotAdjacent { from, to });
        }
        if self.board.is_blocked(from, to) {
            return Err(InvalidMove::WallBlocked { from, to });
        }
        if self.player(color.opponent()).position == to {
            return Err(InvalidMove::SquareOccupied { square: to });
        }
        Ok(())
    }

    /// Full wall legality, optionally with precomputed shortest paths
    ///
    /// A wall that cuts no segment of a player's current shortest path leaves
    /// that path intact, so the reachability search only runs for walls that
    /// do cut one.
    fn validate_wall(
        &self,
        color: Color,
        wall: Wall,
        paths: Option<&[Vec<Segment>; 2]>,
    ) -> Result<(), InvalidMove> {
        if self.player(color).walls_remaining == 0 {
            return Err(InvalidMove::NoWallsRemaining { color });
        }
        self.board.check_wall_geometry(wall)?;

        for player in &self.players {
            let cuts_path = match paths {
                Some(paths) => wall.cuts(&paths[player.color.index()]),
                None => true,
            };
            if cuts_path
                && !self
                    .board
                    .reaches_goal_with_wall(player.position, player.goal_row, wall)
            {
                return Err(InvalidMove::DisconnectsPlayer {
                    color: player.color,
                });
            }
        }
        Ok(())
    }

    /// Validate and apply a move
    ///
    /// Rejected moves return [`EngineError::InvalidMove`] and leave the state unchanged.
    pub fn execute_move(&mut self, mv: Move) -> EngineResult<()> {
        self.validate_move(&mv)?;
        self.apply(mv)
    }

    /// Apply a move produced by [`GameState::legal_moves`] for this same position
    ///
    /// Skips the reachability search; wall geometry is still checked by the board.
    pub(crate) fn apply_generated(&mut self, mv: Move) -> EngineResult<()> {
        debug_assert!(self.validate_move(&mv).is_ok(), "{mv} is not legal here");
        self.apply(mv)
    }

    fn apply(&mut self, mv: Move) -> EngineResult<()> {
        let color = mv.color();
        match mv {
            Move::Translation { from, to, .. } => {
                self.players[color.index()].position = to;
                self.hash ^= self.keys.pawn(color, from) ^ self.keys.pawn(color, to);
            }
            Move::WallPlacement {
                row,
                col,
                orientation,
                ..
            } => {
                let wall = Wall::new(row, col, orientation);
                let remaining = self.players[color.index()]
                    .walls_remaining
                    .checked_sub(1)
                    .ok_or(InvalidMove::NoWallsRemaining { color })?;
                self.board.place_wall(wall)?;
                self.set_walls(color, remaining);
                self.hash ^= self.keys.wall(wall);
            }
        }
        let side_before = self.side_to_move;
        self.set_side(color.opponent());
        self.history.push(Ply { mv, side_before });
        Ok(())
    }

    /// Reverse the most recently executed move
    ///
    /// `mv` must equal the last history entry; anything else is an
    /// [`EngineError::UndoMismatch`] and nothing changes.
    pub fn undo_move(&mut self, mv: Move) -> EngineResult<()> {
        let ply = match self.history.last() {
            Some(ply) if ply.mv == mv => *ply,
            other => {
                return Err(EngineError::UndoMismatch {
                    expected: other.map(|ply| ply.mv),
                    actual: mv,
                })
            }
        };

        let color = mv.color();
        match mv {
            Move::Translation { from, to, .. } => {
                let player = &mut self.players[color.index()];
                if player.position != to {
                    return Err(EngineError::invariant(format!(
                        "undo of {mv}: {color} pawn is on {} instead of {to}",
                        player.position
                    )));
                }
                player.position = from;
                self.hash ^= self.keys.pawn(color, to) ^ self.keys.pawn(color, from);
            }
            Move::WallPlacement {
                row,
                col,
                orientation,
                ..
            } => {
                let wall = Wall::new(row, col, orientation);
                let restored = self.players[color.index()]
                    .walls_remaining
                    .checked_add(1)
                    .ok_or_else(|| {
                        EngineError::invariant(format!(
                            "undo of {mv}: {color} wall count overflows"
                        ))
                    })?;
                self.board.remove_wall(wall)?;
                self.set_walls(color, restored);
                self.hash ^= self.keys.wall(wall);
            }
        }
        self.set_side(ply.side_before);
        self.history.pop();
        Ok(())
    }

    /// Undo the most recent move, if any
    pub fn undo_last(&mut self) -> EngineResult<Option<Move>> {
        match self.last_move() {
            Some(mv) => self.undo_move(mv).map(|_| Some(mv)),
            None => Ok(None),
        }
    }

    fn set_walls(&mut self, color: Color, count: u8) {
        let player = &mut self.players[color.index()];
        self.hash ^= self.keys.wall_count(color, player.walls_remaining)
            ^ self.keys.wall_count(color, count);
        player.walls_remaining = count;
    }

    fn set_side(&mut self, side: Color) {
        self.hash ^= self.keys.side_to_move(self.side_to_move) ^ self.keys.side_to_move(side);
        self.side_to_move = side;
    }

    /// Legal translations for `color`, at most four
    pub fn legal_translations(&self, color: Color) -> Vec<Move> {
        let from = self.player(color).position;
        let blocker = self.player(color.opponent()).position;
        self.board
            .legal_neighbors(from)
            .filter(|&to| to != blocker)
            .map(|to| Move::translation(color, from, to))
            .collect()
    }

    /// Legal wall placements for `color`; empty when it has no walls left
    pub fn legal_walls(&self, color: Color) -> Vec<Move> {
        if self.player(color).walls_remaining == 0 {
            return Vec::new();
        }
        let paths = self.shortest_path_segments();
        let n = self.dimension();
        let mut walls = Vec::new();
        for row in 0..n - 1 {
            for col in 0..n - 1 {
                for orientation in Orientation::ALL {
                    let wall = Wall::new(row, col, orientation);
                    if self.validate_wall(color, wall, paths.as_ref()).is_ok() {
                        walls.push(Move::wall(color, row, col, orientation));
                    }
                }
            }
        }
        walls
    }

    /// Every legal move for `color`: translations first, then walls
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = self.legal_translations(color);
        moves.extend(self.legal_walls(color));
        moves
    }

    /// Segments crossed by each player's current shortest path, by color index
    ///
    /// `None` if some player is already cut off, which the wall rule never
    /// allows; callers then fall back to the full reachability check.
    fn shortest_path_segments(&self) -> Option<[Vec<Segment>; 2]> {
        let path = |player: &PlayerState| {
            self.board
                .shortest_path(player.position, player.goal_row)
                .map(|squares| BoardModel::path_segments(&squares))
        };
        Some([path(&self.players[0])?, path(&self.players[1])?])
    }
}

impl PartialEq for GameState {
    /// Positional equality: board, players, side to move and history
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.players == other.players
            && self.side_to_move == other.side_to_move
            && self.history == other.history
    }
}

impl Eq for GameState {}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_game() -> GameState {
        GameState::new(9).unwrap()
    }

    fn step(color: Color, from: (u8, u8), to: (u8, u8)) -> Move {
        Move::translation(color, from.into(), to.into())
    }

    #[test]
    fn test_new_game_setup() {
        for dimension in [3u8, 5, 9, 11] {
            let game = GameState::with_walls(dimension, 7).unwrap();
            let centre = dimension / 2;
            assert_eq!(game.coordinates(Color::White), (0, centre));
            assert_eq!(game.coordinates(Color::Black), (dimension - 1, centre));
            assert_eq!(game.walls_remaining(Color::White), 7);
            assert_eq!(game.walls_remaining(Color::Black), 7);
            assert_eq!(game.side_to_move(), Color::White);
            assert!(!game.is_terminal());
        }
    }

    #[test]
    fn test_even_dimension_rejected() {
        assert!(matches!(
            GameState::new(8),
            Err(EngineError::InvalidDimension { dimension: 8, .. })
        ));
    }

    #[test]
    fn test_translation_rules() {
        let mut game = new_game();

        let diagonal = step(Color::White, (0, 4), (1, 5));
        assert_eq!(
            game.execute_move(diagonal),
            Err(EngineError::InvalidMove(InvalidMove::NotAdjacent {
                from: Square::new(0, 4),
                to: Square::new(1, 5)
            }))
        );

        let off_board = step(Color::White, (0, 4), (0, 9));
        assert!(matches!(
            game.execute_move(off_board),
            Err(EngineError::InvalidMove(InvalidMove::OutOfBounds { .. }))
        ));

        let wrong_origin = step(Color::White, (1, 4), (2, 4));
        assert!(matches!(
            game.execute_move(wrong_origin),
            Err(EngineError::InvalidMove(InvalidMove::WrongOrigin { .. }))
        ));

        game.execute_move(Move::wall(Color::Black, 0, 3, Orientation::Horizontal))
            .unwrap();
        let blocked = step(Color::White, (0, 4), (1, 4));
        assert!(matches!(
            game.execute_move(blocked),
            Err(EngineError::InvalidMove(InvalidMove::WallBlocked { .. }))
        ));

        assert_eq!(game.history_len(), 1, "rejected moves leave no history");
    }

    #[test]
    fn test_malformed_move_errors_format() {
        let mut game = new_game();
        let bogus = step(Color::White, (200, 200), (201, 200));
        let err = game.execute_move(bogus).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidMove(InvalidMove::WrongOrigin {
                color: Color::White,
                from: Square::new(200, 200)
            })
        );
        assert_eq!(err.to_string(), "Invalid move: white pawn is not on (200, 200)");

        let undo = game.undo_move(bogus).unwrap_err();
        assert!(undo.to_string().contains("(200, 200)-(201, 200)"), "got {undo}");
        let wall = Move::wall(Color::Black, 250, 250, Orientation::Vertical);
        assert_eq!(wall.to_string(), "black (250, 250)v");
    }

    #[test]
    fn test_cannot_step_onto_opponent() {
        let mut game = GameState::new(3).unwrap();
        // 3x3: white (0,1), black (2,1)
        game.execute_move(step(Color::White, (0, 1), (1, 1))).unwrap();
        let onto = step(Color::Black, (2, 1), (1, 1));
        assert_eq!(
            game.execute_move(onto),
            Err(EngineError::InvalidMove(InvalidMove::SquareOccupied {
                square: Square::new(1, 1)
            }))
        );
        assert!(!game.legal_moves(Color::Black).contains(&onto));
    }

    #[test]
    fn test_wall_consumes_token() {
        let mut game = new_game();
        game.set_player_walls(Color::White, 1);
        game.execute_move(Move::wall(Color::White, 6, 4, Orientation::Horizontal))
            .unwrap();
        assert_eq!(game.walls_remaining(Color::White), 0);
        assert!(game.has_wall_segment(6, 4, Orientation::Horizontal));
        assert!(game.has_wall_segment(6, 5, Orientation::Horizontal));

        assert_eq!(
            game.execute_move(Move::wall(Color::White, 2, 2, Orientation::Vertical)),
            Err(EngineError::InvalidMove(InvalidMove::NoWallsRemaining {
                color: Color::White
            }))
        );
        assert!(
            game.legal_moves(Color::White).iter().all(Move::is_translation),
            "no wall moves without tokens"
        );
    }

    #[test]
    fn test_round_trip_restores_state() {
        let mut game = new_game();
        game.execute_move(step(Color::White, (0, 4), (1, 4))).unwrap();
        game.execute_move(Move::wall(Color::Black, 2, 3, Orientation::Vertical))
            .unwrap();

        for color in Color::ALL {
            for mv in game.legal_moves(color) {
                let before = game.clone();
                game.execute_move(mv).unwrap();
                game.undo_move(mv).unwrap();

                assert_eq!(game.position_hash(), before.position_hash(), "hash after {mv}");
                assert_eq!(game, before, "state after {mv}");
                assert_eq!(game.walls_remaining(color), before.walls_remaining(color));
                assert_eq!(game.history_len(), before.history_len());
            }
        }
    }

    #[test]
    fn test_incremental_hash_matches_recompute() {
        let mut game = new_game();
        let moves = [
            step(Color::White, (0, 4), (1, 4)),
            Move::wall(Color::Black, 1, 3, Orientation::Horizontal),
            step(Color::White, (1, 4), (1, 5)),
            step(Color::Black, (8, 4), (7, 4)),
        ];
        for mv in moves {
            game.execute_move(mv).unwrap();
            assert_eq!(game.position_hash(), game.recompute_hash(), "after {mv}");
        }
        while game.undo_last().unwrap().is_some() {
            assert_eq!(game.position_hash(), game.recompute_hash());
        }
        assert_eq!(game.position_hash(), new_game().position_hash());
    }

    #[test]
    fn test_hash_tracks_wall_counts() {
        let mut game = new_game();
        let plain = game.position_hash();
        game.set_player_walls(Color::White, 3);
        assert_ne!(game.position_hash(), plain, "token count changes the hash");
        assert_eq!(game.position_hash(), game.recompute_hash());
        game.set_player_walls(Color::White, 10);
        assert_eq!(game.position_hash(), plain);

        // Same walls on the board, different owners: different token splits
        let a = Move::wall(Color::White, 2, 2, Orientation::Vertical);
        let b = Move::wall(Color::Black, 5, 5, Orientation::Vertical);
        let mut split = new_game();
        split.execute_move(a).unwrap();
        split.execute_move(b).unwrap();
        let mut lopsided = new_game();
        lopsided
            .execute_move(Move::wall(Color::Black, 2, 2, Orientation::Vertical))
            .unwrap();
        lopsided.execute_move(b).unwrap();
        assert_eq!(split.board(), lopsided.board());
        assert_eq!(split.side_to_move(), lopsided.side_to_move());
        assert_ne!(split.position_hash(), lopsided.position_hash());
        assert_eq!(lopsided.position_hash(), lopsided.recompute_hash());
    }

    #[test]
    fn test_undo_requires_stack_order() {
        let mut game = new_game();
        let first = step(Color::White, (0, 4), (1, 4));
        let second = step(Color::Black, (8, 4), (7, 4));
        game.execute_move(first).unwrap();
        game.execute_move(second).unwrap();

        let snapshot = game.clone();
        assert!(matches!(
            game.undo_move(first),
            Err(EngineError::UndoMismatch { .. })
        ));
        assert_eq!(game, snapshot, "failed undo changes nothing");

        game.undo_move(second).unwrap();
        game.undo_move(first).unwrap();
        assert!(matches!(
            game.undo_move(first),
            Err(EngineError::UndoMismatch { expected: None, .. })
        ));
    }

    #[test]
    fn test_terminal_when_goal_reached() {
        let mut game = GameState::new(3).unwrap();
        game.execute_move(step(Color::White, (0, 1), (0, 0))).unwrap();
        game.execute_move(step(Color::Black, (2, 1), (1, 1))).unwrap();
        game.execute_move(step(Color::White, (0, 0), (1, 0))).unwrap();
        assert!(!game.is_terminal());
        game.execute_move(step(Color::Black, (1, 1), (0, 1))).unwrap();

        assert!(game.is_terminal());
        assert_eq!(game.winner(), Some(Color::Black));
        game.undo_last().unwrap();
        assert!(!game.is_terminal());
    }

    #[test]
    fn test_side_to_move_alternates_and_restores() {
        let mut game = new_game();
        let mv = step(Color::White, (0, 4), (1, 4));
        game.execute_move(mv).unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
        game.undo_move(mv).unwrap();
        assert_eq!(game.side_to_move(), Color::White);

        // Out-of-turn moves are allowed and still undo exactly
        let black = step(Color::Black, (8, 4), (8, 3));
        let before = game.position_hash();
        game.execute_move(black).unwrap();
        game.undo_move(black).unwrap();
        assert_eq!(game.position_hash(), before);
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn test_legal_walls_match_full_check() {
        let mut game = new_game();
        for (row, col) in [(4, 0), (4, 2), (4, 4)] {
            game.execute_move(Move::wall(Color::White, row, col, Orientation::Horizontal))
                .unwrap();
        }
        let fast: Vec<_> = game.legal_walls(Color::Black);
        let n = game.dimension();
        let mut slow = Vec::new();
        for row in 0..n - 1 {
            for col in 0..n - 1 {
                for orientation in Orientation::ALL {
                    let wall = Wall::new(row, col, orientation);
                    if game.validate_wall(Color::Black, wall, None).is_ok() {
                        slow.push(Move::wall(Color::Black, row, col, orientation));
                    }
                }
            }
        }
        assert_eq!(fast, slow, "shortest-path shortcut must be exact");
        // 128 anchors on an empty 9x9, minus 6 overlapping and 3 crossing
        assert_eq!(fast.len(), 119);
    }

    #[test]
    fn test_undo_wall_count_overflow_is_invariant() {
        let mut game = new_game();
        let wall = Move::wall(Color::White, 2, 2, Orientation::Vertical);
        game.execute_move(wall).unwrap();
        game.set_player_walls(Color::White, u8::MAX);

        let snapshot = game.clone();
        let err = game.undo_move(wall).unwrap_err();
        assert!(err.is_invariant_violation(), "got {err:?}");
        assert_eq!(game, snapshot, "failed undo changes nothing");
        assert!(game.has_wall_segment(2, 2, Orientation::Vertical));
    }

    #[test]
    fn test_reset_changes_dimension() {
        let mut game = GameState::with_walls(9, 6).unwrap();
        game.execute_move(step(Color::White, (0, 4), (1, 4))).unwrap();
        game.reset(5).unwrap();

        assert_eq!(game.dimension(), 5);
        assert_eq!(game.coordinates(Color::White), (0, 2));
        assert_eq!(game.walls_remaining(Color::Black), 6);
        assert_eq!(game.history_len(), 0);

        assert!(game.reset(4).is_err());
        assert_eq!(game.dimension(), 5, "failed reset keeps the old game");
    }
}
