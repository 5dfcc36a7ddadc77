//! Self-Play Integration Tests
//!
//! Tests for full engine-vs-engine games:
//! - Records replay legally from the start position
//! - Ply limit ends the game
//! - A boxed-in pawn ends the game undecided
//! - Invalid settings are refused

use quoridor::{play, play_from, Settings};
use quoridor_engine::{Color, GameState, Move, Orientation, SearchLimits, Square};

fn fast_settings(dimension: u8, max_plies: u32) -> Settings {
    Settings {
        dimension,
        walls_per_player: 2,
        search: SearchLimits {
            think_time_ms: 100,
            max_depth: 2,
            table_capacity: 1 << 12,
        },
        max_plies,
    }
}

#[test]
fn test_record_replays_legally() {
    let settings = fast_settings(5, 40);
    let record = play(&settings).unwrap();

    assert_eq!(record.plies as usize, record.moves.len());
    assert!(record.plies <= 40);

    let mut game = GameState::with_walls(5, 2).unwrap();
    for mv in &record.moves {
        game.execute_move(*mv)
            .unwrap_or_else(|e| panic!("{mv} does not replay: {e}"));
    }
    assert_eq!(game.winner(), record.winner);
    match (record.winner, record.blocked) {
        (Some(_), blocked) => assert_eq!(blocked, None),
        (None, Some(color)) => assert!(game.legal_moves(color).is_empty()),
        (None, None) => assert_eq!(record.plies, 40, "without a winner the ply limit was hit"),
    }
}

#[test]
fn test_boxed_in_pawn_ends_game_undecided() {
    // 5x5: white walks into the corner and walls itself off on the right,
    // black then steps up the left edge to (1, 0), directly below white.
    let mut game = GameState::with_walls(5, 1).unwrap();
    let step = |color, from: (u8, u8), to: (u8, u8)| {
        Move::translation(color, Square::from(from), Square::from(to))
    };
    let setup = [
        step(Color::White, (0, 2), (0, 1)),
        step(Color::White, (0, 1), (0, 0)),
        Move::wall(Color::White, 0, 0, Orientation::Vertical),
        step(Color::Black, (4, 2), (4, 1)),
        step(Color::Black, (4, 1), (4, 0)),
        step(Color::Black, (4, 0), (3, 0)),
        step(Color::Black, (3, 0), (2, 0)),
        step(Color::Black, (2, 0), (1, 0)),
    ];
    for mv in setup {
        game.execute_move(mv).unwrap();
    }
    assert_eq!(game.side_to_move(), Color::White);
    assert!(game.legal_moves(Color::White).is_empty());
    assert!(!game.is_terminal());

    let record = play_from(&fast_settings(5, 40), game).unwrap();
    assert_eq!(record.plies, 0);
    assert!(record.moves.is_empty());
    assert_eq!(record.winner, None);
    assert_eq!(record.blocked, Some(Color::White));
}

#[test]
fn test_ply_limit_stops_game() {
    let record = play(&fast_settings(9, 3)).unwrap();
    assert_eq!(record.plies, 3);
    assert_eq!(record.winner, None, "nobody can cross a 9x9 board in 3 plies");
    assert_eq!(record.blocked, None);
}

#[test]
fn test_invalid_dimension_refused() {
    assert!(play(&fast_settings(4, 10)).is_err());
}
