//! Engine-vs-engine games
//!
//! Both sides are played by their own [`SearchEngine`] with the same limits.
//! The driver only chooses and applies moves; rendering and move notation
//! input are left to front ends.
//!
//! Without jump moves a pawn can be boxed in by a wall and the adjacent
//! opponent. When the side to move has no legal move at all the game ends
//! with no winner and the boxed side recorded in [`GameRecord::blocked`].

use crate::settings::Settings;
use anyhow::{Context, Result};
use quoridor_engine::{Color, GameState, Move, SearchEngine};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Outcome of one self-play game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub dimension: u8,
    /// Moves in the order they were played, white first
    pub moves: Vec<Move>,
    /// `None` when the ply limit or a boxed-in pawn ended the game
    pub winner: Option<Color>,
    /// Side left without a legal move, if that ended the game
    pub blocked: Option<Color>,
    pub plies: u32,
}

/// Play one game from the starting position
pub fn play(settings: &Settings) -> Result<GameRecord> {
    settings.validate()?;
    let game = GameState::with_walls(settings.dimension, settings.walls_per_player)
        .context("failed to set up the board")?;
    play_from(settings, game)
}

/// Play on from an arbitrary position until it ends or the ply limit is hit
///
/// `settings.dimension` and `settings.walls_per_player` are ignored; the
/// board and wall counts come from `game`. Recorded moves start at `game`.
pub fn play_from(settings: &Settings, mut game: GameState) -> Result<GameRecord> {
    let mut engines = [
        SearchEngine::new(settings.search),
        SearchEngine::new(settings.search),
    ];

    info!(
        dimension = game.dimension(),
        white_walls = game.walls_remaining(Color::White),
        black_walls = game.walls_remaining(Color::Black),
        think_ms = settings.search.think_time_ms,
        "self-play started"
    );

    let mut moves = Vec::new();
    let mut blocked = None;
    while !game.is_terminal() && (moves.len() as u32) < settings.max_plies {
        let color = game.side_to_move();
        if game.legal_moves(color).is_empty() {
            warn!(color = %color, ply = moves.len() + 1, "no legal move, game ends undecided");
            blocked = Some(color);
            break;
        }
        let report = engines[color.index()]
            .find_best_move(&mut game, color)
            .with_context(|| format!("search failed for {color} at ply {}", moves.len() + 1))?;
        game.execute_move(report.best_move)
            .with_context(|| format!("engine chose an illegal move {}", report.best_move))?;

        debug!(
            ply = moves.len() + 1,
            mv = %report.best_move,
            score = report.score,
            depth = report.depth,
            "ply played"
        );
        moves.push(report.best_move);
    }

    let record = GameRecord {
        dimension: game.dimension(),
        plies: moves.len() as u32,
        winner: game.winner(),
        blocked,
        moves,
    };
    match (record.winner, record.blocked) {
        (Some(winner), _) => info!(winner = %winner, plies = record.plies, "self-play finished"),
        (None, Some(color)) => info!(blocked = %color, plies = record.plies, "self-play stalled"),
        (None, None) => info!(plies = record.plies, "self-play stopped at the ply limit"),
    }
    Ok(record)
}
