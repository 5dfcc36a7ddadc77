//! Iterative deepening search
//!
//! Runs full searches at depth 1, 2, 3 … until the deadline, the depth cap or
//! a proven result. Only completed iterations count: an iteration cut short
//! by the deadline is thrown away and the previous one's move is returned.

use super::alphabeta::{search_root, Interrupt, SearchContext};
use super::ordering::order_moves;
use super::{Deadline, SearchEngine, SearchReport, SearchStats};
use crate::constants::WIN_THRESHOLD;
use crate::error::{EngineError, EngineResult};
use crate::game::GameState;
use crate::moves::Move;
use crate::types::{Color, Score};
use tracing::{debug, error, info, warn};

/// Best result of the deepest completed iteration
#[derive(Debug, Clone, Copy)]
struct Completed {
    best_move: Move,
    score: Score,
    depth: u8,
}

/// Move `mv` to the front, keeping the relative order of the rest
fn promote(moves: &mut [Move], mv: Move) {
    if let Some(pos) = moves.iter().position(|m| *m == mv) {
        moves[..=pos].rotate_right(1);
    }
}

/// Iterative deepening search
pub(crate) fn iterative_deepening(
    engine: &mut SearchEngine,
    game: &mut GameState,
    color: Color,
) -> EngineResult<SearchReport> {
    let deadline = Deadline::new(engine.limits.think_time());
    let depth_cap = engine.limits.depth_cap();

    // Reset per-decision state
    engine.table.clear();
    engine.stats = SearchStats::default();

    if game.is_terminal() {
        return Err(EngineError::GameOver);
    }

    let before = game.clone();
    let mut root_moves = game.legal_moves(color);
    if root_moves.is_empty() {
        let err = EngineError::invariant(format!(
            "{color} has no legal move in a non-terminal position"
        ));
        error!(error = %err, "cannot search");
        return Err(err);
    }
    order_moves(game, color, &mut root_moves, None);

    let mut completed: Option<Completed> = None;
    let mut fatal = None;
    {
        let mut ctx = SearchContext {
            game: &mut *game,
            table: &mut engine.table,
            stats: &mut engine.stats,
            deadline,
        };

        for depth in 1..=depth_cap {
            if let Some(previous) = completed {
                promote(&mut root_moves, previous.best_move);
            }

            match search_root(&mut ctx, depth, color, &root_moves) {
                Ok((best_move, score)) => {
                    debug!(
                        depth,
                        score,
                        best_move = %best_move,
                        nodes = ctx.stats.nodes,
                        cutoffs = ctx.stats.cutoffs,
                        tt_hits = ctx.stats.tt_hits,
                        "iteration complete"
                    );
                    completed = Some(Completed {
                        best_move,
                        score,
                        depth,
                    });
                    // Proven result, deeper search cannot change it
                    if score.abs() >= WIN_THRESHOLD {
                        break;
                    }
                }
                Err(Interrupt::Timeout) => {
                    debug!(depth, "deadline reached, iteration discarded");
                    break;
                }
                Err(Interrupt::Fatal(err)) => {
                    fatal = Some(err);
                    break;
                }
            }

            if ctx.deadline.expired() {
                break;
            }
        }
    }

    if let Some(err) = fatal {
        error!(error = %err, "search aborted");
        return Err(err);
    }
    if *game != before || game.position_hash() != before.position_hash() {
        let err = EngineError::invariant("search did not restore the game state");
        error!(error = %err, "state corrupted by search");
        return Err(err);
    }

    let result = match completed {
        Some(result) => result,
        None => {
            let fallback = root_moves[0];
            warn!(
                budget_ms = engine.limits.think_time_ms,
                fallback = %fallback,
                "no iteration completed, using first ordered move"
            );
            Completed {
                best_move: fallback,
                score: game.evaluate(color),
                depth: 0,
            }
        }
    };

    let stats = engine.stats;
    let report = SearchReport {
        best_move: result.best_move,
        score: result.score,
        depth: result.depth,
        nodes: stats.nodes,
        cutoffs: stats.cutoffs,
        tt_hits: stats.tt_hits,
        elapsed: deadline.elapsed(),
    };
    info!(
        color = %color,
        best_move = %report.best_move,
        score = report.score,
        depth = report.depth,
        nodes = report.nodes,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "move chosen"
    );
    Ok(report)
}
