//! Alpha-beta search with negamax
//!
//! Depth-first and recursive. Recursion depth is bounded by the iteration's
//! depth, which never exceeds `MAX_DEPTH`, so the call stack stays shallow.
//!
//! Every `make_move` is paired with its `unmake_move` before the child's
//! result is inspected, so the state is restored even when the child was
//! interrupted by the deadline or failed.

use super::make_unmake::{make_move, unmake_move};
use super::ordering::order_moves;
use super::{Deadline, SearchStats};
use crate::constants::{AB_INF, WIN_THRESHOLD};
use crate::error::EngineError;
use crate::game::GameState;
use crate::moves::Move;
use crate::tt::{Bound, TranspositionTable, TtEntry};
use crate::types::{Color, Score};
use tracing::error;

/// Why a search unwound before finishing
#[derive(Debug)]
pub(crate) enum Interrupt {
    /// Deadline passed; the partial result is discarded
    Timeout,
    /// Engine bug; must reach the caller
    Fatal(EngineError),
}

impl From<EngineError> for Interrupt {
    fn from(err: EngineError) -> Self {
        Interrupt::Fatal(err)
    }
}

pub(crate) type SearchResult<T> = Result<T, Interrupt>;

/// Everything one decision's tree walk borrows
pub(crate) struct SearchContext<'a> {
    pub game: &'a mut GameState,
    pub table: &'a mut TranspositionTable,
    pub stats: &'a mut SearchStats,
    pub deadline: Deadline,
}

/// Store a score in the table relative to this node instead of the root
///
/// Win scores shrink by one per ply (`WIN_SCORE - ply`), so the same position
/// found at different plies must be normalised before caching.
#[inline]
fn to_table(score: Score, ply: u8) -> Score {
    if score >= WIN_THRESHOLD {
        score + Score::from(ply)
    } else if score <= -WIN_THRESHOLD {
        score - Score::from(ply)
    } else {
        score
    }
}

#[inline]
fn from_table(score: Score, ply: u8) -> Score {
    if score >= WIN_THRESHOLD {
        score - Score::from(ply)
    } else if score <= -WIN_THRESHOLD {
        score + Score::from(ply)
    } else {
        score
    }
}

/// Static score at a leaf, with proven results pulled towards the root
///
/// The conversion is the same one that reads a node-relative score back out
/// of the table: a win found `ply` moves down is worth `WIN_SCORE - ply`.
fn leaf_score(game: &GameState, color: Color, ply: u8) -> Score {
    from_table(game.evaluate(color), ply)
}

/// Negamax alpha-beta from `color`'s point of view
pub(crate) fn negamax(
    ctx: &mut SearchContext<'_>,
    depth: u8,
    ply: u8,
    mut alpha: Score,
    beta: Score,
    color: Color,
) -> SearchResult<Score> {
    ctx.stats.nodes += 1;
    if ctx.deadline.expired() {
        return Err(Interrupt::Timeout);
    }

    let key = ctx.game.position_hash();

    if depth == 0 || ctx.game.is_terminal() {
        let score = leaf_score(ctx.game, color, ply);
        ctx.table.add(key, TtEntry::leaf(key, to_table(score, ply)));
        return Ok(score);
    }

    // Transposition table probe
    let mut table_move = None;
    if let Some(entry) = ctx.table.get(key) {
        table_move = entry.best_move;
        if entry.depth >= depth {
            let score = from_table(entry.score, ply);
            let usable = match entry.bound {
                Bound::Exact => true,
                Bound::Lower => score >= beta,
                Bound::Upper => score <= alpha,
            };
            if usable {
                ctx.stats.tt_hits += 1;
                return Ok(score);
            }
        }
    }

    let mut moves = ctx.game.legal_moves(color);
    if moves.is_empty() {
        // Boxed in with no walls left; no move to make, score as it stands
        let score = leaf_score(ctx.game, color, ply);
        ctx.table.add(key, TtEntry::leaf(key, to_table(score, ply)));
        return Ok(score);
    }
    order_moves(ctx.game, color, &mut moves, table_move);

    let original_alpha = alpha;
    let mut best_score = -AB_INF;
    let mut best_move = None;

    for mv in moves {
        make_move(ctx.game, mv)?;
        let child = negamax(ctx, depth - 1, ply + 1, -beta, -alpha, color.opponent());
        unmake_move(ctx.game, mv)?;
        let score = -child?;

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            ctx.stats.cutoffs += 1;
            break;
        }
    }

    let bound = if best_score <= original_alpha {
        Bound::Upper
    } else if best_score >= beta {
        Bound::Lower
    } else {
        Bound::Exact
    };
    ctx.table.add(
        key,
        TtEntry {
            key,
            depth,
            bound,
            score: to_table(best_score, ply),
            best_move,
        },
    );

    Ok(best_score)
}

/// Full-window search of the root moves in the given order
///
/// Returns the best move and its score. Ties keep the earlier move, so the
/// previous iteration's choice wins ties when it is ordered first. The root
/// is not cached: the caller may search for a side other than the one the
/// position hash says is to move.
pub(crate) fn search_root(
    ctx: &mut SearchContext<'_>,
    depth: u8,
    color: Color,
    moves: &[Move],
) -> SearchResult<(Move, Score)> {
    let Some(&first) = moves.first() else {
        let err = EngineError::invariant(format!("no legal moves for {color} at the root"));
        error!(error = %err, "search root is empty");
        return Err(Interrupt::Fatal(err));
    };

    ctx.stats.nodes += 1;
    if ctx.deadline.expired() {
        return Err(Interrupt::Timeout);
    }

    let mut alpha = -AB_INF;
    let mut best = (first, -AB_INF);

    for &mv in moves {
        make_move(ctx.game, mv)?;
        let child = negamax(
            ctx,
            depth.saturating_sub(1),
            1,
            -AB_INF,
            -alpha,
            color.opponent(),
        );
        unmake_move(ctx.game, mv)?;
        let score = -child?;

        if score > best.1 {
            best = (mv, score);
        }
        alpha = alpha.max(score);
    }

    Ok(best)
}
