//! Fixed-depth minimax with alpha-beta pruning.
//!
//! White maximizes and Black minimizes a White-positive score. The search
//! mutates the shared `GameState` in place; every trial move is made through
//! `TrialMove`, so the state is byte-identical before and after any call here,
//! including when a branch is cut.

use log::{debug, trace};

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::{all_legal_moves, is_in_check};
use crate::search::board_scoring::BoardScorer;
use crate::search::move_ordering::order_moves;

/// Magnitude of a checkmate score before the remaining-depth bias.
pub const MATE_SCORE: i32 = 9_999_999;

/// Window bound wider than any reachable score.
pub const INFINITY: i32 = 99_999_999;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Depth handed to `search` after each root move.
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 4 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    /// `None` when the side to move has no legal move (checkmate or stalemate).
    pub best_move: Option<ChessMove>,
    pub best_score: i32,
    pub stats: SearchStats,
}

#[inline]
fn side_for(maximizing: bool) -> Color {
    if maximizing {
        Color::White
    } else {
        Color::Black
    }
}

/// Score of a position with no legal moves for the side to move.
///
/// Mates found with more depth left (sooner) score further from zero.
fn terminal_score(game_state: &GameState, maximizing: bool, depth: u8) -> i32 {
    if !is_in_check(game_state, side_for(maximizing)) {
        return 0;
    }
    let depth = i32::from(depth);
    if maximizing {
        -MATE_SCORE - depth
    } else {
        MATE_SCORE + depth
    }
}

/// Minimax value of `game_state` with White to move when `maximizing`.
pub fn search<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    depth: u8,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    let mut moves = all_legal_moves(game_state, side_for(maximizing));
    if moves.is_empty() {
        return terminal_score(game_state, maximizing, depth);
    }

    if depth == 0 {
        return scorer.score(&game_state.position);
    }

    order_moves(&game_state.position, &mut moves);

    if maximizing {
        let mut best = -INFINITY;
        for mv in moves {
            let score = {
                let mut trial = TrialMove::new(game_state, mv);
                search(&mut trial, scorer, depth - 1, false, alpha, beta, stats)
            };
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    } else {
        let mut best = INFINITY;
        for mv in moves {
            let score = {
                let mut trial = TrialMove::new(game_state, mv);
                search(&mut trial, scorer, depth - 1, true, alpha, beta, stats)
            };
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}

/// Pick a move for the side to move.
///
/// Each root move is made and the reply tree searched to `config.depth` with a
/// full window. Black keeps the lowest score and White the highest; the first
/// move reaching the best score wins ties.
pub fn best_move<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let side = game_state.side_to_move;
    let root_maximizing = side == Color::White;
    let mut stats = SearchStats::default();

    let mut moves = all_legal_moves(game_state, side);
    order_moves(&game_state.position, &mut moves);

    let mut best_move = None;
    let mut best_score = if root_maximizing { -INFINITY } else { INFINITY };

    for mv in moves {
        let score = {
            let mut trial = TrialMove::new(game_state, mv);
            search(
                &mut trial,
                scorer,
                config.depth,
                !root_maximizing,
                -INFINITY,
                INFINITY,
                &mut stats,
            )
        };
        trace!("root {mv} scored {score}");

        let improves = if root_maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(mv);
        }
    }

    match best_move {
        Some(mv) => debug!(
            "{side} best {mv} score {best_score} depth {} nodes {} cutoffs {}",
            config.depth, stats.nodes, stats.cutoffs
        ),
        None => debug!("{side} has no legal move"),
    }

    SearchResult {
        best_move,
        best_score,
        stats,
    }
}
