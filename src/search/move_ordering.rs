//! MVV-LVA move ordering.
//!
//! Captures score `10 * victim - attacker`; quiet moves score 0. Ordering only
//! changes how early alpha-beta can cut, never the value search returns.

use std::cmp::Reverse;

use crate::game_state::chess_types::*;

#[inline]
pub fn mvv_lva_score(position: &Position, mv: &ChessMove) -> i32 {
    match (position.piece_at(mv.to), position.piece_at(mv.from)) {
        (Some(victim), Some(attacker)) => 10 * victim.kind.value() - attacker.kind.value(),
        _ => 0,
    }
}

/// Assign each move its MVV-LVA score and sort highest first. The sort is
/// stable, so equal scores keep generation order.
pub fn order_moves(position: &Position, moves: &mut [ChessMove]) {
    for mv in moves.iter_mut() {
        mv.score = mvv_lva_score(position, mv);
    }
    moves.sort_by_key(|mv| Reverse(mv.score));
}
