//! Perft node counting over the legality filter.
//!
//! Counts leaf nodes of the legal move tree to a fixed depth. Used as a
//! correctness check of move generation and as a benchmark workload.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::all_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub castles: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.castles += rhs.castles;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Perft from the side to move. The state is restored before returning.
pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let side = game_state.side_to_move;
    let mut total = PerftCounts::default();
    for mv in all_legal_moves(game_state, side) {
        let mut trial = TrialMove::new(game_state, mv);
        if depth == 1 {
            total.merge(leaf_counts(&mut trial));
        } else {
            total.merge(perft(&mut trial, depth - 1));
        }
    }
    total
}

/// Counts for the move just made, read off the undo record and the new position.
fn leaf_counts(trial: &mut TrialMove<'_>) -> PerftCounts {
    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };
    if let Some(undo) = trial.undo_state() {
        counts.captures = u64::from(undo.captured_piece.is_some());
        counts.castles = u64::from(undo.rook_relocation.is_some());
    }

    let defender = trial.side_to_move;
    if is_king_in_check(&trial.position, defender) {
        counts.checks = 1;
        if all_legal_moves(trial, defender).is_empty() {
            counts.checkmates = 1;
        }
    }
    counts
}

/// Node count per root move, sorted by move text.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(ChessMove, u64)> {
    let mut out = Vec::new();
    if depth == 0 {
        return out;
    }
    let side = game_state.side_to_move;
    for mv in all_legal_moves(game_state, side) {
        let mut trial = TrialMove::new(game_state, mv);
        out.push((mv, perft(&mut trial, depth - 1).nodes));
    }
    out.sort_by_key(|(mv, _)| mv.to_string());
    out
}
