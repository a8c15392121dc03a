//! Full legal move generation pipeline.
//!
//! Takes the pseudo-legal destinations from the per-piece generators, tries
//! each one on the shared board, and keeps only those that leave the mover's
//! own king unattacked. The trial is always taken back before the next one.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::generate_moves_into;

/// Legal destinations for the piece on `from`; empty for an empty square.
///
/// The piece need not belong to the side to move, which lets a UI hint moves
/// for either side. The state is identical before and after the call.
pub fn legal_moves(game_state: &mut GameState, from: Square) -> Vec<Square> {
    let mut out = Vec::new();
    let mut pseudo = Vec::with_capacity(28);
    legal_moves_into(game_state, from, &mut pseudo, &mut out);
    out
}

fn legal_moves_into(
    game_state: &mut GameState,
    from: Square,
    pseudo: &mut Vec<Square>,
    out: &mut Vec<Square>,
) {
    let Some(piece) = game_state.position.piece_at(from) else {
        return;
    };

    pseudo.clear();
    generate_moves_into(game_state, from, pseudo);

    for &to in pseudo.iter() {
        let trial = TrialMove::new(game_state, ChessMove::new(from, to));
        if !is_king_in_check(&trial.position, piece.color) {
            out.push(to);
        }
    }
}

/// Every legal move for `color`, in row-major order of the origin square.
pub fn all_legal_moves(game_state: &mut GameState, color: Color) -> Vec<ChessMove> {
    let origins: Vec<Square> = game_state
        .position
        .pieces_of(color)
        .map(|(square, _)| square)
        .collect();

    let mut moves = Vec::with_capacity(48);
    let mut pseudo = Vec::with_capacity(28);
    let mut destinations = Vec::with_capacity(28);
    for from in origins {
        destinations.clear();
        legal_moves_into(game_state, from, &mut pseudo, &mut destinations);
        moves.extend(destinations.iter().map(|to| ChessMove::new(from, *to)));
    }
    moves
}

/// Whether `color` has at least one legal move. Stops at the first one found.
pub fn has_legal_move(game_state: &mut GameState, color: Color) -> bool {
    let origins: Vec<Square> = game_state
        .position
        .pieces_of(color)
        .map(|(square, _)| square)
        .collect();

    let mut pseudo = Vec::with_capacity(28);
    let mut destinations = Vec::with_capacity(28);
    origins.into_iter().any(|from| {
        destinations.clear();
        legal_moves_into(game_state, from, &mut pseudo, &mut destinations);
        !destinations.is_empty()
    })
}

#[inline]
pub fn is_in_check(game_state: &GameState, color: Color) -> bool {
    is_king_in_check(&game_state.position, color)
}
