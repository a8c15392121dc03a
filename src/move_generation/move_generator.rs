//! Pseudo-legal move dispatch.
//!
//! Routes a square to the generator for the piece standing on it. The result
//! ignores whether the mover's own king is left attacked; that is the job of
//! `legal_move_generator`.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Pseudo-legal destinations for the piece on `from`; empty for an empty square.
pub fn generate_moves(game_state: &GameState, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    generate_moves_into(game_state, from, &mut out);
    out
}

pub fn generate_moves_into(game_state: &GameState, from: Square, out: &mut Vec<Square>) {
    let Some(piece) = game_state.position.piece_at(from) else {
        return;
    };
    let position = &game_state.position;
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(position, from, piece.color, out),
        PieceKind::Knight => generate_knight_moves(position, from, piece.color, out),
        PieceKind::Bishop => generate_bishop_moves(position, from, piece.color, out),
        PieceKind::Rook => generate_rook_moves(position, from, piece.color, out),
        PieceKind::Queen => generate_queen_moves(position, from, piece.color, out),
        PieceKind::King => generate_king_moves(game_state, from, piece.color, out),
    }
}
