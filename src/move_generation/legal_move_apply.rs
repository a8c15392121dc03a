use log::info;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::game_state::game_status::{game_status, GameStatus};
use crate::move_generation::legal_move_generator::legal_moves;

/// Make `mv` in place and return what is needed to take it back.
///
/// Performs the castle rook relocation when a king moves two columns, marks
/// castling flags for kings and rooks leaving their original squares, and
/// hands the turn to the other side. The move is not validated beyond the
/// origin holding a piece; an empty origin leaves the state untouched and
/// returns `None`.
pub fn make_move(game_state: &mut GameState, mv: ChessMove) -> Option<UndoState> {
    let prev_castling_rights = game_state.castling_rights;
    let prev_side_to_move = game_state.side_to_move;

    let position = &mut game_state.position;
    let moved_piece = position.take_piece(mv.from)?;
    let captured_piece = position.take_piece(mv.to);
    position.set_piece(mv.to, Some(moved_piece));

    let rook_relocation = castle_rook_relocation(moved_piece, mv);
    if let Some((rook_from, rook_to)) = rook_relocation {
        let rook = position.take_piece(rook_from);
        position.set_piece(rook_to, rook);
    }

    game_state
        .castling_rights
        .record_departure(moved_piece, mv.from);
    game_state.side_to_move = prev_side_to_move.opposite();

    Some(UndoState {
        mv,
        moved_piece,
        captured_piece,
        rook_relocation,
        prev_castling_rights,
        prev_side_to_move,
    })
}

/// Exact inverse of `make_move`.
pub fn unmake_move(game_state: &mut GameState, undo: &UndoState) {
    let position = &mut game_state.position;
    if let Some((rook_from, rook_to)) = undo.rook_relocation {
        let rook = position.take_piece(rook_to);
        position.set_piece(rook_from, rook);
    }
    position.set_piece(undo.mv.from, Some(undo.moved_piece));
    position.set_piece(undo.mv.to, undo.captured_piece);

    game_state.castling_rights = undo.prev_castling_rights;
    game_state.side_to_move = undo.prev_side_to_move;
}

/// Driver-facing move application: validates `mv` against the legal moves of
/// the side to move, then makes it. On error the state is untouched.
pub fn apply_move(game_state: &mut GameState, mv: ChessMove) -> ChessResult<()> {
    if matches!(
        game_status(game_state),
        GameStatus::Checkmate { .. } | GameStatus::Stalemate
    ) {
        return Err(ChessError::GameOver);
    }

    let piece = game_state
        .position
        .piece_at(mv.from)
        .ok_or(ChessError::EmptySquare(mv.from))?;
    if piece.color != game_state.side_to_move {
        return Err(ChessError::WrongSide(mv.from));
    }
    if !legal_moves(game_state, mv.from).contains(&mv.to) {
        return Err(ChessError::IllegalMove(mv));
    }

    let undo = make_move(game_state, mv).ok_or(ChessError::EmptySquare(mv.from))?;
    info!(
        "{} played {}{}",
        piece.color,
        mv,
        if undo.rook_relocation.is_some() { " (castle)" } else { "" }
    );
    Ok(())
}

fn castle_rook_relocation(moved_piece: Piece, mv: ChessMove) -> Option<(Square, Square)> {
    if moved_piece.kind != PieceKind::King || (mv.to.col() - mv.from.col()).abs() != 2 {
        return None;
    }
    let rank = mv.from.row();
    if mv.to.col() == KINGSIDE_KING_TARGET_COL {
        Some((
            Square::at(rank, KINGSIDE_ROOK_COL),
            Square::at(rank, KINGSIDE_ROOK_TARGET_COL),
        ))
    } else {
        Some((
            Square::at(rank, QUEENSIDE_ROOK_COL),
            Square::at(rank, QUEENSIDE_ROOK_TARGET_COL),
        ))
    }
}
