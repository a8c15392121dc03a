use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::move_directions::KING_STEPS;
use crate::moves::slider_moves::generate_step_moves;

pub fn generate_king_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<Square>,
) {
    generate_step_moves(&game_state.position, from, color, &KING_STEPS, out);
    generate_castling_moves(game_state, from, color, out);
}

/// Castling destinations (the king's landing square) for a king on its home square.
///
/// Requires: king and the relevant rook unmoved, the rook still standing on
/// its corner, every square between them empty, and the king's start,
/// passing and landing squares not attacked.
fn generate_castling_moves(
    game_state: &GameState,
    king_from: Square,
    color: Color,
    out: &mut Vec<Square>,
) {
    let rank = color.back_rank();
    if king_from != Square::at(rank, KING_HOME_COL) {
        return;
    }
    let rights = &game_state.castling_rights;
    if !rights.may_castle_kingside(color) && !rights.may_castle_queenside(color) {
        return;
    }

    let enemy = color.opposite();
    let position = &game_state.position;

    // Cannot castle out of check.
    if is_square_attacked(position, king_from, enemy) {
        return;
    }

    let own_rook = Some(Piece::new(color, PieceKind::Rook));

    if rights.may_castle_kingside(color)
        && position.piece_at(Square::at(rank, KINGSIDE_ROOK_COL)) == own_rook
        && KINGSIDE_GAP_COLS
            .iter()
            .all(|col| position.is_empty(Square::at(rank, *col)))
        && !is_square_attacked(position, Square::at(rank, KINGSIDE_ROOK_TARGET_COL), enemy)
        && !is_square_attacked(position, Square::at(rank, KINGSIDE_KING_TARGET_COL), enemy)
    {
        out.push(Square::at(rank, KINGSIDE_KING_TARGET_COL));
    }

    if rights.may_castle_queenside(color)
        && position.piece_at(Square::at(rank, QUEENSIDE_ROOK_COL)) == own_rook
        && QUEENSIDE_GAP_COLS
            .iter()
            .all(|col| position.is_empty(Square::at(rank, *col)))
        && !is_square_attacked(position, Square::at(rank, QUEENSIDE_ROOK_TARGET_COL), enemy)
        && !is_square_attacked(position, Square::at(rank, QUEENSIDE_KING_TARGET_COL), enemy)
    {
        out.push(Square::at(rank, QUEENSIDE_KING_TARGET_COL));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::chess_types::*;

    fn castling_ready(side_to_move: Color) -> GameState {
        GameState::from_fen(&format!(
            "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R {} KQkq - 0 1",
            if side_to_move == Color::White { "w" } else { "b" }
        ))
        .expect("FEN should parse")
    }

    #[test]
    fn king_boxed_in_at_start_has_no_moves() {
        let game = GameState::new_game();
        let mut out = Vec::new();
        generate_king_moves(&game, Square::at(7, 4), Color::White, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn both_castles_offered_when_path_is_clear() {
        let game = castling_ready(Color::White);
        let mut out = Vec::new();
        generate_king_moves(&game, Square::at(7, 4), Color::White, &mut out);
        assert!(out.contains(&Square::at(7, 6)));
        assert!(out.contains(&Square::at(7, 2)));

        out.clear();
        generate_king_moves(&game, Square::at(0, 4), Color::Black, &mut out);
        assert!(out.contains(&Square::at(0, 6)));
        assert!(out.contains(&Square::at(0, 2)));
    }

    #[test]
    fn moved_rook_removes_only_its_side() {
        let mut game = castling_ready(Color::White);
        game.castling_rights.kingside_rook_moved[Color::White.index()] = true;
        let mut out = Vec::new();
        generate_king_moves(&game, Square::at(7, 4), Color::White, &mut out);
        assert!(!out.contains(&Square::at(7, 6)));
        assert!(out.contains(&Square::at(7, 2)));
    }

    #[test]
    fn missing_rook_blocks_castling_even_with_flags_intact() {
        let mut game = castling_ready(Color::White);
        game.position.set_piece(Square::at(7, 7), None);
        let mut out = Vec::new();
        generate_king_moves(&game, Square::at(7, 4), Color::White, &mut out);
        assert!(!out.contains(&Square::at(7, 6)));
    }

    #[test]
    fn no_castling_through_attacked_square() {
        // Black rook on f3 covers f1 after the f2 pawn is gone.
        let game = GameState::from_fen("4k3/8/8/8/8/5r2/PPPPP1PP/R3K2R w KQ - 0 1")
            .expect("FEN should parse");
        let mut out = Vec::new();
        generate_king_moves(&game, Square::at(7, 4), Color::White, &mut out);
        assert!(!out.contains(&Square::at(7, 6)));
        assert!(out.contains(&Square::at(7, 2)));
    }

    #[test]
    fn no_castling_out_of_check() {
        let game = GameState::from_fen("4k3/8/8/8/8/4r3/PPPP1PPP/R3K2R w KQ - 0 1")
            .expect("FEN should parse");
        let mut out = Vec::new();
        generate_king_moves(&game, Square::at(7, 4), Color::White, &mut out);
        assert!(!out.contains(&Square::at(7, 6)));
        assert!(!out.contains(&Square::at(7, 2)));
    }
}
