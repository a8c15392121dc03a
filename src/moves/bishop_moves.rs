use crate::game_state::chess_types::*;
use crate::moves::move_directions::DIAGONAL_DIRECTIONS;
use crate::moves::slider_moves::generate_slider_moves;

pub fn generate_bishop_moves(
    position: &Position,
    from: Square,
    color: Color,
    out: &mut Vec<Square>,
) {
    generate_slider_moves(position, from, color, &DIAGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::chess_types::*;

    #[test]
    fn bishop_ray_stops_on_capture_and_before_friend() {
        let mut position = Position::empty();
        let c1 = Square::at(7, 2);
        position.set_piece(c1, Some(Piece::new(Color::White, PieceKind::Bishop)));
        // Friendly pawn on b2 blocks the a3 diagonal entirely.
        position.set_piece(Square::at(6, 1), Some(Piece::new(Color::White, PieceKind::Pawn)));
        // Enemy knight on f4 is capturable; g5/h6 beyond it are not reachable.
        position.set_piece(Square::at(4, 5), Some(Piece::new(Color::Black, PieceKind::Knight)));

        let mut out = Vec::new();
        generate_bishop_moves(&position, c1, Color::White, &mut out);
        out.sort();

        let mut expected = vec![Square::at(6, 3), Square::at(5, 4), Square::at(4, 5)];
        expected.sort();
        assert_eq!(out, expected);
    }
}
