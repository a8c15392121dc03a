use crate::game_state::chess_types::*;
use crate::moves::move_directions::{DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};
use crate::moves::slider_moves::generate_slider_moves;

pub fn generate_queen_moves(
    position: &Position,
    from: Square,
    color: Color,
    out: &mut Vec<Square>,
) {
    generate_slider_moves(position, from, color, &ORTHOGONAL_DIRECTIONS, out);
    generate_slider_moves(position, from, color, &DIAGONAL_DIRECTIONS, out);
}
