use crate::game_state::chess_types::*;
use crate::moves::move_directions::ORTHOGONAL_DIRECTIONS;
use crate::moves::slider_moves::generate_slider_moves;

pub fn generate_rook_moves(
    position: &Position,
    from: Square,
    color: Color,
    out: &mut Vec<Square>,
) {
    generate_slider_moves(position, from, color, &ORTHOGONAL_DIRECTIONS, out);
}
