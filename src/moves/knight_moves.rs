use crate::game_state::chess_types::*;
use crate::moves::move_directions::KNIGHT_STEPS;
use crate::moves::slider_moves::generate_step_moves;

pub fn generate_knight_moves(
    position: &Position,
    from: Square,
    color: Color,
    out: &mut Vec<Square>,
) {
    generate_step_moves(position, from, color, &KNIGHT_STEPS, out);
}
