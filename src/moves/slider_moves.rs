use crate::game_state::chess_types::*;
use crate::moves::move_directions::Step;

/// Ray-walk from `from` along each direction: empty squares are destinations
/// and the walk continues, an enemy piece is a destination and ends the ray,
/// a friendly piece ends the ray without being added.
pub fn generate_slider_moves(
    position: &Position,
    from: Square,
    color: Color,
    directions: &[Step],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(d_row, d_col) {
            match position.piece_at(to) {
                None => out.push(to),
                Some(occupant) => {
                    if occupant.color != color {
                        out.push(to);
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
}

/// Single-step destinations that are empty or enemy-occupied.
pub fn generate_step_moves(
    position: &Position,
    from: Square,
    color: Color,
    steps: &[Step],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in steps {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match position.piece_at(to) {
            Some(occupant) if occupant.color == color => {}
            _ => out.push(to),
        }
    }
}
