use crate::game_state::chess_types::*;

/// Pushes onto empty squares (double push from the starting rank when both
/// squares are empty) and diagonal captures of enemy pieces. No en passant
/// and no promotion: a pawn on the last rank simply has no forward moves.
pub fn generate_pawn_moves(
    position: &Position,
    from: Square,
    color: Color,
    out: &mut Vec<Square>,
) {
    let forward = color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if position.is_empty(one_step) {
            out.push(one_step);

            if from.row() == color.pawn_rank() {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if position.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };
        if matches!(position.piece_at(to), Some(target) if target.color != color) {
            out.push(to);
        }
    }
}
