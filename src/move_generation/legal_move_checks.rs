use crate::game_state::chess_types::*;
use crate::moves::move_directions::{DIAGONAL_DIRECTIONS, KNIGHT_STEPS, ORTHOGONAL_DIRECTIONS};

#[inline]
pub fn king_square(position: &Position, color: Color) -> Option<Square> {
    position.find_king(color)
}

/// Whether `color`'s king is attacked. A side without a king is never in check.
#[inline]
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    let Some(king_sq) = king_square(position, color) else {
        return false;
    };
    is_square_attacked(position, king_sq, color.opposite())
}

/// Whether any piece of `attacker_color` could capture on `square`.
///
/// Square-level attack only: whose turn it is and pins are ignored.
pub fn is_square_attacked(position: &Position, square: Square, attacker_color: Color) -> bool {
    is_attacked_by_pawn(position, square, attacker_color)
        || is_attacked_by_knight(position, square, attacker_color)
        || is_attacked_along_rays(position, square, attacker_color)
}

fn is_attacked_by_pawn(position: &Position, square: Square, attacker_color: Color) -> bool {
    // An attacking pawn sits one row behind the target from its own point of view.
    let behind = -attacker_color.forward();
    let pawn = Some(Piece::new(attacker_color, PieceKind::Pawn));
    [-1i8, 1i8].iter().any(|d_col| {
        square
            .offset(behind, *d_col)
            .is_some_and(|from| position.piece_at(from) == pawn)
    })
}

fn is_attacked_by_knight(position: &Position, square: Square, attacker_color: Color) -> bool {
    let knight = Some(Piece::new(attacker_color, PieceKind::Knight));
    KNIGHT_STEPS.iter().any(|(d_row, d_col)| {
        square
            .offset(*d_row, *d_col)
            .is_some_and(|from| position.piece_at(from) == knight)
    })
}

/// Walk all eight rays; the first occupied square decides each ray.
fn is_attacked_along_rays(position: &Position, square: Square, attacker_color: Color) -> bool {
    let orthogonal = ORTHOGONAL_DIRECTIONS.iter().map(|d| (*d, PieceKind::Rook));
    let diagonal = DIAGONAL_DIRECTIONS.iter().map(|d| (*d, PieceKind::Bishop));

    for ((d_row, d_col), slider) in orthogonal.chain(diagonal) {
        let mut cursor = square;
        let mut distance = 0;
        while let Some(next) = cursor.offset(d_row, d_col) {
            distance += 1;
            cursor = next;
            let Some(occupant) = position.piece_at(next) else {
                continue;
            };
            if occupant.color == attacker_color {
                let hits = occupant.kind == slider
                    || occupant.kind == PieceKind::Queen
                    || (occupant.kind == PieceKind::King && distance == 1);
                if hits {
                    return true;
                }
            }
            break;
        }
    }

    false
}
