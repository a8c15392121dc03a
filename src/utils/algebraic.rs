//! Coordinate notation for squares and moves.
//!
//! Converts between board squares and `e4`-style coordinates, parses typed
//! moves such as `e2 e4` or `e2e4`, and produces the short move description
//! printed after each move (`Nf3`, `e4`).

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;

/// Convert coordinate notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    Square::new(i32::from(b'8' - rank), i32::from(file - b'a'))
}

/// Convert a square to coordinate notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Parse a typed move: `"e2 e4"`, `"e2-e4"` or `"e2e4"`.
pub fn parse_coordinate_move(text: &str) -> ChessResult<ChessMove> {
    let compact: String = text
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '-')
        .collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(ChessError::InvalidAlgebraic(text.trim().to_owned()));
    }

    let from = algebraic_to_square(&compact[0..2])?;
    let to = algebraic_to_square(&compact[2..4])?;
    Ok(ChessMove::new(from, to))
}

/// Piece letter followed by the destination; pawns carry no letter.
pub fn describe_move(piece: Piece, to: Square) -> String {
    match piece.kind.letter() {
        Some(letter) => format!("{letter}{to}"),
        None => to.to_string(),
    }
}
