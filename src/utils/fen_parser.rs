//! FEN-to-GameState parser.
//!
//! Reads the placement, side-to-move and castling fields. Castling letters are
//! mapped onto the "has moved" flags: a missing `K` marks White's kingside rook
//! as moved, and a side with neither letter has its king marked as moved.
//! The en-passant and clock fields are optional and ignored.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing board layout".to_owned()))?;
    let side_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing side-to-move".to_owned()))?;
    let castling_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing castling rights".to_owned()))?;

    // En passant, halfmove and fullmove fields.
    if parts.count() > 3 {
        return Err(ChessError::InvalidFen("extra trailing fields".to_owned()));
    }

    Ok(GameState::from_position(
        parse_board(board_part)?,
        parse_side_to_move(side_part)?,
        parse_castling_rights(castling_part)?,
    ))
}

fn parse_board(board_part: &str) -> ChessResult<Position> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFen(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut position = Position::empty();
    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0i32;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += empty_count as i32;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or_else(|| {
                ChessError::InvalidFen(format!("invalid piece character '{ch}'"))
            })?;
            let square = Square::new(row as i32, col).map_err(|_| {
                ChessError::InvalidFen(format!("rank {} has too many files", 8 - row))
            })?;
            position.set_piece(square, Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(ChessError::InvalidFen(format!(
                "rank {} does not sum to 8 files",
                8 - row
            )));
        }
    }

    Ok(position)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessError::InvalidFen(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::none();
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        let (color, kingside) = match ch {
            'K' => (Color::White, true),
            'Q' => (Color::White, false),
            'k' => (Color::Black, true),
            'q' => (Color::Black, false),
            _ => {
                return Err(ChessError::InvalidFen(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        };
        rights.king_moved[color.index()] = false;
        if kingside {
            rights.kingside_rook_moved[color.index()] = false;
        } else {
            rights.queenside_rook_moved[color.index()] = false;
        }
    }

    Ok(rights)
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}
