//! Owned board state.
//!
//! `Position` is the 8x8 mailbox grid. `GameState` bundles it with the
//! castling flags and the side to move; it is the one mutable object every
//! rules and search routine borrows, and the crate keeps no other board state.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::{STARTING_POSITION_CODES, STARTING_POSITION_FEN};
use crate::game_state::chess_types::*;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Position {
    squares: [[Option<Piece>; 8]; 8],
}

impl Position {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a position from the signed-integer encoding (row 0 = rank 8).
    pub fn from_codes(codes: [[i8; 8]; 8]) -> ChessResult<Self> {
        let mut position = Self::empty();
        for (row, codes_row) in codes.iter().enumerate() {
            for (col, code) in codes_row.iter().enumerate() {
                position.squares[row][col] = Piece::from_code(*code)?;
            }
        }
        Ok(position)
    }

    pub fn to_codes(&self) -> [[i8; 8]; 8] {
        let mut codes = [[0i8; 8]; 8];
        for square in Square::all() {
            if let Some(piece) = self.piece_at(square) {
                codes[square.row() as usize][square.col() as usize] = piece.to_code();
            }
        }
        codes
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row() as usize][square.col() as usize] = piece;
    }

    #[inline]
    pub fn take_piece(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize].take()
    }

    /// First king of `color` in row-major order.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        Square::all().find(|square| self.piece_at(*square) == Some(king))
    }

    /// Squares occupied by `color`, row-major.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| match self.piece_at(square) {
            Some(piece) if piece.color == color => Some((square, piece)),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub position: Position,
    pub castling_rights: CastlingRights,
    pub side_to_move: Color,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            position: Position::empty(),
            castling_rights: CastlingRights::none(),
            side_to_move: Color::White,
        }
    }
}

impl GameState {
    /// Empty board, White to move, no castling available.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// The standard initial layout with full castling rights.
    pub fn new_game() -> Self {
        let mut position = Position::empty();
        for square in Square::all() {
            let code = STARTING_POSITION_CODES[square.row() as usize][square.col() as usize];
            // Codes in the constant table are all in -6..=6.
            if let Ok(piece) = Piece::from_code(code) {
                position.set_piece(square, piece);
            }
        }
        Self {
            position,
            castling_rights: CastlingRights::default(),
            side_to_move: Color::White,
        }
    }

    pub fn from_position(
        position: Position,
        side_to_move: Color,
        castling_rights: CastlingRights,
    ) -> Self {
        Self {
            position,
            castling_rights,
            side_to_move,
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn starting_fen() -> &'static str {
        STARTING_POSITION_FEN
    }
}
