//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type returned by the driver-facing parts of
//! the crate: square construction, notation parsing, position setup, and move
//! application. Rules and search internals operate on already-validated
//! squares and never fail, so they return plain values.
//!
//! Usage guidelines:
//! - Parsing and input variants (`OutOfBounds`, `InvalidAlgebraic`,
//!   `InvalidFen`, `InvalidPieceCode`) are recoverable and suitable for
//!   presenting to end users.
//! - Move application variants (`EmptySquare`, `WrongSide`, `IllegalMove`,
//!   `GameOver`) are domain-level rejections; the game state is left untouched
//!   when one of them is returned.

use thiserror::Error;

use crate::game_state::chess_types::{ChessMove, Square};

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// Row or column outside `0..=7`.
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    /// Signed piece code outside `-6..=6`.
    #[error("invalid piece code {0}")]
    InvalidPieceCode(i8),

    /// A square or move in coordinate notation failed to parse.
    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),

    /// A FEN string had malformed structure or an unexpected token.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// Attempted to move from a square that holds no piece.
    #[error("no piece on {0}")]
    EmptySquare(Square),

    /// Attempted to move a piece that does not belong to the side to move.
    #[error("piece on {0} does not belong to the side to move")]
    WrongSide(Square),

    /// The move is not among the legal moves of the side to move.
    #[error("illegal move {0}")]
    IllegalMove(ChessMove),

    /// The game already ended in checkmate or stalemate.
    #[error("the game is over")]
    GameOver,
}

pub type ChessResult<T> = Result<T, ChessError>;
