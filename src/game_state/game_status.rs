//! Game-over detection for the driver.
//!
//! The status is derived from the position each time: the side to move either
//! has a legal move (the game continues) or it does not, in which case being
//! in check decides between checkmate and stalemate. Terminal statuses are
//! absorbing because `apply_move` refuses to move once one is reached.

use std::fmt;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::{has_legal_move, is_in_check};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    WhiteToMove,
    BlackToMove,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::WhiteToMove => f.write_str("White to move"),
            GameStatus::BlackToMove => f.write_str("Black to move"),
            GameStatus::Checkmate { winner } => write!(f, "Checkmate, {winner} wins"),
            GameStatus::Stalemate => f.write_str("Stalemate"),
        }
    }
}

pub fn game_status(game_state: &mut GameState) -> GameStatus {
    let side = game_state.side_to_move;
    if has_legal_move(game_state, side) {
        return match side {
            Color::White => GameStatus::WhiteToMove,
            Color::Black => GameStatus::BlackToMove,
        };
    }
    if is_in_check(game_state, side) {
        GameStatus::Checkmate {
            winner: side.opposite(),
        }
    } else {
        GameStatus::Stalemate
    }
}
