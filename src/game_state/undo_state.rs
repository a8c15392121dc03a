use std::ops::{Deref, DerefMut};

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};

/// Single undo record for `make_move` / `unmake_move`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: ChessMove,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    /// Rook `(from, to)` when the move was a castle.
    pub rook_relocation: Option<(Square, Square)>,

    pub prev_castling_rights: CastlingRights,
    pub prev_side_to_move: Color,
}

/// A move made on a borrowed `GameState` that is taken back when the guard drops.
///
/// Every simulate-then-restore sequence in the crate goes through this guard,
/// so the board is restored on early `break`, `?` returns and unwinding alike.
pub struct TrialMove<'a> {
    game_state: &'a mut GameState,
    undo: Option<UndoState>,
}

impl<'a> TrialMove<'a> {
    pub fn new(game_state: &'a mut GameState, mv: ChessMove) -> Self {
        let undo = make_move(game_state, mv);
        Self { game_state, undo }
    }

    #[inline]
    pub fn undo_state(&self) -> Option<&UndoState> {
        self.undo.as_ref()
    }
}

impl Deref for TrialMove<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.game_state
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut GameState {
        self.game_state
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            unmake_move(self.game_state, &undo);
        }
    }
}
