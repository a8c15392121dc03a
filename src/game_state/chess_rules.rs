//! Canonical chess-rule constants.
//!
//! Stores the standard starting layout in the signed-integer board encoding
//! plus the fixed castling geometry used by the king generator and by
//! move application.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Standard starting layout; row 0 is the Black back rank.
pub const STARTING_POSITION_CODES: [[i8; 8]; 8] = [
    [-1, -2, -3, -4, -5, -3, -2, -1],
    [-6, -6, -6, -6, -6, -6, -6, -6],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [6, 6, 6, 6, 6, 6, 6, 6],
    [1, 2, 3, 4, 5, 3, 2, 1],
];

pub const KING_HOME_COL: i8 = 4;

pub const KINGSIDE_ROOK_COL: i8 = 7;
pub const KINGSIDE_KING_TARGET_COL: i8 = 6;
pub const KINGSIDE_ROOK_TARGET_COL: i8 = 5;

pub const QUEENSIDE_ROOK_COL: i8 = 0;
pub const QUEENSIDE_KING_TARGET_COL: i8 = 2;
pub const QUEENSIDE_ROOK_TARGET_COL: i8 = 3;

/// Columns that must be empty between king and rook.
pub const KINGSIDE_GAP_COLS: [i8; 2] = [5, 6];
pub const QUEENSIDE_GAP_COLS: [i8; 3] = [1, 2, 3];
