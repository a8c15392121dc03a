/// Core value types for the 8x8 mailbox board.
///
/// Rows run from the Black back rank (row 0 = rank 8) down to the White back
/// rank (row 7 = rank 1); column 0 is file a.
use std::fmt;

use crate::chess_errors::{ChessError, ChessResult};

pub use crate::game_state::game_state::{GameState, Position};
pub use crate::game_state::undo_state::{TrialMove, UndoState};

pub const BOARD_SIZE: i8 = 8;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// +1 for White, -1 for Black. Scores are White-positive.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row delta of a single pawn push.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row holding this side's king and rooks at the start of the game.
    #[inline]
    pub const fn back_rank(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    #[inline]
    pub const fn pawn_rank(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

/// Piece kind (color is carried separately by `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Material value in centipawns.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20000,
        }
    }

    /// Unsigned magnitude of the integer board encoding.
    #[inline]
    pub const fn code(self) -> i8 {
        match self {
            PieceKind::Rook => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
            PieceKind::Pawn => 6,
        }
    }

    #[inline]
    pub const fn from_code(code: i8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::Rook),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Queen),
            5 => Some(PieceKind::King),
            6 => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    /// Upper-case letter used in move descriptions; pawns have none.
    #[inline]
    pub const fn letter(self) -> Option<char> {
        match self {
            PieceKind::Pawn => None,
            PieceKind::Knight => Some('N'),
            PieceKind::Bishop => Some('B'),
            PieceKind::Rook => Some('R'),
            PieceKind::Queen => Some('Q'),
            PieceKind::King => Some('K'),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Signed integer encoding: magnitude identifies the kind, sign the color.
    #[inline]
    pub const fn to_code(self) -> i8 {
        match self.color {
            Color::White => self.kind.code(),
            Color::Black => -self.kind.code(),
        }
    }

    /// Decode a signed board integer. `0` is an empty square.
    pub fn from_code(code: i8) -> ChessResult<Option<Self>> {
        if code == 0 {
            return Ok(None);
        }
        let kind = PieceKind::from_code(code.saturating_abs())
            .ok_or(ChessError::InvalidPieceCode(code))?;
        let color = if code > 0 { Color::White } else { Color::Black };
        Ok(Some(Piece::new(color, kind)))
    }
}

/// A square on the board. Only constructible inside `0..8` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: i8,
    col: i8,
}

impl Square {
    /// Bounds-checked constructor; this is the entry point for untrusted coordinates.
    pub fn new(row: i32, col: i32) -> ChessResult<Self> {
        if !(0..BOARD_SIZE as i32).contains(&row) || !(0..BOARD_SIZE as i32).contains(&col) {
            return Err(ChessError::OutOfBounds { row, col });
        }
        Ok(Self {
            row: row as i8,
            col: col as i8,
        })
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Step by `(d_row, d_col)`, or `None` when that leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row + d_row;
        let col = self.col + d_col;
        if (0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&col) {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// All 64 squares, row-major from a8 to h1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }

    #[inline]
    pub(crate) const fn at(row: i8, col: i8) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col as u8);
        let rank = char::from(b'8' - self.row as u8);
        write!(f, "{file}{rank}")
    }
}

/// Castling bookkeeping as independent "has moved" flags, indexed by `Color::index()`.
///
/// Flags only ever go from `false` to `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CastlingRights {
    pub king_moved: [bool; 2],
    pub kingside_rook_moved: [bool; 2],
    pub queenside_rook_moved: [bool; 2],
}

impl CastlingRights {
    /// Every piece has moved; no castling for either side.
    pub const fn none() -> Self {
        Self {
            king_moved: [true; 2],
            kingside_rook_moved: [true; 2],
            queenside_rook_moved: [true; 2],
        }
    }

    #[inline]
    pub fn may_castle_kingside(&self, color: Color) -> bool {
        !self.king_moved[color.index()] && !self.kingside_rook_moved[color.index()]
    }

    #[inline]
    pub fn may_castle_queenside(&self, color: Color) -> bool {
        !self.king_moved[color.index()] && !self.queenside_rook_moved[color.index()]
    }

    /// Record that `piece` left `from`. Only kings and rooks leaving their
    /// original corners affect the flags.
    pub fn record_departure(&mut self, piece: Piece, from: Square) {
        let side = piece.color.index();
        match piece.kind {
            PieceKind::King => self.king_moved[side] = true,
            PieceKind::Rook if from.row() == piece.color.back_rank() => match from.col() {
                0 => self.queenside_rook_moved[side] = true,
                7 => self.kingside_rook_moved[side] = true,
                _ => {}
            },
            _ => {}
        }
    }
}

/// A move between two squares plus the transient ordering score used by search.
#[derive(Debug, Clone, Copy)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub score: i32,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to, score: 0 }
    }
}

// Ordering score is search scratch space, not part of a move's identity.
impl PartialEq for ChessMove {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for ChessMove {}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
