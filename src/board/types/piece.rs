//! Piece and color types.
//!
//! A piece lives on the board as a signed code: the sign is the side
//! (positive White, negative Black, zero empty) and the magnitude is the
//! kind. Empty and capture checks reduce to zero and sign tests.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece kinds. Discriminants are the magnitudes used in piece codes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i8)]
pub enum PieceKind {
    Pawn = 1,
    Rook = 2,
    Knight = 3,
    Bishop = 4,
    Queen = 5,
    King = 6,
}

impl PieceKind {
    /// All piece kinds in code order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    #[must_use]
    pub const fn from_code(magnitude: i8) -> Option<PieceKind> {
        match magnitude {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Rook),
            3 => Some(PieceKind::Knight),
            4 => Some(PieceKind::Bishop),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Parse a piece kind from a character of either case (p, r, n, b, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'r' => Some(PieceKind::Rook),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase letter for this kind
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Material value in centipawns.
    ///
    /// The king is valued at 10000 so that losing it outweighs any material.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10000,
        }
    }

    /// Returns true if this kind moves along ranks and files
    #[inline]
    #[must_use]
    pub const fn moves_straight(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Queen)
    }

    /// Returns true if this kind moves along diagonals
    #[inline]
    #[must_use]
    pub const fn moves_diagonally(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Queen)
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Sign carried by piece codes of this color
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Back rank for this color (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn starting row (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Pawn promotion row (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Side-to-move letter used by the text format
    #[inline]
    #[must_use]
    pub const fn to_fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Signed piece code as stored on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct Piece(i8);

impl Piece {
    /// The empty square
    pub const EMPTY: Piece = Piece(0);

    #[inline]
    #[must_use]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece(color.sign() * kind as i8)
    }

    /// Wrap a raw code. Codes outside -6..=6 are treated as empty.
    #[inline]
    #[must_use]
    pub const fn from_code(code: i8) -> Self {
        if code >= -6 && code <= 6 {
            Piece(code)
        } else {
            Piece::EMPTY
        }
    }

    #[inline]
    #[must_use]
    pub const fn code(self) -> i8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        if self.0 > 0 {
            Some(Color::White)
        } else if self.0 < 0 {
            Some(Color::Black)
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> Option<PieceKind> {
        PieceKind::from_code(self.0.abs())
    }

    #[inline]
    #[must_use]
    pub const fn is_color(self, color: Color) -> bool {
        self.0 * color.sign() > 0
    }

    #[inline]
    #[must_use]
    pub const fn is(self, color: Color, kind: PieceKind) -> bool {
        self.0 == color.sign() * kind as i8
    }

    /// True when both codes are non-empty and carry the same sign
    #[inline]
    #[must_use]
    pub const fn same_side(self, other: Piece) -> bool {
        (self.0 as i16) * (other.0 as i16) > 0
    }

    /// Decode a text-format letter; anything unrecognised is empty.
    #[must_use]
    pub fn from_fen_char(c: char) -> Piece {
        match PieceKind::from_char(c) {
            Some(kind) if c.is_ascii_uppercase() => Piece::new(Color::White, kind),
            Some(kind) => Piece::new(Color::Black, kind),
            None => Piece::EMPTY,
        }
    }

    /// Text-format letter, uppercase for White. Empty renders as a space.
    #[must_use]
    pub fn to_fen_char(self) -> char {
        match (self.color(), self.kind()) {
            (Some(Color::White), Some(kind)) => kind.to_char().to_ascii_uppercase(),
            (Some(Color::Black), Some(kind)) => kind.to_char(),
            _ => ' ',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, ".")
        } else {
            write!(f, "{}", self.to_fen_char())
        }
    }
}
