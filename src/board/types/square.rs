//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, stored as its index `row * 8 + col`.
///
/// Column 0-7 maps to files a-h and row 0-7 to ranks 1-8, so index 0 is a1
/// and index 63 is h8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a square with bounds checking
    #[must_use]
    pub const fn new(col: u8, row: u8) -> Option<Self> {
        if col < 8 && row < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Create a square from coordinates known to be on the board.
    #[inline]
    #[must_use]
    pub(crate) const fn at(col: u8, row: u8) -> Self {
        debug_assert!(col < 8 && row < 8);
        Square(row * 8 + col)
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < 64 {
            Some(Square(idx as u8))
        } else {
            None
        }
    }

    /// Column (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Row (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The square reached by stepping `dcol`/`drow`, if it stays on the board
    #[inline]
    #[must_use]
    pub const fn offset(self, dcol: i8, drow: i8) -> Option<Square> {
        let col = self.col() as i8 + dcol;
        let row = self.row() as i8 + drow;
        if col >= 0 && col < 8 && row >= 0 && row < 8 {
            Some(Square::at(col as u8, row as u8))
        } else {
            None
        }
    }

    /// Iterate every square in board order (a1, b1, ..., h8)
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.col() + b'a') as char, self.row() + 1)
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = SquareError;

    fn try_from((col, row): (u8, u8)) -> Result<Self, Self::Error> {
        Square::new(col, row).ok_or(SquareError::OutOfBounds { col, row })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }
        match (bytes[0], bytes[1]) {
            (file @ b'a'..=b'h', rank @ b'1'..=b'8') => Ok(Square::at(file - b'a', rank - b'1')),
            _ => Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            }),
        }
    }
}
