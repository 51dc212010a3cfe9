//! Error types for board operations.
//!
//! The text codec never fails, and an illegal move request is a silent no-op,
//! so these errors only surface from the parsing helpers.

use std::fmt;

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// No piece stands on the source square
    EmptySource { square: String },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::EmptySource { square } => {
                write!(f, "No piece on source square {square}")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Column or row out of bounds (must be 0-7)
    OutOfBounds { col: u8, row: u8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfBounds { col, row } => {
                write!(f, "Square ({col}, {row}) out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

impl From<SquareError> for MoveParseError {
    fn from(e: SquareError) -> Self {
        match e {
            SquareError::InvalidNotation { notation } => MoveParseError::InvalidSquare { notation },
            SquareError::OutOfBounds { col, row } => MoveParseError::InvalidSquare {
                notation: format!("({col}, {row})"),
            },
        }
    }
}
