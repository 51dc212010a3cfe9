//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_ai::board::prelude::*;
//!
//! let position = Position::new();
//! assert_eq!(position.status(Color::White), GameStatus::Ongoing);
//! ```

pub use super::{
    AiEngine, CastlingRights, Color, GameStatus, Move, MoveList, MoveParseError, Piece,
    PieceKind, Position, PositionBuilder, SearchConfig, Square, SquareError,
};
