//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece`, `PieceKind` and `Color` - signed piece codes and their parts
//! - `Square` - board square index (`row * 8 + col`)
//! - `Move` and `MoveList` - move representation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
