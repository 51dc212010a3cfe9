//! Chess board representation and game logic.
//!
//! A position is a flat array of 64 signed piece codes plus side to move,
//! castling rights and the clock fields of the text format. Legality is
//! decided by movement patterns and a self-check simulation on a copy;
//! search explores hypothetical moves with make/unmake on its own copy.
//!
//! # Example
//! ```
//! use chess_ai::board::{Color, Position};
//!
//! let position = Position::new();
//! let moves = position.legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod builder;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
pub mod prelude;
pub mod search;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::PositionBuilder;
pub use error::{MoveParseError, SquareError};
pub use eval::evaluate_board;
pub use make_unmake::UnmakeInfo;
pub use state::{Extra, PieceView, Position};
pub use status::GameStatus;
pub use types::{
    CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece, PieceKind, Square,
};

// Public API - search functions and configuration
pub use search::{
    alpha_beta, minimax, AiEngine, MoveSource, OpeningBook, SearchConfig, SearchResult,
    SearchStats, DEFAULT_MAX_DEPTH,
};
