pub mod board;
pub mod console;
pub mod engine;

pub use board::{
    AiEngine, Color, GameStatus, Move, Piece, PieceKind, Position, SearchConfig, Square,
};
pub use engine::GameController;
