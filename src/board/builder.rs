//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing text.
//!
//! # Example
//! ```
//! use chess_ai::board::{Color, PieceKind, PositionBuilder, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square::new(4, 0).unwrap(), Color::White, PieceKind::King)
//!     .piece(Square::new(4, 7).unwrap(), Color::Black, PieceKind::King)
//!     .piece(Square::new(0, 1).unwrap(), Color::White, PieceKind::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert!(position.king_square(Color::Black).is_some());
//! ```

use super::{CastlingRights, Color, Piece, PieceKind, Position, Square};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    position: Position,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a builder over an empty board with no castling rights.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            position: Position::empty(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        PositionBuilder {
            position: Position::new(),
        }
    }

    /// Place a piece, replacing whatever stood on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.position.set_piece(square, Piece::new(color, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.position.clear_square(square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.position.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.position.castling = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.position.castling.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.position.castling.set(color, false);
        self
    }

    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.position.castling = CastlingRights::none();
        self
    }

    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.position.extra.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.position.extra.fullmove_number = number;
        self
    }

    #[must_use]
    pub fn build(self) -> Position {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_position() {
        let built = PositionBuilder::starting_position().build();
        assert_eq!(built.to_fen(), Position::new().to_fen());
    }

    #[test]
    fn test_empty_board() {
        let position = PositionBuilder::new()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("e8"), Color::Black, PieceKind::King)
            .build();

        assert_eq!(position.all_pieces().count(), 2);
        assert!(position.piece_at(0, 0).is_none());
        assert!(position.castling_rights().is_empty());
    }

    #[test]
    fn test_castling_rights() {
        let position = PositionBuilder::starting_position()
            .no_castling_rights()
            .castle_kingside(Color::White)
            .build();

        let rights = position.castling_rights();
        assert!(rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));
        assert!(!rights.has(Color::Black, true));
        assert!(!rights.has(Color::Black, false));
    }

    #[test]
    fn test_clear_square() {
        let position = PositionBuilder::starting_position().clear(sq("a1")).build();

        assert!(position.piece_at(0, 0).is_none());
        assert!(position.piece_at(1, 0).is_some());
    }

    #[test]
    fn test_clocks() {
        let position = PositionBuilder::new()
            .side_to_move(Color::Black)
            .halfmove_clock(7)
            .fullmove_number(12)
            .build();
        assert_eq!(position.to_fen(), "8/8/8/8/8/8/8/8 b - - 7 12");
    }
}
