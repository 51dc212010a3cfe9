use super::{CastlingRights, Color, Extra, Move, Piece, PieceKind, Position, Square};

/// Everything `make_move` overwrites that cannot be recovered from the move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    previous_side_to_move: Color,
    previous_castling_rights: CastlingRights,
    previous_extra: Extra,
}

/// Rook origin and destination columns for a castling king landing on `king_to_col`.
#[inline]
fn castling_rook_cols(king_to_col: u8) -> (u8, u8) {
    if king_to_col == 6 {
        (7, 5)
    } else {
        (0, 3)
    }
}

impl Position {
    /// Validate and apply a move, returning the resulting position.
    ///
    /// Returns `None` when the source is empty, holds a piece of the side not
    /// on move, or the move is illegal. `self` is never modified, so readers
    /// of the old value keep a complete snapshot.
    #[must_use]
    pub fn play(&self, from: Square, to: Square) -> Option<Position> {
        if !self.piece_on(from).is_color(self.side_to_move) || !self.is_legal_move(from, to) {
            return None;
        }
        let mut next = *self;
        next.make_move(self.create_move(from, to));
        Some(next)
    }

    /// Apply `mv` in place without checking legality.
    ///
    /// Handles the castling rook relocation, promotion to a queen, castling
    /// rights, the clocks and the side to move. The returned record lets
    /// `unmake_move` restore the position exactly.
    pub fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        let info = UnmakeInfo {
            previous_side_to_move: self.side_to_move,
            previous_castling_rights: self.castling,
            previous_extra: self.extra,
        };

        let piece = mv.piece();
        let mover = piece.color().unwrap_or(self.side_to_move);
        let from = mv.from();
        let to = mv.to();

        self.clear_square(from);
        if mv.is_promotion() {
            self.set_piece(to, Piece::new(mover, PieceKind::Queen));
        } else {
            self.set_piece(to, piece);
        }

        if mv.is_castling() {
            let (rook_from, rook_to) = castling_rook_cols(to.col());
            let row = from.row();
            let rook = self.piece_on(Square::at(rook_from, row));
            self.clear_square(Square::at(rook_from, row));
            self.set_piece(Square::at(rook_to, row), rook);
        }

        match piece.kind() {
            Some(PieceKind::King) => self.castling.remove_color(mover),
            Some(PieceKind::Rook) => self.remove_corner_right(mover, from),
            _ => {}
        }
        if let Some(captured_color) = mv.captured().color() {
            if mv.captured().kind() == Some(PieceKind::Rook) {
                self.remove_corner_right(captured_color, to);
            }
        }

        let is_pawn = piece.kind() == Some(PieceKind::Pawn);
        self.extra.en_passant = if is_pawn && from.row().abs_diff(to.row()) == 2 {
            Some(Square::at(from.col(), (from.row() + to.row()) / 2))
        } else {
            None
        };
        if is_pawn || mv.is_capture() {
            self.extra.halfmove_clock = 0;
        } else {
            self.extra.halfmove_clock = self.extra.halfmove_clock.saturating_add(1);
        }
        if mover == Color::Black {
            self.extra.fullmove_number = self.extra.fullmove_number.saturating_add(1);
        }
        self.side_to_move = mover.opponent();

        info
    }

    /// Reverse a move applied by `make_move`.
    ///
    /// Must be called with the same move and the record `make_move` returned,
    /// on the position it produced.
    pub fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        let from = mv.from();
        let to = mv.to();

        if mv.is_castling() {
            let (rook_from, rook_to) = castling_rook_cols(to.col());
            let row = from.row();
            let rook = self.piece_on(Square::at(rook_to, row));
            self.clear_square(Square::at(rook_to, row));
            self.set_piece(Square::at(rook_from, row), rook);
        }

        self.set_piece(to, mv.captured());
        self.set_piece(from, mv.piece());

        self.side_to_move = info.previous_side_to_move;
        self.castling = info.previous_castling_rights;
        self.extra = info.previous_extra;
    }

    fn remove_corner_right(&mut self, color: Color, sq: Square) {
        let home = color.home_row();
        if sq == Square::at(0, home) {
            self.castling.remove(color, false);
        } else if sq == Square::at(7, home) {
            self.castling.remove(color, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_make_unmake_restores_position() {
        let mut position = Position::new();
        let original = position;
        let mv = position.create_move(sq("g1"), sq("f3"));
        let info = position.make_move(mv);
        assert_ne!(position, original);
        position.unmake_move(mv, info);
        assert_eq!(position, original);
    }

    #[test]
    fn test_double_push_records_en_passant_target() {
        let position = Position::new().play(sq("e2"), sq("e4")).unwrap();
        assert_eq!(position.extra().en_passant, Some(sq("e3")));
        let position = position.play(sq("g8"), sq("f6")).unwrap();
        assert_eq!(position.extra().en_passant, None);
    }

    #[test]
    fn test_play_rejects_wrong_side() {
        assert!(Position::new().play(sq("e7"), sq("e5")).is_none());
    }

    #[test]
    fn test_play_leaves_original_untouched() {
        let position = Position::new();
        let next = position.play(sq("e2"), sq("e4")).unwrap();
        assert_eq!(position, Position::new());
        assert_eq!(next.side_to_move(), Color::Black);
    }
}
