//! Move legality and generation.
//!
//! Legality is decided per source/destination pair in two stages: the
//! piece's movement pattern (including the castling sub-rule), then a
//! self-check simulation on a copy of the position. Generation scans every
//! destination for every piece, so the resulting order is board order.

use super::{Color, Move, MoveList, PieceKind, Position, Square};

/// Kingside castling: columns the king crosses and lands on.
const KINGSIDE_PATH: [u8; 2] = [5, 6];
/// Queenside castling: columns between king and rook.
const QUEENSIDE_PATH: [u8; 3] = [1, 2, 3];
/// Queenside castling: columns the king crosses and lands on.
const QUEENSIDE_KING_PATH: [u8; 2] = [2, 3];

const KING_START_COL: u8 = 4;

impl Position {
    /// True when every square strictly between `from` and `to` is empty.
    ///
    /// Steps by the sign of each axis delta, so it is only meaningful for
    /// straight or diagonal lines.
    pub(crate) fn is_path_clear(&self, from: Square, to: Square) -> bool {
        let dcol = (to.col() as i8 - from.col() as i8).signum();
        let drow = (to.row() as i8 - from.row() as i8).signum();
        let mut current = from.offset(dcol, drow);
        while let Some(sq) = current {
            if sq == to {
                return true;
            }
            if !self.is_empty(sq) {
                return false;
            }
            current = sq.offset(dcol, drow);
        }
        true
    }

    /// Movement-pattern legality for the piece on `from`, ignoring whether
    /// the move would expose its own king.
    #[must_use]
    pub fn is_pattern_valid(&self, from: Square, to: Square) -> bool {
        let piece = self.piece_on(from);
        let (Some(color), Some(kind)) = (piece.color(), piece.kind()) else {
            return false;
        };
        if from == to {
            return false;
        }
        let target = self.piece_on(to);
        if target.is_color(color) {
            return false;
        }

        let dcol = to.col() as i8 - from.col() as i8;
        let drow = to.row() as i8 - from.row() as i8;

        match kind {
            PieceKind::Pawn => {
                let dir = color.pawn_direction();
                if dcol == 0 && drow == dir {
                    target.is_empty()
                } else if dcol == 0 && drow == 2 * dir {
                    from.row() == color.pawn_start_row()
                        && target.is_empty()
                        && from.offset(0, dir).is_some_and(|mid| self.is_empty(mid))
                } else if dcol.abs() == 1 && drow == dir {
                    !target.is_empty()
                } else {
                    false
                }
            }
            PieceKind::Rook => (dcol == 0 || drow == 0) && self.is_path_clear(from, to),
            PieceKind::Bishop => dcol.abs() == drow.abs() && self.is_path_clear(from, to),
            PieceKind::Knight => matches!((dcol.abs(), drow.abs()), (1, 2) | (2, 1)),
            PieceKind::Queen => {
                (dcol == 0 || drow == 0 || dcol.abs() == drow.abs())
                    && self.is_path_clear(from, to)
            }
            PieceKind::King => {
                if dcol.abs() <= 1 && drow.abs() <= 1 {
                    true
                } else {
                    drow == 0 && dcol.abs() == 2 && self.can_castle(from, color, dcol > 0)
                }
            }
        }
    }

    /// The castling sub-rule for a king on `from` moving two files.
    fn can_castle(&self, from: Square, color: Color, kingside: bool) -> bool {
        let home = color.home_row();
        if from != Square::at(KING_START_COL, home) || !self.castling.has(color, kingside) {
            return false;
        }

        let rook_col = if kingside { 7 } else { 0 };
        if !self
            .piece_on(Square::at(rook_col, home))
            .is(color, PieceKind::Rook)
        {
            return false;
        }

        let (between, king_path): (&[u8], &[u8]) = if kingside {
            (&KINGSIDE_PATH, &KINGSIDE_PATH)
        } else {
            (&QUEENSIDE_PATH, &QUEENSIDE_KING_PATH)
        };
        if between.iter().any(|&col| !self.is_empty(Square::at(col, home))) {
            return false;
        }

        let enemy = color.opponent();
        if self.is_square_attacked(from, enemy) {
            return false;
        }
        king_path
            .iter()
            .all(|&col| !self.is_square_attacked(Square::at(col, home), enemy))
    }

    /// Attack geometry of the piece on `from` against `to`.
    ///
    /// Pawns attack their forward diagonals whether or not the target is
    /// occupied, kings attack adjacent squares only, and sliders need a
    /// clear path. The colour of whatever stands on `to` is not consulted.
    #[must_use]
    pub fn attacks(&self, from: Square, to: Square) -> bool {
        let piece = self.piece_on(from);
        let (Some(color), Some(kind)) = (piece.color(), piece.kind()) else {
            return false;
        };
        if from == to {
            return false;
        }
        let dcol = to.col() as i8 - from.col() as i8;
        let drow = to.row() as i8 - from.row() as i8;

        match kind {
            PieceKind::Pawn => dcol.abs() == 1 && drow == color.pawn_direction(),
            PieceKind::Knight => matches!((dcol.abs(), drow.abs()), (1, 2) | (2, 1)),
            PieceKind::King => dcol.abs() <= 1 && drow.abs() <= 1,
            PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => {
                let straight = dcol == 0 || drow == 0;
                let diagonal = dcol.abs() == drow.abs();
                ((straight && kind.moves_straight()) || (diagonal && kind.moves_diagonally()))
                    && self.is_path_clear(from, to)
            }
        }
    }

    /// True if any piece of `by` attacks `square`.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        self.pieces_of(by).any(|(from, _)| self.attacks(from, square))
    }

    /// Full legality of moving the piece on `from` to `to`.
    ///
    /// Independent of whose turn it is: the mover is whatever stands on
    /// `from`. The move is simulated on a copy and rejected if it leaves the
    /// mover's king attacked.
    #[must_use]
    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        if !self.is_pattern_valid(from, to) {
            return false;
        }
        let Some(color) = self.piece_on(from).color() else {
            return false;
        };
        let mut next = *self;
        next.make_move(self.create_move(from, to));
        !next.is_king_in_check(color)
    }

    /// Legal destinations for the piece on `from`, in board order.
    #[must_use]
    pub fn valid_moves(&self, from: Square) -> Vec<Square> {
        if self.is_empty(from) {
            return Vec::new();
        }
        Square::all()
            .filter(|&to| self.is_legal_move(from, to))
            .collect()
    }

    /// Every legal move for `color`, ordered by source then destination index.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (from, _) in self.pieces_of(color) {
            for to in Square::all() {
                if self.is_legal_move(from, to) {
                    moves.push(self.create_move(from, to));
                }
            }
        }
        moves
    }

    /// True if `color` has at least one legal move. Stops at the first one.
    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.pieces_of(color)
            .any(|(from, _)| Square::all().any(|to| self.is_legal_move(from, to)))
    }

    /// Build a move record from the current occupants of `from` and `to`.
    pub(crate) fn create_move(&self, from: Square, to: Square) -> Move {
        Move::new(from, to, self.piece_on(from), self.piece_on(to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_start_position_has_twenty_moves() {
        let position = Position::new();
        assert_eq!(position.legal_moves(Color::White).len(), 20);
        assert_eq!(position.legal_moves(Color::Black).len(), 20);
    }

    #[test]
    fn test_path_clear_excludes_endpoints() {
        let position = Position::new();
        assert!(!position.is_path_clear(sq("a2"), sq("a7")));
        assert!(position.is_path_clear(sq("a3"), sq("a6")));
        assert!(position.is_path_clear(sq("a1"), sq("a2")));
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let position = Position::new();
        assert_eq!(position.valid_moves(sq("g1")), vec![sq("f3"), sq("h3")]);
    }

    #[test]
    fn test_pawn_attacks_empty_diagonal() {
        let position = Position::new();
        assert!(position.attacks(sq("e2"), sq("d3")));
        assert!(!position.is_pattern_valid(sq("e2"), sq("d3")));
    }

    #[test]
    fn test_valid_moves_for_empty_square() {
        assert!(Position::new().valid_moves(sq("e4")).is_empty());
    }
}
