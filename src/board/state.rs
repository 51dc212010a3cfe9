use std::fmt;

use super::{CastlingRights, Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Fields carried for the text format but not consulted by the rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extra {
    /// Square skipped by the last double pawn push. Informational only.
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Default for Extra {
    fn default() -> Self {
        Extra {
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

/// An occupied square as seen from outside the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PieceView {
    pub col: u8,
    pub row: u8,
    pub color: Color,
    pub kind: PieceKind,
}

impl PieceView {
    #[must_use]
    pub fn square(&self) -> Square {
        Square::at(self.col, self.row)
    }

    #[must_use]
    pub fn piece(&self) -> Piece {
        Piece::new(self.color, self.kind)
    }
}

/// The complete game position.
///
/// A plain `Copy` value: 64 piece codes indexed `row * 8 + col`, the side to
/// move, the castling flags and the extra text-format fields. Hypothetical
/// moves are explored on copies, so a published position is never observed
/// half-updated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) squares: [Piece; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) extra: Extra,
}

impl Position {
    /// The standard starting position with all castling rights.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            position.set_piece(Square::at(col, 0), Piece::new(Color::White, kind));
            position.set_piece(Square::at(col, 7), Piece::new(Color::Black, kind));
            position.set_piece(Square::at(col, 1), Piece::new(Color::White, PieceKind::Pawn));
            position.set_piece(Square::at(col, 6), Piece::new(Color::Black, PieceKind::Pawn));
        }
        position.castling = CastlingRights::all();
        position
    }

    /// A board with no pieces, White to move and no castling rights.
    #[must_use]
    pub fn empty() -> Self {
        Position {
            squares: [Piece::EMPTY; 64],
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            extra: Extra::default(),
        }
    }

    /// Restore the standard starting position in place.
    pub fn reset(&mut self) {
        *self = Position::new();
    }

    /// The occupant of `(col, row)`, or `None` for an empty or off-board square.
    #[must_use]
    pub fn piece_at(&self, col: u8, row: u8) -> Option<Piece> {
        Square::new(col, row)
            .map(|sq| self.piece_on(sq))
            .filter(|piece| !piece.is_empty())
    }

    /// The raw code on a square; `Piece::EMPTY` when vacant.
    #[inline]
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Piece {
        self.squares[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_on(sq).is_empty()
    }

    /// All occupied squares in board order (a1, b1, ..., h8).
    pub fn all_pieces(&self) -> impl Iterator<Item = PieceView> + '_ {
        Square::all().filter_map(move |sq| {
            let piece = self.piece_on(sq);
            Some(PieceView {
                col: sq.col(),
                row: sq.row(),
                color: piece.color()?,
                kind: piece.kind()?,
            })
        })
    }

    /// Squares and codes of one side's pieces, in board order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all()
            .map(move |sq| (sq, self.piece_on(sq)))
            .filter(move |(_, piece)| piece.is_color(color))
    }

    /// First king of `color` in board order.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        Square::all().find(|&sq| self.piece_on(sq) == king)
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[must_use]
    pub fn extra(&self) -> Extra {
        self.extra
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.extra.fullmove_number
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.extra.halfmove_clock
    }

    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = piece;
    }

    pub(crate) fn clear_square(&mut self, sq: Square) {
        self.squares[sq.index()] = Piece::EMPTY;
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            write!(f, "{}", row + 1)?;
            for col in 0..8 {
                write!(f, " {}", self.piece_on(Square::at(col, row)))?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
