//! First-reply opening book for Black.
//!
//! Each line is keyed by White's first move, recognised from the board alone:
//! a pawn is keyed by standing on its destination while the other square it
//! could have reached from home is free of white pawns, a knight by standing
//! on its destination while its home square is empty of white knights. Lines
//! are tried in table order and the first match wins.

use std::fmt;

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Color, Move, Piece, PieceKind, Position, Square};

/// (name, white first move, black replies)
const RAW_BOOK: [(&str, &str, &[&str]); 20] = [
    ("King's Pawn Opening", "e2e4", &["e7e5", "c7c5", "f7f6"]),
    ("Van't Kruijs Opening", "e2e3", &["e7e5", "f7f6"]),
    ("Queen's Pawn Opening", "d2d4", &["d7d5", "e7e6"]),
    ("Mieses Opening", "d2d3", &["d7d5", "e7e6"]),
    ("English Opening", "c2c4", &["e7e5", "c7c5"]),
    ("Saragossa Opening", "c2c3", &["e7e5", "c7c6"]),
    ("Bird's Opening", "f2f4", &["d7d6", "e7e6"]),
    ("Barnes Opening", "f2f3", &["e7e5", "f7f6"]),
    ("Hungarian Opening", "g2g3", &["e7e5", "g7g5"]),
    ("Grob's Attack", "g2g4", &["e7e5", "g7g5"]),
    ("Anderssen's Opening", "a2a3", &["e7e5", "a7a6"]),
    ("Ware Opening", "a2a4", &["e7e5", "a7a6"]),
    ("Nimzo-Larsen Attack", "b2b3", &["e7e5", "b7b6"]),
    ("Polish Opening", "b2b4", &["e7e5", "b7b6"]),
    ("Clemenz Opening", "h2h3", &["e7e5", "h7h6"]),
    ("Kadas Opening", "h2h4", &["e7e5", "h7h6"]),
    ("Reti Opening", "g1f3", &["e7e5", "g7g5"]),
    ("Amar Opening", "g1h3", &["e7e5", "g7g5"]),
    ("Van Geet Opening", "b1c3", &["e7e5", "b7b6"]),
    ("Durkin Opening", "b1a3", &["e7e5", "b7b6"]),
];

static STANDARD_BOOK: Lazy<OpeningBook> = Lazy::new(OpeningBook::from_table);

fn parse_pair(text: &str) -> Option<(Square, Square)> {
    let from = text.get(0..2)?.parse().ok()?;
    let to = text.get(2..4)?.parse().ok()?;
    Some((from, to))
}

/// White's first move as recognised on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OpeningSignature {
    pub kind: PieceKind,
    pub from: Square,
    pub to: Square,
}

impl OpeningSignature {
    /// True if the board shows this first move.
    #[must_use]
    pub fn matches(&self, position: &Position) -> bool {
        let piece = Piece::new(Color::White, self.kind);
        if position.piece_on(self.to) != piece {
            return false;
        }
        match self.kind {
            PieceKind::Pawn => {
                // A pawn on rank 3 rules out rank 4 and vice versa.
                let other_row = if self.to.row() == 2 { 3 } else { 2 };
                position.piece_on(Square::at(self.to.col(), other_row)) != piece
            }
            _ => position.piece_on(self.from) != piece,
        }
    }
}

impl fmt::Display for OpeningSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// One named opening and its canned replies.
#[derive(Clone, Debug)]
pub struct OpeningLine {
    name: &'static str,
    signature: OpeningSignature,
    replies: Vec<(Square, Square)>,
}

impl OpeningLine {
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn signature(&self) -> OpeningSignature {
        self.signature
    }

    /// Black replies as (from, to) pairs.
    #[must_use]
    pub fn replies(&self) -> &[(Square, Square)] {
        &self.replies
    }
}

#[derive(Clone, Debug)]
pub struct OpeningBook {
    lines: Vec<OpeningLine>,
}

impl OpeningBook {
    /// The built-in book, constructed on first use.
    #[must_use]
    pub fn standard() -> &'static OpeningBook {
        &STANDARD_BOOK
    }

    fn from_table() -> Self {
        let lines = RAW_BOOK
            .iter()
            .filter_map(|&(name, first, replies)| {
                let (from, to) = parse_pair(first)?;
                let kind = if from.row() == 0 {
                    PieceKind::Knight
                } else {
                    PieceKind::Pawn
                };
                Some(OpeningLine {
                    name,
                    signature: OpeningSignature { kind, from, to },
                    replies: replies.iter().filter_map(|r| parse_pair(r)).collect(),
                })
            })
            .collect();
        OpeningBook { lines }
    }

    #[must_use]
    pub fn lines(&self) -> &[OpeningLine] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The first line, in table order, whose signature the board shows.
    #[must_use]
    pub fn detect_signature(&self, position: &Position) -> Option<&OpeningLine> {
        self.lines
            .iter()
            .find(|line| line.signature.matches(position))
    }

    /// A uniformly random legal reply from the matching line.
    ///
    /// Replies that are not legal in `position` are skipped; `None` if no
    /// line matches or none of its replies can be played.
    pub fn pick<R: Rng + ?Sized>(&self, position: &Position, rng: &mut R) -> Option<Move> {
        let line = self.detect_signature(position)?;
        let playable: Vec<(Square, Square)> = line
            .replies
            .iter()
            .copied()
            .filter(|&(from, to)| {
                position.piece_on(from).is_color(Color::Black) && position.is_legal_move(from, to)
            })
            .collect();
        let &(from, to) = playable.choose(rng)?;
        log::debug!("book: {} ({}) -> {}{}", line.name, line.signature, from, to);
        Some(position.create_move(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn after(first: &str) -> Position {
        let (from, to) = parse_pair(first).unwrap();
        Position::new().play(from, to).unwrap()
    }

    #[test]
    fn test_table_is_complete() {
        let book = OpeningBook::standard();
        assert_eq!(book.len(), 20);
        assert!(book.lines().iter().all(|line| !line.replies().is_empty()));
    }

    #[test]
    fn test_every_first_move_is_recognised() {
        let book = OpeningBook::standard();
        for line in book.lines() {
            let position = after(&line.signature().to_string());
            let found = book.detect_signature(&position).unwrap();
            assert_eq!(found.name(), line.name());
        }
    }

    #[test]
    fn test_start_position_has_no_signature() {
        assert!(OpeningBook::standard()
            .detect_signature(&Position::new())
            .is_none());
    }

    #[test]
    fn test_pick_draws_from_candidates() {
        let position = after("e2e4");
        let mut rng = StdRng::seed_from_u64(7);
        let allowed = [
            (sq("e7"), sq("e5")),
            (sq("c7"), sq("c5")),
            (sq("f7"), sq("f6")),
        ];
        for _ in 0..32 {
            let mv = OpeningBook::standard().pick(&position, &mut rng).unwrap();
            assert!(allowed.contains(&(mv.from(), mv.to())));
        }
    }

    #[test]
    fn test_knight_line_needs_empty_home_square() {
        let position = after("g1f3");
        let line = OpeningBook::standard().detect_signature(&position).unwrap();
        assert_eq!(line.name(), "Reti Opening");
    }
}
