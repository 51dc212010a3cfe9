use std::convert::Infallible;
use std::str::FromStr;

use super::error::MoveParseError;
use super::{CastlingRights, Color, Move, Piece, Position, Square};

impl Position {
    /// Decode a position from the interchange text format.
    ///
    /// Decoding is permissive and never fails: unrecognised piece letters
    /// become empty squares, over-long ranks are cut at the h-file, missing
    /// ranks stay empty, and missing or unparsable trailing fields fall back
    /// to `w`, `KQkq`, `-`, `0` and `1`.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        let mut position = Position::empty();
        let mut parts = fen.split_whitespace();

        let placement = parts.next().unwrap_or("");
        for (rank_idx, rank_str) in placement.split('/').take(8).enumerate() {
            let row = 7 - rank_idx as u8;
            let mut col: u8 = 0;
            for c in rank_str.chars() {
                if col >= 8 {
                    break;
                }
                if let Some(run) = c.to_digit(10) {
                    col = col.saturating_add(run as u8);
                } else {
                    position.set_piece(Square::at(col, row), Piece::from_fen_char(c));
                    col += 1;
                }
            }
        }

        position.side_to_move = match parts.next() {
            Some("b") => Color::Black,
            _ => Color::White,
        };
        position.castling = parts
            .next()
            .map_or(CastlingRights::all(), CastlingRights::from_fen);
        position.extra.en_passant = parts.next().and_then(|s| s.parse::<Square>().ok());
        position.extra.halfmove_clock = parts.next().and_then(|s| s.parse().ok()).unwrap_or(0);
        position.extra.fullmove_number = parts.next().and_then(|s| s.parse().ok()).unwrap_or(1);
        position
    }

    /// Encode the position in the interchange text format, rank 8 first.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in (0..8).rev() {
            let mut text = String::new();
            let mut empty = 0;
            for col in 0..8 {
                let piece = self.piece_on(Square::at(col, row));
                if piece.is_empty() {
                    empty += 1;
                } else {
                    if empty > 0 {
                        text.push_str(&empty.to_string());
                        empty = 0;
                    }
                    text.push(piece.to_fen_char());
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }

        let ep = self
            .extra
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            self.side_to_move.to_fen_char(),
            self.castling,
            ep,
            self.extra.halfmove_clock,
            self.extra.fullmove_number
        )
    }

    /// Parse a move in coordinate notation (e.g. "e2e4") against this position.
    ///
    /// A fifth promotion character is accepted and ignored, since pawns always
    /// promote to a queen. The move must be legal for the piece on the source
    /// square; whose turn it is is left to the caller.
    ///
    /// # Example
    /// ```
    /// use chess_ai::board::Position;
    ///
    /// let position = Position::new();
    /// let mv = position.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        let text = text.trim();
        if !(4..=5).contains(&text.len()) || !text.is_ascii() {
            return Err(MoveParseError::InvalidLength { len: text.len() });
        }

        let from: Square = text[0..2].parse()?;
        let to: Square = text[2..4].parse()?;

        if self.is_empty(from) {
            return Err(MoveParseError::EmptySource {
                square: from.to_string(),
            });
        }
        if !self.is_legal_move(from, to) {
            return Err(MoveParseError::IllegalMove {
                notation: text.to_string(),
            });
        }
        Ok(self.create_move(from, to))
    }
}

impl FromStr for Position {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Position::from_fen(s))
    }
}
