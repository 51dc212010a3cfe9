//! Check, checkmate and stalemate detection.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Position};

/// Game state from the point of view of one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(text)
    }
}

impl Position {
    /// True if `color` has a king and an enemy piece attacks it.
    ///
    /// A missing king is never in check.
    #[must_use]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }

    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_king_in_check(color) && !self.has_legal_move(color)
    }

    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_king_in_check(color) && !self.has_legal_move(color)
    }

    /// Combined terminal-state query for `color`.
    #[must_use]
    pub fn status(&self, color: Color) -> GameStatus {
        let in_check = self.is_king_in_check(color);
        match (in_check, self.has_legal_move(color)) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Ongoing,
        }
    }
}
