//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `rules.rs` - Movement patterns, castling, promotion, clocks
//! - `terminal.rs` - Check, checkmate and stalemate
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `search.rs` - Evaluation, alpha-beta and the opening book
//! - `proptest.rs` - Property-based tests

mod rules;

use crate::board::{Position, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// Play a sequence of coordinate moves from `position`, panicking on the first illegal one.
pub(super) fn play_line(mut position: Position, line: &[&str]) -> Position {
    for text in line {
        let mv = position.parse_move(text).unwrap();
        position = position
            .play(mv.from(), mv.to())
            .unwrap_or_else(|| panic!("{text} rejected"));
    }
    position
}
