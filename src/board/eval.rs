use super::{Color, Position};

impl Position {
    /// Material balance from `perspective`'s side: its piece values minus the
    /// opponent's. No positional terms.
    #[must_use]
    pub fn material_balance(&self, perspective: Color) -> i32 {
        self.squares
            .iter()
            .filter_map(|piece| Some((piece.color()?, piece.kind()?.value())))
            .map(|(color, value)| if color == perspective { value } else { -value })
            .sum()
    }
}

/// Static evaluation used at the search horizon.
#[inline]
#[must_use]
pub fn evaluate_board(position: &Position, perspective: Color) -> i32 {
    position.material_balance(perspective)
}
