//! Win detection: four tokens in a row or column sharing a symbol or a colour.

use super::grid::Board;
use crate::core::{Direction, Piece, Position};

/// Number of consecutive tokens that wins the game.
pub const ALIGNMENT_LENGTH: usize = 4;

impl Board {
    /// Whether the window of [`ALIGNMENT_LENGTH`] cells starting at `start`
    /// and running along `direction` holds tokens that all share a symbol or
    /// all share a colour.
    ///
    /// Empty cells, totems and cells past the edge break the window.
    #[must_use]
    pub fn check_alignment(&self, start: Position, direction: Direction) -> bool {
        let Some(first) = self.get(start).and_then(Piece::as_token) else {
            return false;
        };

        let mut same_symbol = true;
        let mut same_color = true;

        for k in 1..ALIGNMENT_LENGTH {
            let Some(next) = start
                .offset(direction, k)
                .and_then(|p| self.get(p))
                .and_then(Piece::as_token)
            else {
                return false;
            };

            same_symbol &= next.symbol == first.symbol;
            same_color &= next.color == first.color;

            if !same_symbol && !same_color {
                return false;
            }
        }

        true
    }

    /// Whether any horizontal or vertical window through `pos` is aligned.
    ///
    /// Only windows that stay on the board are checked.
    #[must_use]
    pub fn has_alignment_through(&self, pos: Position) -> bool {
        let last_start = self.size() - ALIGNMENT_LENGTH;
        let span = ALIGNMENT_LENGTH - 1;

        let horizontal = (pos.col.saturating_sub(span)..=pos.col.min(last_start))
            .any(|col| self.check_alignment(Position::new(pos.row, col), Direction::Right));
        let vertical = (pos.row.saturating_sub(span)..=pos.row.min(last_start))
            .any(|row| self.check_alignment(Position::new(row, pos.col), Direction::Down));

        horizontal || vertical
    }
}
