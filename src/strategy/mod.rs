//! Automated players.
//!
//! A [`Strategy`] picks from candidate lists the game has already checked
//! against the rules, so it cannot produce an illegal action. Returning
//! `None` means "no decision"; the game then leaves its state untouched.
//!
//! ## Example
//!
//! ```
//! use oxono::board::Board;
//! use oxono::core::{Position, Symbol};
//! use oxono::strategy::{RandomStrategy, Strategy, TotemMove};
//!
//! let board = Board::new(6);
//! let moves = [TotemMove::new(Symbol::Cross, Position::new(3, 5))];
//! let mut bot = RandomStrategy::new(7);
//! assert_eq!(bot.choose_move(&board, &moves), Some(moves[0]));
//! ```

mod random;

pub use random::RandomStrategy;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board::Board;
use crate::core::{Position, Symbol};

/// A totem and the cell it goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TotemMove {
    pub symbol: Symbol,
    pub to: Position,
}

impl TotemMove {
    #[must_use]
    pub const fn new(symbol: Symbol, to: Position) -> Self {
        Self { symbol, to }
    }
}

impl fmt::Display for TotemMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.to)
    }
}

/// Decision policy for an automated player.
pub trait Strategy: fmt::Debug {
    /// Pick one of the legal totem moves.
    fn choose_move(&mut self, board: &Board, moves: &[TotemMove]) -> Option<TotemMove>;

    /// Pick one of the legal insertion cells for the token about to be placed.
    fn choose_insert(&mut self, board: &Board, positions: &[Position]) -> Option<Position>;
}
