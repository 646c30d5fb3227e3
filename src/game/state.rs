//! Turn phase and game outcome.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::Color;

/// Action the current player is expected to take next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Move a totem.
    #[default]
    Move,
    /// Insert a token of the symbol just moved.
    Insert,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::Move => write!(f, "MOVE"),
            GameState::Insert => write!(f, "INSERT"),
        }
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Four in a row.
    Winner(Color),
    /// No tokens left or board full, without a winner.
    Draw,
}

impl GameResult {
    /// Check if a colour won.
    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        matches!(self, GameResult::Winner(c) if *c == color)
    }
}
