//! Players and per-colour data storage.
//!
//! ## ColorMap
//!
//! Fixed two-slot storage indexed by [`Color`], with O(1) access.
//!
//! ## Player
//!
//! A colour, a per-symbol token inventory and an optional automated
//! [`Strategy`]. A player without a strategy is driven by the caller.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::GameError;
use super::piece::{Color, Symbol};
use crate::strategy::Strategy;

/// Per-colour data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use oxono::core::{Color, ColorMap};
///
/// let mut score: ColorMap<u32> = ColorMap::new(|_| 0);
/// score[Color::Black] += 3;
/// assert_eq!(score[Color::Black], 3);
/// assert_eq!(score[Color::Pink], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: [factory(Color::Pink), factory(Color::Black)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a colour's data.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a colour's data.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (Color, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}

/// One side of the game.
#[derive(Debug)]
pub struct Player {
    color: Color,
    /// Remaining tokens, indexed by `Symbol::index()`.
    tokens: [u32; 2],
    strategy: Option<Box<dyn Strategy>>,
}

impl Player {
    /// Create a human-driven player holding `tokens_per_symbol` of each symbol.
    #[must_use]
    pub fn new(color: Color, tokens_per_symbol: u32) -> Self {
        Self {
            color,
            tokens: [tokens_per_symbol; 2],
            strategy: None,
        }
    }

    /// Attach a strategy (builder pattern).
    #[must_use]
    pub fn with_strategy(mut self, strategy: Box<dyn Strategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Remaining tokens of `symbol`.
    #[must_use]
    pub fn tokens(&self, symbol: Symbol) -> u32 {
        self.tokens[symbol.index()]
    }

    /// Remaining tokens of both symbols.
    #[must_use]
    pub fn total_tokens(&self) -> u32 {
        self.tokens.iter().sum()
    }

    /// Whether at least one token of `symbol` is left.
    #[must_use]
    pub fn has_tokens(&self, symbol: Symbol) -> bool {
        self.tokens(symbol) > 0
    }

    /// Remove one token of `symbol` from the inventory.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoTokensLeft`] if the counter is already zero.
    pub fn take_token(&mut self, symbol: Symbol) -> Result<(), GameError> {
        let color = self.color;
        let count = &mut self.tokens[symbol.index()];
        *count = count
            .checked_sub(1)
            .ok_or(GameError::NoTokensLeft { color, symbol })?;
        Ok(())
    }

    /// Put one token of `symbol` back into the inventory.
    pub fn return_token(&mut self, symbol: Symbol) {
        self.tokens[symbol.index()] += 1;
    }

    /// Whether the player is driven by a strategy.
    #[must_use]
    pub fn is_automated(&self) -> bool {
        self.strategy.is_some()
    }

    /// Replace the player's strategy. `None` hands control back to the caller.
    pub fn set_strategy(&mut self, strategy: Option<Box<dyn Strategy>>) {
        self.strategy = strategy;
    }

    /// Detach the strategy so it can run against the game that owns this player.
    pub fn take_strategy(&mut self) -> Option<Box<dyn Strategy>> {
        self.strategy.take()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} player", self.color)
    }
}
