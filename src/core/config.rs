//! Game configuration.
//!
//! The only inputs a game takes are supplied once, at creation:
//! - `board_size`: side of the square grid (even, at least 4)
//! - `bot`: whether BLACK is driven by the random strategy
//! - `tokens_per_symbol`: starting inventory of each player, per symbol
//! - `seed`: RNG seed for the bot and the optional totem shuffle
//! - `shuffle_totems`: swap the two central totem cells on a coin flip

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Smallest accepted board side.
pub const MIN_BOARD_SIZE: usize = 4;

/// Largest accepted board side.
pub const MAX_BOARD_SIZE: usize = 8;

/// Automated opponent level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BotLevel {
    /// BLACK is driven by the caller, like PINK.
    None,
    /// BLACK picks uniformly among legal moves.
    #[default]
    Random,
}

impl TryFrom<u8> for BotLevel {
    type Error = GameError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(BotLevel::None),
            1 => Ok(BotLevel::Random),
            other => Err(GameError::InvalidConfig(format!("unknown bot level {other}"))),
        }
    }
}

/// Configuration supplied at game creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the board (default: 6).
    pub board_size: usize,

    /// Opponent level for BLACK (default: random).
    pub bot: BotLevel,

    /// Tokens each player starts with, per symbol (default: 8).
    pub tokens_per_symbol: u32,

    /// RNG seed. `None` seeds from the thread RNG.
    pub seed: Option<u64>,

    /// Randomly swap the two starting totem cells (default: false).
    pub shuffle_totems: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 6,
            bot: BotLevel::Random,
            tokens_per_symbol: 8,
            seed: None,
            shuffle_totems: false,
        }
    }
}

impl GameConfig {
    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the opponent level.
    #[must_use]
    pub fn with_bot(mut self, bot: BotLevel) -> Self {
        self.bot = bot;
        self
    }

    /// Set the starting inventory per symbol.
    #[must_use]
    pub fn with_tokens_per_symbol(mut self, count: u32) -> Self {
        self.tokens_per_symbol = count;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable the starting totem shuffle.
    #[must_use]
    pub fn with_shuffled_totems(mut self, shuffle: bool) -> Self {
        self.shuffle_totems = shuffle;
        self
    }

    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfig`] for an odd board, a side outside
    /// [`MIN_BOARD_SIZE`]..=[`MAX_BOARD_SIZE`], or an empty starting inventory.
    pub fn validate(&self) -> Result<(), GameError> {
        let size = self.board_size;
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) || size % 2 != 0 {
            return Err(GameError::InvalidConfig(format!(
                "board size must be an even number from {MIN_BOARD_SIZE} to {MAX_BOARD_SIZE}, \
                 got {size}"
            )));
        }
        if self.tokens_per_symbol == 0 {
            return Err(GameError::InvalidConfig(
                "players need at least one token per symbol".to_string(),
            ));
        }
        Ok(())
    }
}
