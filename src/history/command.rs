//! Reversible board mutations.
//!
//! A [`Command`] is an immutable value carrying enough "before" data to undo
//! itself exactly. Executing validates against the rules; unexecuting
//! trusts the recorded data.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Color, ColorMap, GameError, Player, Position, Symbol, Token};

/// One atomic, reversible mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Relocate a totem.
    MoveTotem {
        /// Player who moved it.
        actor: Color,
        symbol: Symbol,
        from: Position,
        to: Position,
        /// Board's last-moved marker before this move.
        previous_last_moved: Option<Symbol>,
    },

    /// Place a token; the token's colour is its owner.
    InsertToken { token: Token, at: Position },
}

impl Command {
    /// Build a totem move from the board's current state.
    #[must_use]
    pub fn move_totem(board: &Board, actor: Color, symbol: Symbol, to: Position) -> Self {
        Command::MoveTotem {
            actor,
            symbol,
            from: board.totem_position(symbol),
            to,
            previous_last_moved: board.last_moved(),
        }
    }

    /// Build a token insertion.
    #[must_use]
    pub fn insert_token(token: Token, at: Position) -> Self {
        Command::InsertToken { token, at }
    }

    /// The player this command acts for.
    #[must_use]
    pub fn actor(&self) -> Color {
        match self {
            Command::MoveTotem { actor, .. } => *actor,
            Command::InsertToken { token, .. } => token.color,
        }
    }

    /// Apply the mutation.
    ///
    /// Nothing changes if an error is returned.
    ///
    /// # Errors
    ///
    /// - [`GameError::IllegalMove`] / [`GameError::IllegalInsert`] if the
    ///   target breaks the placement rules
    /// - [`GameError::NoTokensLeft`] if the owner has no token of that symbol
    pub fn execute(
        &self,
        board: &mut Board,
        players: &mut ColorMap<Player>,
    ) -> Result<(), GameError> {
        match *self {
            Command::MoveTotem { symbol, to, .. } => {
                board.move_totem(symbol, to)?;
                board.set_last_moved(Some(symbol));
            }
            Command::InsertToken { token, at } => {
                board
                    .validate_insert(token, at)
                    .map_err(|reason| GameError::IllegalInsert { target: at, reason })?;
                players[token.color].take_token(token.symbol)?;
                board.place_token(token, at);
            }
        }
        Ok(())
    }

    /// Revert the mutation.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if the recorded positions do not
    /// fit the board.
    pub fn unexecute(
        &self,
        board: &mut Board,
        players: &mut ColorMap<Player>,
    ) -> Result<(), GameError> {
        match *self {
            Command::MoveTotem { symbol, from, previous_last_moved, .. } => {
                board.relocate_totem(symbol, from)?;
                board.set_last_moved(previous_last_moved);
            }
            Command::InsertToken { token, at } => {
                if board.remove_token(at)?.is_some() {
                    players[token.color].return_token(token.symbol);
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::MoveTotem { actor, symbol, from, to, .. } => {
                write!(f, "{actor} moves {symbol} totem {from} -> {to}")
            }
            Command::InsertToken { token, at } => {
                write!(f, "{} inserts {} at {at}", token.color, token.symbol)
            }
        }
    }
}
