//! # oxono
//!
//! Rules engine for Oxono, a two-player abstract game on a square grid.
//!
//! ## Rules in brief
//!
//! Two colourless totems (CROSS and CIRCLE) sit on the board. On each turn
//! the current player moves one totem in a straight line, then places a
//! token of that totem's symbol, in their own colour, next to it. Four
//! tokens in a row or column sharing a symbol or a colour win.
//!
//! ## Design Principles
//!
//! 1. **Single mutation entry point**: [`Game`] owns the board, the players
//!    and the history. All changes go through it.
//!
//! 2. **Reversible by construction**: every change is a [`Command`] value
//!    that knows how to revert itself; undo/redo re-derives the turn state
//!    from the commands.
//!
//! 3. **Pluggable players**: an automated side is any [`Strategy`], picking
//!    from move lists the rules have already filtered.
//!
//! ## Modules
//!
//! - `core`: positions, pieces, players, configuration, RNG, errors
//! - `board`: grid storage, legality rules, alignment detection
//! - `history`: reversible commands and undo/redo stacks
//! - `strategy`: automated players
//! - `game`: turn/state machine and change notifications

pub mod core;
pub mod board;
pub mod history;
pub mod strategy;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    BotLevel, Color, ColorMap, Direction, ErrorKind, GameConfig, GameError, GameRng, Piece, Player,
    Position, Symbol, Token,
};

pub use crate::board::Board;

pub use crate::history::{Command, History};

pub use crate::strategy::{RandomStrategy, Strategy, TotemMove};

pub use crate::game::{Game, GameEvent, GameResult, GameState, ListenerId};
