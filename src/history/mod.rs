//! Reversible commands and the undo/redo history.
//!
//! Every board change goes through a [`Command`] recorded by [`History`].
//! Commands are values; they receive the board and the players when run, so
//! the history never holds a reference into the game.

mod command;
mod manager;

pub use command::Command;
pub use manager::History;
