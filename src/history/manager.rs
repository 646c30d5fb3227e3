//! Undo/redo stacks.

use serde::{Deserialize, Serialize};

use super::command::Command;
use crate::board::Board;
use crate::core::{ColorMap, GameError, HistoryDirection, Player};

/// Two LIFO stacks of executed and undone commands.
///
/// ## Invariants
///
/// - every command on the undo stack has been executed and not reverted
/// - every command on the redo stack has been reverted
/// - executing a fresh command empties the redo stack
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    undo: Vec<Command>,
    redo: Vec<Command>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a fresh command and record it.
    ///
    /// On failure nothing is recorded and the redo stack is left untouched.
    ///
    /// # Errors
    ///
    /// Propagates the command's own execution error.
    pub fn do_it(
        &mut self,
        command: Command,
        board: &mut Board,
        players: &mut ColorMap<Player>,
    ) -> Result<(), GameError> {
        command.execute(board, players)?;
        self.undo.push(command);
        self.redo.clear();
        Ok(())
    }

    /// Revert the most recent command and move it to the redo stack.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyHistory`] if there is nothing to undo.
    pub fn undo(
        &mut self,
        board: &mut Board,
        players: &mut ColorMap<Player>,
    ) -> Result<Command, GameError> {
        let command = self
            .undo
            .pop()
            .ok_or(GameError::EmptyHistory(HistoryDirection::Undo))?;
        if let Err(err) = command.unexecute(board, players) {
            self.undo.push(command);
            return Err(err);
        }
        self.redo.push(command);
        Ok(command)
    }

    /// Re-execute the most recently undone command.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyHistory`] if there is nothing to redo.
    pub fn redo(
        &mut self,
        board: &mut Board,
        players: &mut ColorMap<Player>,
    ) -> Result<Command, GameError> {
        let command = self
            .redo
            .pop()
            .ok_or(GameError::EmptyHistory(HistoryDirection::Redo))?;
        if let Err(err) = command.execute(board, players) {
            self.redo.push(command);
            return Err(err);
        }
        self.undo.push(command);
        Ok(command)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// The `depth`-th command from the top of the undo stack (0 = next to undo).
    #[must_use]
    pub fn peek_undo(&self, depth: usize) -> Option<&Command> {
        self.undo.iter().rev().nth(depth)
    }

    /// The `depth`-th command from the top of the redo stack (0 = next to redo).
    #[must_use]
    pub fn peek_redo(&self, depth: usize) -> Option<&Command> {
        self.redo.iter().rev().nth(depth)
    }
}
