//! Error types.
//!
//! Every fallible operation returns `Result<_, GameError>`. Errors are local
//! to one call: the game is left unchanged and stays usable.
//!
//! [`ErrorKind`] groups the variants into the three families callers care
//! about: illegal geometry, empty history, and phase mismatch (plus
//! configuration errors at construction time).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::piece::{Color, Symbol};
use super::position::Position;

/// Why a totem cannot move to a target cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum MoveRejection {
    #[error("target is outside the board")]
    OffBoard,
    #[error("target is occupied")]
    Occupied,
    #[error("target is not on the totem's row or column")]
    NotInLine,
    #[error("a piece stands between the totem and the target")]
    PathBlocked,
    #[error("a jump must land on the first empty cell of its line")]
    NotFirstEmptyCell,
}

/// Why a token cannot be inserted at a target cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum InsertRejection {
    #[error("target is outside the board")]
    OffBoard,
    #[error("target is occupied")]
    Occupied,
    #[error("target is not next to the totem")]
    NotAdjacent,
}

/// Which history stack an operation needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryDirection {
    Undo,
    Redo,
}

impl std::fmt::Display for HistoryDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryDirection::Undo => write!(f, "undo"),
            HistoryDirection::Redo => write!(f, "redo"),
        }
    }
}

/// Broad error family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A move or insertion target fails the placement rules.
    IllegalGeometry,
    /// Undo or redo with nothing to undo or redo.
    EmptyHistory,
    /// Action attempted in the wrong phase or without tokens.
    PhaseMismatch,
    /// Invalid game configuration.
    Configuration,
}

/// Errors returned by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid position {target} for moving the {symbol} totem: {reason}")]
    IllegalMove {
        symbol: Symbol,
        target: Position,
        reason: MoveRejection,
    },

    #[error("invalid position {target} for insertion: {reason}")]
    IllegalInsert {
        target: Position,
        reason: InsertRejection,
    },

    #[error("position {0} is outside the board")]
    OutOfBounds(Position),

    #[error("{0} stack is empty")]
    EmptyHistory(HistoryDirection),

    #[error("{color} has no {symbol} tokens left")]
    NoTokensLeft { color: Color, symbol: Symbol },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GameError {
    /// The family this error belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::IllegalMove { .. }
            | GameError::IllegalInsert { .. }
            | GameError::OutOfBounds(_) => ErrorKind::IllegalGeometry,
            GameError::EmptyHistory(_) => ErrorKind::EmptyHistory,
            GameError::NoTokensLeft { .. } => ErrorKind::PhaseMismatch,
            GameError::InvalidConfig(_) => ErrorKind::Configuration,
        }
    }
}
