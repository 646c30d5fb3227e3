//! Core value types: positions, pieces, players, configuration, RNG, errors.
//!
//! Everything here is independent of the board rules; the `board`, `history`
//! and `game` modules build on these types.

pub mod position;
pub mod piece;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use position::{Direction, Position};
pub use piece::{Color, Piece, Symbol, Token};
pub use player::{ColorMap, Player};
pub use rng::GameRng;
pub use config::{BotLevel, GameConfig, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use error::{ErrorKind, GameError, HistoryDirection, InsertRejection, MoveRejection};
