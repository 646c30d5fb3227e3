//! Turn/state machine and the public game facade.

mod engine;
mod event;
mod state;

pub use engine::Game;
pub use event::{GameEvent, ListenerId};
pub use state::{GameResult, GameState};
