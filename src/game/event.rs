//! Change notifications.
//!
//! Listeners are plain closures run synchronously, in registration order,
//! after every committed atomic mutation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Color, Position, Symbol, Token};
use crate::history::Command;

/// What changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    TotemMoved {
        color: Color,
        symbol: Symbol,
        from: Position,
        to: Position,
    },
    TokenInserted { token: Token, at: Position },
    /// Emitted right after the winning `TokenInserted`.
    GameWon { winner: Color },
    /// One atomic command was reverted.
    Undone(Command),
    /// One atomic command was replayed.
    Redone(Command),
}

/// Handle returned by [`Game::subscribe`](super::Game::subscribe).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&GameEvent)>;

/// Ordered listener registry.
#[derive(Default)]
pub(crate) struct Listeners {
    entries: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Returns whether a listener was removed.
    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn emit(&mut self, event: &GameEvent) {
        for (_, listener) in &mut self.entries {
            listener(event);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn won(color: Color) -> GameEvent {
        GameEvent::GameWon { winner: color }
    }

    #[test]
    fn test_emit_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::default();

        for tag in ["a", "b"] {
            let log = Rc::clone(&log);
            listeners.add(Box::new(move |_| log.borrow_mut().push(tag)));
        }
        listeners.emit(&won(Color::Pink));

        assert_eq!(*log.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn test_remove_listener() {
        let count = Rc::new(RefCell::new(0));
        let mut listeners = Listeners::default();

        let counter = Rc::clone(&count);
        let id = listeners.add(Box::new(move |_| *counter.borrow_mut() += 1));
        listeners.emit(&won(Color::Black));

        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
        listeners.emit(&won(Color::Black));

        assert_eq!(*count.borrow(), 1);
        assert!(listeners.entries.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut listeners = Listeners::default();
        let a = listeners.add(Box::new(|_| {}));
        let b = listeners.add(Box::new(|_| {}));
        listeners.remove(a);
        let c = listeners.add(Box::new(|_| {}));

        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }
}
