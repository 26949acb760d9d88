//! Observer registry for key events.
//!
//! Observers are shared single-threaded handles; the session loop owns the
//! dispatcher and borrows each observer only for the duration of one
//! notification.

use std::cell::RefCell;
use std::rc::Rc;

use terminal_snake_types::{InputObserver, KeyCode};

/// Shared handle to a registered observer.
pub type ObserverHandle = Rc<RefCell<dyn InputObserver>>;

/// Fans key events out to every registered observer, in registration
/// order.
#[derive(Default)]
pub struct Dispatcher {
    observers: Vec<ObserverHandle>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Register an observer. Observers are notified in the order they were
    /// registered.
    pub fn register(&mut self, observer: ObserverHandle) {
        self.observers.push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Deliver one key event to every observer.
    pub fn dispatch(&self, code: KeyCode) {
        for observer in &self.observers {
            observer.borrow_mut().on_keypress(code);
        }
    }
}
