//! Key mapping from terminal events to the abstract key vocabulary.

use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, KeyModifiers};

use terminal_snake_types::KeyCode;

/// Upper bound on key events consumed in one frame. Anything beyond this
/// stays queued for the next frame.
pub const MAX_EVENTS_PER_FRAME: usize = 32;

/// Map a keyboard event to the abstract key vocabulary.
///
/// Arrows and WASD become directions, the keypad enter key becomes
/// `Enter`, a literal carriage return becomes `Return`. Every other key
/// maps to `Null` so observers can ignore it.
pub fn to_key_code(key: KeyEvent) -> KeyCode {
    match key.code {
        event::KeyCode::Up | event::KeyCode::Char('w') | event::KeyCode::Char('W') => KeyCode::Up,
        event::KeyCode::Down | event::KeyCode::Char('s') | event::KeyCode::Char('S') => {
            KeyCode::Down
        }
        event::KeyCode::Left | event::KeyCode::Char('a') | event::KeyCode::Char('A') => {
            KeyCode::Left
        }
        event::KeyCode::Right | event::KeyCode::Char('d') | event::KeyCode::Char('D') => {
            KeyCode::Right
        }
        event::KeyCode::Enter => KeyCode::Enter,
        event::KeyCode::Char('\r') | event::KeyCode::Char('\n') => KeyCode::Return,
        _ => KeyCode::Null,
    }
}

/// Whether this key event ends the session (Tab, or Ctrl+C).
pub fn should_quit(key: KeyEvent) -> bool {
    if key.code == event::KeyCode::Tab {
        return true;
    }
    matches!(key.code, event::KeyCode::Char('c') | event::KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Drain pending key presses, blocking up to `timeout` for the first one.
///
/// Returns at most [`MAX_EVENTS_PER_FRAME`] events; repeats and releases
/// are filtered out. Follow-up events are collected without blocking so
/// the caller's frame timing is not stretched by a burst of input.
pub fn drain_events(timeout: Duration) -> std::io::Result<ArrayVec<KeyEvent, MAX_EVENTS_PER_FRAME>> {
    let mut events = ArrayVec::new();
    let mut wait = timeout;

    while events.len() < MAX_EVENTS_PER_FRAME && event::poll(wait)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                events.push(key);
            }
        }
        wait = Duration::ZERO;
    }

    Ok(events)
}
