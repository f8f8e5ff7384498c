//! Terminal input: crossterm events narrowed to what the login screen uses.

pub mod keyboard;

pub use keyboard::{is_ctrl_c, is_printable_key, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crossterm::event::{self, Event};
use std::io;
use std::time::Duration;

/// Events the runner reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Other,
}

impl From<Event> for InputEvent {
    fn from(ev: Event) -> Self {
        match ev {
            Event::Key(k) => InputEvent::Key(k),
            Event::Resize(w, h) => InputEvent::Resize(w, h),
            _ => InputEvent::Other,
        }
    }
}

/// Wait up to `timeout` for an event to become available.
pub fn poll(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}

/// Read the next event. Blocks; call after `poll` returned `true`.
pub fn read_event() -> io::Result<InputEvent> {
    event::read().map(InputEvent::from)
}
