use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::host::InputEvent;

/// Where a terminal host gets its input from.
pub trait InputSource {
    /// Wait up to `timeout` for input, then return everything pending.
    fn poll(&mut self, timeout: Duration) -> io::Result<Vec<InputEvent>>;
}

/// Reads input from the real terminal through crossterm.
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn poll(&mut self, timeout: Duration) -> io::Result<Vec<InputEvent>> {
        // First event waits up to the timeout, then drain everything pending
        let mut events = Vec::new();
        let mut next = read_event(timeout)?;
        while let Some(raw) = next {
            events.extend(translate(raw));
            next = read_event(Duration::ZERO)?;
        }
        Ok(events)
    }
}

/// Read one raw event, waiting at most `timeout`.
fn read_event(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate a crossterm event into an `InputEvent`.
///
/// Only key presses count: with keyboard enhancement enabled the terminal
/// also reports releases, which would otherwise trigger every binding twice.
pub fn translate(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<InputEvent> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::trace!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        // Ctrl+C always quits
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(InputEvent::Quit),
        (_, KeyCode::Esc) => Some(InputEvent::Quit),
        (_, KeyCode::Char(c)) => Some(InputEvent::Char(c)),
        (_, KeyCode::Left) => Some(InputEvent::Left),
        (_, KeyCode::Right) => Some(InputEvent::Right),
        (_, KeyCode::Up) => Some(InputEvent::Up),
        (_, KeyCode::Down) => Some(InputEvent::Down),
        (_, KeyCode::Enter) => Some(InputEvent::Enter),
        (_, KeyCode::Backspace) => Some(InputEvent::Backspace),
        (_, KeyCode::Tab) => Some(InputEvent::Tab),
        _ => None,
    }
}
