//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to layout messages.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use scaffold_protocol::Message;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a terminal event to a layout message.
///
/// Key presses go through [`key_to_message`]; resizes become
/// [`Message::Resize`]. Mouse, focus and paste events are not handled.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_message(*key),
        Event::Resize(width, height) => Some(Message::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

/// Converts a terminal key event to a layout message.
///
/// Returns `None` for key releases and unbound keys.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `q` or `Ctrl+C` | Quit |
/// | `Down` or `j` | Line down |
/// | `Up` or `k` | Line up |
/// | `d` | Half page down |
/// | `u` | Half page up |
/// | `PageDown` | Page down |
/// | `PageUp` | Page up |
/// | `Home` or `t` | Top |
/// | `End` or `b` | Bottom |
/// | `h` | Toggle help |
/// | `p` | Toggle position info |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Message::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Message::Quit),

        // Line scrolling
        KeyCode::Down | KeyCode::Char('j') => Some(Message::LineDown),
        KeyCode::Up | KeyCode::Char('k') => Some(Message::LineUp),

        // Page scrolling
        KeyCode::Char('d') => Some(Message::HalfPageDown),
        KeyCode::Char('u') => Some(Message::HalfPageUp),
        KeyCode::PageDown => Some(Message::PageDown),
        KeyCode::PageUp => Some(Message::PageUp),

        // Jumps
        KeyCode::Home | KeyCode::Char('t') => Some(Message::ScrollToTop),
        KeyCode::End | KeyCode::Char('b') => Some(Message::ScrollToBottom),

        // Footer toggles
        KeyCode::Char('h') => Some(Message::ToggleHelp),
        KeyCode::Char('p') => Some(Message::TogglePosition),

        _ => None,
    }
}
