use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEventKind};

/// What the terminal sent, decoded into screen intents.
#[derive(Debug, PartialEq, Eq)]
pub enum TuiEvent {
    // Forwarded to the reducer as core::Action values
    Quit,
    ForceQuit,
    Submit,
    ToggleFavorite,
    Increment,
    Decrement,

    // Consumed by the TUI layer itself
    CursorUp,
    CursorDown,
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    Resize,
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                log::debug!(
                    "key {:?} (modifiers {:?})",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    // Ctrl+C always force-quits
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                    (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                    (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                    (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                    (_, KeyCode::Char('f')) => Some(TuiEvent::ToggleFavorite),
                    (_, KeyCode::Char('+')) => Some(TuiEvent::Increment),
                    (_, KeyCode::Char('-')) => Some(TuiEvent::Decrement),
                    (_, KeyCode::Right) => Some(TuiEvent::Increment),
                    (_, KeyCode::Left) => Some(TuiEvent::Decrement),
                    (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                    (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                    (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
                    (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
                    _ => None,
                }
            }
            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
                MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
                _ => None,
            },
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}

/// Non-blocking poll, used to drain queued input between frames.
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
