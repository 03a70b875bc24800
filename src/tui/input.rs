//! Keyboard and resize event mapping

use crate::selector::Action;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a terminal event into a selector action
///
/// Returns `None` for events the picker does not react to (mouse, focus,
/// paste, unbound keys, key releases).
pub(crate) fn map_event(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) => map_key(*key),
        Event::Resize(width, _) => Some(Action::Resize { width: *width }),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<Action> {
    // Some terminals report press and release, act on press only
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Action::Cancel),
        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => Some(Action::Cancel),
        (KeyCode::Enter, _) => Some(Action::Confirm),

        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => Some(Action::Up),
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => Some(Action::Down),

        (KeyCode::PageUp | KeyCode::Left, _)
        | (KeyCode::Char('h' | 'b'), KeyModifiers::NONE) => Some(Action::PageUp),
        (KeyCode::PageDown | KeyCode::Right, _)
        | (KeyCode::Char('l' | 'f'), KeyModifiers::NONE) => Some(Action::PageDown),

        (KeyCode::Home, _) | (KeyCode::Char('g'), KeyModifiers::NONE) => Some(Action::First),
        (KeyCode::End, _) | (KeyCode::Char('G'), _) => Some(Action::Last),

        _ => None,
    }
}
