use crate::selector::Action;
use crate::tui::input::map_event;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseEvent,
    MouseEventKind,
};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn navigation_keys() {
    assert_eq!(map_event(&key(KeyCode::Up)), Some(Action::Up));
    assert_eq!(map_event(&key(KeyCode::Char('k'))), Some(Action::Up));
    assert_eq!(map_event(&key(KeyCode::Down)), Some(Action::Down));
    assert_eq!(map_event(&key(KeyCode::Char('j'))), Some(Action::Down));
    assert_eq!(map_event(&key(KeyCode::PageUp)), Some(Action::PageUp));
    assert_eq!(map_event(&key(KeyCode::Left)), Some(Action::PageUp));
    assert_eq!(map_event(&key(KeyCode::PageDown)), Some(Action::PageDown));
    assert_eq!(map_event(&key(KeyCode::Char('l'))), Some(Action::PageDown));
    assert_eq!(map_event(&key(KeyCode::Home)), Some(Action::First));
    assert_eq!(map_event(&key(KeyCode::End)), Some(Action::Last));
    assert_eq!(
        map_event(&Event::Key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT))),
        Some(Action::Last)
    );
}

#[test]
fn confirm_and_cancel_keys() {
    assert_eq!(map_event(&key(KeyCode::Enter)), Some(Action::Confirm));
    assert_eq!(map_event(&key(KeyCode::Char('q'))), Some(Action::Cancel));
    assert_eq!(map_event(&key(KeyCode::Esc)), Some(Action::Cancel));
    assert_eq!(
        map_event(&Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        ))),
        Some(Action::Cancel)
    );
}

#[test]
fn plain_c_is_unbound() {
    assert_eq!(map_event(&key(KeyCode::Char('c'))), None);
}

#[test]
fn resize_carries_width() {
    assert_eq!(
        map_event(&Event::Resize(120, 40)),
        Some(Action::Resize { width: 120 })
    );
}

#[test]
fn key_release_and_mouse_are_ignored() {
    let release = KeyEvent {
        code: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert_eq!(map_event(&Event::Key(release)), None);

    let mouse = MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    };
    assert_eq!(map_event(&Event::Mouse(mouse)), None);
    assert_eq!(map_event(&Event::FocusGained), None);
}
