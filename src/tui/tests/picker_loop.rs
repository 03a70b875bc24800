use super::buffer_text;
use crate::selector::{Selector, SelectorConfig, SelectorState};
use crate::style::Theme;
use crate::test_utils::{RecordingControl, sink, sinks};
use crate::tui::{run_picker, settle};
use color_eyre::eyre::eyre;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use std::io;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Event source that replays `events` and then fails like a closed stdin
fn scripted(events: Vec<Event>) -> impl FnMut() -> io::Result<Event> {
    let mut events = events.into_iter();
    move || {
        events
            .next()
            .ok_or_else(|| io::Error::other("event script exhausted"))
    }
}

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(60, 14)).unwrap()
}

#[test]
fn confirm_applies_chosen_identifier_and_draws_message() {
    let control = RecordingControl::default();
    let mut terminal = terminal();
    let mut selector = Selector::new(sinks(3), SelectorConfig::default());

    let state = run_picker(
        &mut terminal,
        &mut selector,
        Theme::default(),
        &control,
        scripted(vec![key(KeyCode::Down), key(KeyCode::Enter)]),
    )
    .unwrap();

    assert_eq!(state, SelectorState::Confirmed(sink("Sink 1", "41")));
    assert_eq!(control.applied(), vec!["41".to_string()]);
    assert!(buffer_text(&terminal).contains("Setting Sink 1."));
}

#[test]
fn quit_cancels_without_applying() {
    let control = RecordingControl::default();
    let mut terminal = terminal();
    let mut selector = Selector::new(sinks(3), SelectorConfig::default());

    let state = run_picker(
        &mut terminal,
        &mut selector,
        Theme::default(),
        &control,
        scripted(vec![key(KeyCode::Down), key(KeyCode::Char('q'))]),
    )
    .unwrap();

    assert_eq!(state, SelectorState::Cancelled);
    assert!(control.applied().is_empty());
    assert!(buffer_text(&terminal).contains("Skipping for now..."));
}

#[test]
fn unbound_events_and_resize_keep_browsing() {
    let control = RecordingControl::default();
    let mut terminal = terminal();
    let mut selector = Selector::new(sinks(2), SelectorConfig::default());

    let state = run_picker(
        &mut terminal,
        &mut selector,
        Theme::plain(),
        &control,
        scripted(vec![
            key(KeyCode::Char('x')),
            Event::Resize(40, 10),
            Event::FocusLost,
            key(KeyCode::Enter),
        ]),
    )
    .unwrap();

    assert_eq!(state, SelectorState::Confirmed(sink("Sink 0", "40")));
}

#[test]
fn empty_list_can_be_quit() {
    let control = RecordingControl::default();
    let mut terminal = terminal();
    let mut selector = Selector::new(Vec::new(), SelectorConfig::default());

    let state = run_picker(
        &mut terminal,
        &mut selector,
        Theme::default(),
        &control,
        scripted(vec![key(KeyCode::Down), key(KeyCode::Up), key(KeyCode::Esc)]),
    )
    .unwrap();

    assert_eq!(state, SelectorState::Cancelled);
}

#[test]
fn apply_failure_stops_the_loop() {
    let control = RecordingControl::failing();
    let mut terminal = terminal();
    let mut selector = Selector::new(sinks(2), SelectorConfig::default());

    let err = run_picker(
        &mut terminal,
        &mut selector,
        Theme::default(),
        &control,
        scripted(vec![key(KeyCode::Enter), key(KeyCode::Char('q'))]),
    )
    .unwrap_err();

    let report = format!("{err:#}");
    assert!(report.contains("Failed to apply selection"));
    assert!(report.contains("simulated failure"));
}

#[test]
fn input_failure_is_reported() {
    let control = RecordingControl::default();
    let mut terminal = terminal();
    let mut selector = Selector::new(sinks(2), SelectorConfig::default());

    let err = run_picker(
        &mut terminal,
        &mut selector,
        Theme::default(),
        &control,
        scripted(Vec::new()),
    )
    .unwrap_err();

    assert!(format!("{err:#}").contains("Failed to read terminal event"));
    assert!(control.applied().is_empty());
}

#[test]
fn picker_error_survives_failed_restore() {
    let err = settle(
        Err(eyre!("Failed to apply selection")),
        Err(io::Error::other("raw mode still on")),
    )
    .unwrap_err();

    let report = format!("{err:#}");
    assert!(report.contains("Failed to apply selection"));
    assert!(!report.contains("raw mode still on"));
}

#[test]
fn restore_failure_reported_after_clean_exit() {
    let err = settle(Ok(SelectorState::Cancelled), Err(io::Error::other("tty gone"))).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to restore terminal"));

    let state = settle(Ok(SelectorState::Cancelled), Ok(())).unwrap();
    assert_eq!(state, SelectorState::Cancelled);
}
