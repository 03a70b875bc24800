//! TUI subsystem tests
//!
//! These live inside the crate because rendering, key mapping and the event
//! loop are `pub(crate)`. Drawing goes through ratatui's `TestBackend`, and
//! input comes from a scripted event list instead of the real terminal.

use ratatui::{Terminal, backend::TestBackend};

mod input_mapping;
mod picker_loop;

/// Flatten the backend buffer into newline-separated rows
pub(super) fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
