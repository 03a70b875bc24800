//! Terminal User Interface (TUI) for the sink picker
//!
//! A single synchronous loop: draw, block on the next terminal event, map it
//! to an [`Action`](crate::selector::Action), dispatch, repeat until the
//! selector reaches a terminal state. Nothing runs in the background.

use crate::parser::SinkRecord;
use crate::selector::{Selector, SelectorConfig, SelectorState};
use crate::style::Theme;
use crate::wpctl::AudioControl;
use color_eyre::eyre::{Context, Result};
use crossterm::cursor::Show;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

mod input;
mod render;
mod widgets;

#[cfg(test)]
mod tests;

use input::map_event;
use render::render;

/// Best-effort terminal restore, shared by the guard and the panic hook
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Restores the terminal when dropped, including on early `?` returns
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Run the interactive picker over `sinks`
///
/// Returns the terminal state the user reached. The terminal is back in
/// cooked mode on the main screen when this returns, successfully or not.
///
/// # Errors
/// Returns an error if terminal setup or drawing fails, if reading input
/// fails, or if applying the chosen sink fails.
pub fn run(
    sinks: Vec<SinkRecord>,
    config: SelectorConfig,
    theme: Theme,
    control: &dyn AudioControl,
) -> Result<SelectorState> {
    // Wrap the existing hook (color-eyre) so the report prints on a sane terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        original_hook(info);
    }));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let _term_guard = TerminalGuard;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut selector = Selector::new(sinks, config);
    let result = run_picker(&mut terminal, &mut selector, theme, control, event::read);

    let teardown = disable_raw_mode()
        .and_then(|()| execute!(terminal.backend_mut(), LeaveAlternateScreen, Show));
    settle(result, teardown)
}

/// Combine the picker outcome with the terminal restore
///
/// A picker error wins over a restore error; `TerminalGuard` retries the
/// restore on drop either way.
fn settle(result: Result<SelectorState>, teardown: io::Result<()>) -> Result<SelectorState> {
    let state = result?;
    teardown.context("Failed to restore terminal")?;
    Ok(state)
}

/// Event loop over any backend and event source
///
/// The final frame (the outcome message) is drawn before returning.
pub(crate) fn run_picker<B, F>(
    terminal: &mut Terminal<B>,
    selector: &mut Selector,
    theme: Theme,
    control: &dyn AudioControl,
    mut next_event: F,
) -> Result<SelectorState>
where
    B: ratatui::backend::Backend,
    F: FnMut() -> io::Result<Event>,
{
    debug!("Picker started with {} sinks", selector.sinks().len());

    loop {
        terminal
            .draw(|frame| render(frame, selector, theme))
            .context("Failed to draw picker")?;

        if selector.state().is_terminal() {
            return Ok(selector.state().clone());
        }

        let event = next_event().context("Failed to read terminal event")?;
        if let Some(action) = map_event(&event) {
            selector
                .dispatch(action, control)
                .wrap_err("Failed to apply selection")?;
        }
    }
}
