//! Sink selection state machine
//!
//! The selector owns the parsed sink list and a cursor. It starts in
//! [`SelectorState::Browsing`] and ends in exactly one of the two terminal
//! states. Entering [`SelectorState::Confirmed`] applies the choice through
//! the [`AudioControl`] seam; terminal states ignore further input.
//!
//! Rendering lives in `crate::tui` and only reads from this type.

use crate::error::{Error, Result};
use crate::parser::SinkRecord;
use crate::wpctl::AudioControl;
use tracing::debug;

/// Items shown per page when nothing else is configured
pub const DEFAULT_VISIBLE_ROWS: usize = 5;

/// Layout options passed in at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorConfig {
    /// How many items render at once (one page)
    pub visible_rows: usize,
    /// Fixed column width for items; `None` follows the terminal width
    pub item_width: Option<u16>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            visible_rows: DEFAULT_VISIBLE_ROWS,
            item_width: None,
        }
    }
}

/// Input the selector understands, already decoupled from key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    PageUp,
    PageDown,
    First,
    Last,
    Confirm,
    Cancel,
    /// Only the width matters; page size is fixed by `visible_rows`
    Resize { width: u16 },
}

/// Where the selector is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorState {
    Browsing,
    Confirmed(SinkRecord),
    Cancelled,
}

impl SelectorState {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, SelectorState::Browsing)
    }
}

/// Interactive selection over a fixed sink list
#[derive(Debug)]
pub struct Selector {
    sinks: Vec<SinkRecord>,
    cursor: usize,
    state: SelectorState,
    config: SelectorConfig,
    /// Last known terminal width, used when `item_width` is unset
    viewport_width: u16,
}

impl Selector {
    #[must_use]
    pub fn new(sinks: Vec<SinkRecord>, config: SelectorConfig) -> Self {
        let config = SelectorConfig {
            visible_rows: config.visible_rows.max(1),
            ..config
        };
        Self {
            sinks,
            cursor: 0,
            state: SelectorState::Browsing,
            config,
            viewport_width: 0,
        }
    }

    #[must_use]
    pub fn sinks(&self) -> &[SinkRecord] {
        &self.sinks
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub const fn state(&self) -> &SelectorState {
        &self.state
    }

    #[must_use]
    pub const fn config(&self) -> SelectorConfig {
        self.config
    }

    /// Column width available to an item, given the area being drawn into
    #[must_use]
    pub fn item_width(&self, area_width: u16) -> u16 {
        let viewport = if self.viewport_width == 0 {
            area_width
        } else {
            self.viewport_width.min(area_width)
        };
        self.config
            .item_width
            .map_or(viewport, |width| width.min(viewport))
    }

    /// Number of pages, at least one even for an empty list
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.sinks.len().div_ceil(self.config.visible_rows).max(1)
    }

    /// Page containing the cursor
    #[must_use]
    pub const fn page(&self) -> usize {
        self.cursor / self.config.visible_rows
    }

    /// Index range of the items on the cursor's page
    #[must_use]
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let start = self.page() * self.config.visible_rows;
        let end = (start + self.config.visible_rows).min(self.sinks.len());
        start.min(end)..end
    }

    /// Apply one action, returning the new state
    ///
    /// Confirming runs `control.set_default` with the chosen identifier
    /// before the state changes.
    ///
    /// # Errors
    /// - [`Error::MissingIdentifier`] if the chosen sink has no id
    /// - any error from `control.set_default`
    pub fn dispatch(
        &mut self,
        action: Action,
        control: &dyn AudioControl,
    ) -> Result<&SelectorState> {
        if self.state.is_terminal() {
            return Ok(&self.state);
        }

        let last = self.sinks.len().saturating_sub(1);
        let rows = self.config.visible_rows;

        match action {
            Action::Up => self.cursor = self.cursor.saturating_sub(1),
            Action::Down => self.cursor = (self.cursor + 1).min(last),
            Action::PageUp => self.cursor = self.cursor.saturating_sub(rows),
            Action::PageDown => self.cursor = (self.cursor + rows).min(last),
            Action::First => self.cursor = 0,
            Action::Last => self.cursor = last,
            Action::Resize { width } => self.viewport_width = width,
            Action::Cancel => {
                debug!("Selection cancelled");
                self.state = SelectorState::Cancelled;
            }
            Action::Confirm => self.confirm(control)?,
        }

        Ok(&self.state)
    }

    fn confirm(&mut self, control: &dyn AudioControl) -> Result<()> {
        let Some(record) = self.sinks.get(self.cursor) else {
            debug!("Confirm on empty list, nothing to select");
            self.state = SelectorState::Cancelled;
            return Ok(());
        };

        if record.identifier.is_empty() {
            return Err(Error::MissingIdentifier {
                name: record.display_name.clone(),
            });
        }

        debug!("Confirmed {} (id {})", record.display_name, record.identifier);
        control.set_default(&record.identifier)?;
        self.state = SelectorState::Confirmed(record.clone());
        Ok(())
    }

    /// One-line summary of a terminal state, `None` while browsing
    #[must_use]
    pub fn outcome_message(&self) -> Option<String> {
        match &self.state {
            SelectorState::Browsing => None,
            SelectorState::Confirmed(record) => Some(format!("Setting {}.", record.display_name)),
            SelectorState::Cancelled => Some("Skipping for now...".to_string()),
        }
    }
}
