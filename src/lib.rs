//! `WPSEL` - `WirePlumber` sink selector
//!
//! Lists the audio sinks reported by `wpctl status`, lets the user pick one
//! in the terminal, and makes it the default with `wpctl set-default`.
//!
//! # Layout
//! - [`parser`]: `wpctl status` text to [`parser::SinkRecord`]s
//! - [`selector`]: the browsing/confirmed/cancelled state machine
//! - [`wpctl`]: the [`wpctl::AudioControl`] seam and its `wpctl` runner
//! - `tui`: ratatui rendering and the event loop (feature `tui`)

pub mod cli;
pub mod commands;
pub mod error;
pub mod parser;
pub mod selector;
pub mod style;
pub mod wpctl;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types for convenience
pub use cli::Args;
pub use error::Error;
pub use parser::{SinkRecord, parse_sinks};
pub use selector::{Selector, SelectorConfig, SelectorState};
