//! CLI commands
//!
//! `pick` runs the interactive selector, `list_sinks` prints what the parser
//! sees without touching the terminal mode.

use color_eyre::eyre::{Context, Result};
use crossterm::style::Stylize;
use serde::Serialize;
use std::fmt::Write;

use crate::parser::{SinkRecord, fetch_sinks};
use crate::style::WpselStyle;
use crate::wpctl::AudioControl;

// ============================================================================
// JSON Output Structures (for list --json)
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ListSinksJson {
    pub sinks: Vec<SinkJson>,
    pub current_default: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SinkJson {
    pub id: String,
    pub name: String,
    pub volume: String,
    pub is_default: bool,
}

impl From<&SinkRecord> for SinkJson {
    fn from(sink: &SinkRecord) -> Self {
        Self {
            id: sink.identifier.clone(),
            name: sink.name().to_string(),
            volume: sink.volume.clone(),
            is_default: sink.is_default,
        }
    }
}

/// Query sinks, attaching the command context to any failure
fn load_sinks(control: &dyn AudioControl) -> Result<Vec<SinkRecord>> {
    fetch_sinks(control).wrap_err("Failed to read sinks from 'wpctl status'")
}

/// Render the human-readable sink listing
fn format_sink_list(sinks: &[SinkRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "SINKS:".header());
    if sinks.is_empty() {
        let _ = writeln!(out, "  {}", "(none)".dim());
        return out;
    }

    let id_width = sinks.iter().map(|s| s.identifier.len()).max().unwrap_or(0);
    for sink in sinks {
        let marker = if sink.is_default { "*" } else { " " };
        let name = if sink.is_default {
            sink.name().success().bold().to_string()
        } else {
            sink.name().to_string()
        };
        let _ = writeln!(
            out,
            "{marker} {}  {}  {}",
            format!("{:>id_width$}", sink.identifier).technical(),
            name,
            sink.volume.as_str().secondary(),
        );
    }
    out
}

/// Print the sinks `wpctl status` reports
///
/// # Errors
/// Returns an error if `wpctl status` fails, its output cannot be parsed, or
/// JSON serialization fails.
pub fn list_sinks(control: &dyn AudioControl, json_output: bool) -> Result<()> {
    let sinks = load_sinks(control)?;

    if json_output {
        let output = ListSinksJson {
            sinks: sinks.iter().map(SinkJson::from).collect(),
            current_default: sinks
                .iter()
                .find(|s| s.is_default)
                .map(|s| s.identifier.clone()),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialize sinks")?
        );
    } else {
        print!("{}", format_sink_list(&sinks));
    }

    Ok(())
}

/// Run the interactive picker and report the outcome on stdout
///
/// # Errors
/// Returns an error if the sinks cannot be read, the terminal fails, or
/// `wpctl set-default` fails.
#[cfg(feature = "tui")]
pub fn pick(
    control: &dyn AudioControl,
    config: crate::selector::SelectorConfig,
    theme: crate::style::Theme,
) -> Result<()> {
    let sinks = load_sinks(control)?;
    let state = crate::tui::run(sinks, config, theme, control)?;

    match state {
        crate::selector::SelectorState::Confirmed(record) => {
            println!("Setting {}.", record.display_name.as_str().success());
        }
        _ => println!("{}", "Skipping for now...".dim()),
    }
    Ok(())
}
