//! `wpctl status` parser
//!
//! The status report is a tree drawn with box characters. The audio section
//! comes first and looks like:
//!
//! ```text
//! Audio
//!  ├─ Devices:
//!  │      42. Built-in Audio                      [alsa]
//!  │
//!  ├─ Sinks:
//!  │  *   46. Built-in Audio Analog Stereo        [vol: 0.40]
//!  │      51. USB Headset                         [vol: 1.00 MUTED]
//!  │
//!  ├─ Sources:
//! ```
//!
//! Only the first `Sinks:` block is read. The video section has its own
//! `Sinks:` header further down and is never reached.

use crate::error::{Error, Result};
use crate::wpctl::AudioControl;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Box-drawing characters `wpctl` uses for indentation
const TREE_GLYPHS: [char; 4] = ['├', '─', '│', '└'];

/// Header that opens the sinks block
const SINKS_HEADER: &str = "Sinks:";

/// Marker `wpctl` puts in front of the current default
pub const DEFAULT_MARKER: &str = "*";

static SINK_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<current>\*?)\s*(?P<num>[0-9]*)\. (?P<name>.*)\[(?P<vol>.*)\]")
        .expect("sink line pattern is a valid regex")
});

/// One audio sink as listed by `wpctl status`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkRecord {
    /// Sink name, prefixed with `*` when it is the current default
    pub display_name: String,
    /// Node id passed to `wpctl set-default`; empty if none was printed
    pub identifier: String,
    /// Bracketed volume text, e.g. `vol: 0.40 MUTED`
    pub volume: String,
    pub is_default: bool,
}

impl SinkRecord {
    /// Sink name without the default marker
    #[must_use]
    pub fn name(&self) -> &str {
        if self.is_default {
            self.display_name
                .strip_prefix(DEFAULT_MARKER)
                .unwrap_or(&self.display_name)
        } else {
            &self.display_name
        }
    }
}

/// Remove the tree-drawing glyphs from the whole report
fn strip_tree_glyphs(raw: &str) -> String {
    raw.chars().filter(|c| !TREE_GLYPHS.contains(c)).collect()
}

/// Parse one trimmed line from the sinks block
fn parse_sink_line(line: &str) -> Option<SinkRecord> {
    let caps = SINK_LINE.captures(line)?;
    let current = caps.name("current").map_or("", |m| m.as_str());
    let num = caps.name("num").map_or("", |m| m.as_str());
    let name = caps.name("name").map_or("", |m| m.as_str()).trim();
    let vol = caps.name("vol").map_or("", |m| m.as_str());

    let mut display_name = String::with_capacity(current.len() + name.len());
    display_name.push_str(current);
    display_name.push_str(name);

    Some(SinkRecord {
        display_name,
        identifier: num.to_string(),
        volume: vol.trim().to_string(),
        is_default: !current.is_empty(),
    })
}

/// Extract the sinks from a raw `wpctl status` report
///
/// # Errors
/// - [`Error::SectionNotFound`] if no line contains `Sinks:`
/// - [`Error::MalformedSinkLine`] if a line in the block does not match the
///   expected `[*] <id>. <name> [<volume>]` shape
pub fn parse_sinks(raw: &str) -> Result<Vec<SinkRecord>> {
    let cleaned = strip_tree_glyphs(raw);
    let lines: Vec<&str> = cleaned.lines().collect();

    let header = lines
        .iter()
        .position(|line| line.contains(SINKS_HEADER))
        .ok_or(Error::SectionNotFound)?;

    let mut sinks = Vec::new();
    for (offset, line) in lines[header + 1..].iter().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        trace!("Sink line: {line}");

        let record = parse_sink_line(line).ok_or_else(|| Error::MalformedSinkLine {
            line_number: header + offset + 2,
            line: line.to_string(),
        })?;
        sinks.push(record);
    }

    debug!("Parsed {} sinks", sinks.len());
    Ok(sinks)
}

/// Query the audio server and parse its sinks
///
/// # Errors
/// Propagates command failures from `control` and parse errors from
/// [`parse_sinks`].
pub fn fetch_sinks(control: &dyn AudioControl) -> Result<Vec<SinkRecord>> {
    let raw = control.status()?;
    let sinks = parse_sinks(&raw)?;
    for sink in &sinks {
        debug!(id = %sink.identifier, name = %sink.display_name, "sink");
    }
    Ok(sinks)
}
