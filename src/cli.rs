//! Command-line interface definitions
//!
//! Uses clap for argument parsing with derive macros.

use crate::selector::{DEFAULT_VISIBLE_ROWS, SelectorConfig};
use crate::wpctl::DEFAULT_PROGRAM;
use clap::{Parser, Subcommand};

/// WPSEL - WirePlumber sink selector
///
/// Pick the default audio output from a list in the terminal.
#[derive(Parser, Debug)]
#[command(name = "wpsel")]
#[command(version)]
#[command(about = "WirePlumber sink selector - pick the default audio output from the terminal")]
#[command(after_help = "\
KEYS:
  up/k, down/j           Move the cursor
  left/h, right/l        Previous / next page (also PgUp/PgDn)
  home/g, end/G          First / last sink
  enter                  Set the highlighted sink as default
  q, esc, ctrl+c         Quit without changing anything

WIREPLUMBER INTEGRATION:
  Sinks are read from 'wpctl status'; the choice is applied with
  'wpctl set-default <id>'. The current default is marked with '*'.")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Number of sinks shown per page
    #[arg(long, value_name = "N", default_value_t = DEFAULT_VISIBLE_ROWS as u16,
          value_parser = clap::value_parser!(u16).range(1..))]
    pub rows: u16,

    /// Fixed item width in columns (defaults to the terminal width)
    #[arg(long, value_name = "COLUMNS")]
    pub width: Option<u16>,

    /// Use the terminal's default colors
    #[arg(long)]
    pub no_color: bool,

    /// wpctl program to run
    #[arg(long, global = true, value_name = "PROGRAM", default_value = DEFAULT_PROGRAM)]
    pub wpctl: String,
}

impl Args {
    /// Picker layout requested on the command line
    #[must_use]
    pub fn selector_config(&self) -> SelectorConfig {
        SelectorConfig {
            visible_rows: usize::from(self.rows),
            item_width: self.width,
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the parsed sinks and exit
    List {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}
