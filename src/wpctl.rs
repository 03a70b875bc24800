//! `WirePlumber` integration
//!
//! Audio server access goes through the `wpctl` command line tool:
//! - `wpctl status`: human-readable overview, parsed by [`crate::parser`]
//! - `wpctl set-default <id>`: make a node the default sink
//!
//! Calls are blocking with no timeout. A hung `wpctl` hangs the picker.

use crate::error::{Error, Result};
use std::process::{Command, Output};
use tracing::{debug, info, trace};

/// Program name used when no override is given on the command line
pub const DEFAULT_PROGRAM: &str = "wpctl";

/// Access to the audio server's status report and default-sink control
///
/// The picker only ever needs these two operations. Tests substitute a
/// recording implementation so no real audio server is touched.
pub trait AudioControl {
    /// Return the raw `status` report
    ///
    /// # Errors
    /// Returns an error if the command cannot run or exits non-zero.
    fn status(&self) -> Result<String>;

    /// Make the sink with `identifier` the default
    ///
    /// # Errors
    /// Returns an error if the command cannot run or exits non-zero.
    fn set_default(&self, identifier: &str) -> Result<()>;
}

/// `wpctl` command runner
#[derive(Debug, Clone)]
pub struct Wpctl {
    program: String,
}

impl Default for Wpctl {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl Wpctl {
    /// Create a runner for `program` (looked up in `PATH` unless it is a path)
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run the program with `args`, failing on spawn errors and non-zero exit
    fn run(&self, args: &[&str]) -> Result<Output> {
        let command = self.describe(args);
        trace!("Running {command}");

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| Error::CommandExecution {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::CommandFailed {
                command,
                status: output.status,
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(output)
    }

    fn describe(&self, args: &[&str]) -> String {
        let mut command = self.program.clone();
        for arg in args {
            command.push(' ');
            command.push_str(arg);
        }
        command
    }
}

impl AudioControl for Wpctl {
    fn status(&self) -> Result<String> {
        let output = self.run(&["status"])?;
        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!("{} status returned {} bytes", self.program, text.len());
        Ok(text)
    }

    fn set_default(&self, identifier: &str) -> Result<()> {
        self.run(&["set-default", identifier])?;
        info!("Set default sink: {identifier}");
        Ok(())
    }
}
