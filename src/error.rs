//! Domain errors
//!
//! Every variant is fatal: nothing in `wpsel` is retried. The binary wraps
//! these in `color_eyre` reports for display.

use std::io;
use std::process::ExitStatus;

/// Errors raised while querying the audio server or parsing its output
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The external command could not be spawned at all
    #[error("failed to execute '{command}'")]
    CommandExecution {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The external command ran but exited unsuccessfully
    #[error("'{command}' exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    /// No `Sinks:` header in the status output
    #[error("no 'Sinks:' section found in wpctl status output")]
    SectionNotFound,

    /// A line inside the sinks section did not have the expected shape
    #[error("malformed sink line {line_number}: '{line}'")]
    MalformedSinkLine { line_number: usize, line: String },

    /// The chosen sink was listed without a numeric id
    #[error("sink '{name}' has no identifier, cannot set it as default")]
    MissingIdentifier { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
