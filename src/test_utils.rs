//! Shared fixtures for unit tests

use crate::error::{Error, Result};
use crate::parser::SinkRecord;
use crate::wpctl::AudioControl;
use std::cell::RefCell;

/// Build a record the way the parser would
pub(crate) fn sink(display_name: &str, identifier: &str) -> SinkRecord {
    SinkRecord {
        display_name: display_name.to_string(),
        identifier: identifier.to_string(),
        volume: "vol: 1.00".to_string(),
        is_default: display_name.starts_with(crate::parser::DEFAULT_MARKER),
    }
}

/// `n` numbered sinks with ids starting at 40
pub(crate) fn sinks(n: usize) -> Vec<SinkRecord> {
    (0..n)
        .map(|i| sink(&format!("Sink {i}"), &(40 + i).to_string()))
        .collect()
}

/// `AudioControl` fake that records `set_default` calls
#[derive(Default)]
pub(crate) struct RecordingControl {
    status: String,
    fail: bool,
    applied: RefCell<Vec<String>>,
}

impl RecordingControl {
    pub fn with_status(status: &str) -> Self {
        Self {
            status: status.to_string(),
            ..Self::default()
        }
    }

    /// Every call fails as if `wpctl` exited with status 1
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn applied(&self) -> Vec<String> {
        self.applied.borrow().clone()
    }

    fn failure(command: &str) -> Error {
        use std::os::unix::process::ExitStatusExt;
        Error::CommandFailed {
            command: command.to_string(),
            status: std::process::ExitStatus::from_raw(1 << 8),
            stderr: "simulated failure".to_string(),
        }
    }
}

impl AudioControl for RecordingControl {
    fn status(&self) -> Result<String> {
        if self.fail {
            return Err(Self::failure("wpctl status"));
        }
        Ok(self.status.clone())
    }

    fn set_default(&self, identifier: &str) -> Result<()> {
        if self.fail {
            return Err(Self::failure("wpctl set-default"));
        }
        self.applied.borrow_mut().push(identifier.to_string());
        Ok(())
    }
}
