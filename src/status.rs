//! Exit status codes for the CLI
//!
//! nvmc follows standard Unix exit code conventions:
//! - 0: Success (including an explicit `-h` help request)
//! - 1: Any startup error (parse failure, missing required options, bad paths)

use std::process::{ExitCode, Termination};

/// Exit status codes following standard Unix conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Successful startup, or help was requested
    Success = 0,
    /// Any startup error
    Error = 1,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}
