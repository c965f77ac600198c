use std::fmt;
use std::process::ExitCode;

use crate::domain::errors::{DataSourceError, StoreError};

/// Exit code for failures without a more specific code
pub const EXIT_FAILURE: u8 = 1;
/// Exit code for bad arguments or unmet preconditions
pub const EXIT_USAGE: u8 = 2;
/// Exit code for an unusable catalog
pub const EXIT_DATA_SOURCE: u8 = 3;
/// Exit code for an unreadable or unwritable team store
pub const EXIT_STORE: u8 = 4;

/// Command error with exit code and message
#[derive(Debug, PartialEq, Eq)]
pub struct CliError {
    pub code: u8,
    pub message: String,
}

impl CliError {
    /// Creates a new command error
    pub fn new(code: u8, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Creates a usage error (bad argument, failed precondition)
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(EXIT_USAGE, message)
    }

    /// Creates a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(EXIT_FAILURE, message)
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<DataSourceError> for CliError {
    fn from(err: DataSourceError) -> Self {
        Self::new(EXIT_DATA_SOURCE, err.to_string())
    }
}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        Self::new(EXIT_STORE, err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::new(EXIT_FAILURE, format!("Failed to write output: {}", err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(EXIT_FAILURE, format!("Failed to encode output: {}", err))
    }
}
