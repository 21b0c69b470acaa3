//! Shared CLI error type and exit codes.

use std::fmt;

/// Process exit codes used by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed.
    Success = 0,
    /// Bad input: malformed hex, bad palette or config, invalid arguments.
    Validation = 1,
    /// Filesystem failure.
    Io = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by command handlers, carrying its exit code.
#[derive(Debug)]
pub struct CliError {
    /// Exit code the process should terminate with.
    pub kind: ExitCode,
    /// Human-readable message printed to stderr.
    pub message: String,
}

impl CliError {
    /// Input validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// Filesystem failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Classifies a generator error by its root cause.
    ///
    /// `std::io::Error` anywhere in the chain maps to [`ExitCode::Io`];
    /// everything else is treated as bad input.
    pub fn from_generator(context: &str, err: &anyhow::Error) -> Self {
        let message = format!("{context}: {err:#}");
        if err.chain().any(|cause| cause.is::<std::io::Error>()) {
            Self::io(message)
        } else {
            Self::validation(message)
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;
