// ============================================================================
// appraise-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types and utilities for the CLI
//
// The CLI reuses CoreError so that every failure reaching main() has one
// shape: a message for stderr and exit code 1.

// ---- Internal crate imports ----
use appraise_core::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::fmt;

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Extension trait for adding context to errors in the CLI.
///
/// Configuration errors keep their kind so the message still reads as an
/// invalid configuration; everything else becomes `OperationFailed`.
pub trait CliErrorContext<T> {
    /// Add context to an error.
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display;

    /// Add context using a closure (for lazy evaluation).
    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

fn wrap(context: impl fmt::Display, error: CoreError) -> CoreError {
    match error {
        CoreError::Config(msg) => CoreError::Config(format!("{context}: {msg}")),
        other => CoreError::OperationFailed(format!("{context}: {other}")),
    }
}

impl<T, E> CliErrorContext<T> for Result<T, E>
where
    E: Into<CoreError>,
{
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| wrap(context, e.into()))
    }

    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| wrap(f(), e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_keeps_config_kind() {
        let result: CoreResult<()> = Err(CoreError::Config("top N must be at least 1".into()));
        let err = result.cli_context("Invalid settings").unwrap_err();
        assert!(matches!(err, CoreError::Config(ref msg) if msg.starts_with("Invalid settings: ")));
    }

    #[test]
    fn test_context_wraps_io() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::other("disk gone"));
        let err = result.cli_with_context(|| "Failed to write report").unwrap_err();
        assert_eq!(err.to_string(), "Operation failed: Failed to write report: IO error: disk gone");
    }
}
