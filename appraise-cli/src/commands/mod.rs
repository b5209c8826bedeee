//! Command implementations for the CLI.

/// Module containing the ranking run: configuration, scoring and report.
pub mod rank;
