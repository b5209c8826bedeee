// appraise-cli/src/lib.rs
//
// Library portion of the Appraise CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;
pub mod progress;

// Re-export items needed by the binary or integration tests
pub use cli::Cli;
pub use commands::rank::{build_config, run_rank};
pub use error::{CliErrorContext, CliResult};
pub use logging::init_logging;
