// ============================================================================
// appraise-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger backend for the `log` macros used everywhere
//
// RUST_LOG wins when set:
// - RUST_LOG=info (default): run start/end
// - RUST_LOG=debug (or --verbose): per-video scores and skipped videos
// - RUST_LOG=trace: per-sample statistics

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// Level used when RUST_LOG is not set.
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes the global logger. Log lines go to stderr so that stdout
/// carries only the report.
pub fn init_logging(verbose: bool) {
    let env = Env::default().default_filter_or(default_level(verbose).as_str());

    Builder::from_env(env)
        .format(|buf, record| {
            let level = match record.level() {
                log::Level::Error => "ERROR",
                log::Level::Warn => "WARN ",
                log::Level::Info => "INFO ",
                log::Level::Debug => "DEBUG",
                log::Level::Trace => "TRACE",
            };
            writeln!(buf, "{} {} {}", buf.timestamp(), level, record.args())
        })
        .init();

    log::debug!("Logger initialized with level: {}", default_level(verbose));
}
