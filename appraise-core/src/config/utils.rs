//! Configuration utility functions
//!
//! This module provides helper functions for working with
//! environment variables and configuration values.

use std::path::PathBuf;

/// Get a non-empty string value from an environment variable
pub fn get_env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|val| !val.trim().is_empty())
}

/// Get a path value from an environment variable or use the default
pub fn get_env_path(key: &str, default: PathBuf) -> PathBuf {
    get_env_opt(key).map(PathBuf::from).unwrap_or(default)
}

/// Get a usize value from an environment variable or use the default
pub fn get_env_usize(key: &str, default: usize) -> usize {
    match get_env_opt(key) {
        Some(val) => val.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring {key}={val}: not a whole number");
            default
        }),
        None => default,
    }
}
