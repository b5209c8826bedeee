//! Error types for the appraise-core library.
//!
//! Per-sample errors (`Decode`, `InvalidFrame`) are absorbed by the video
//! scorer, per-video errors (`NoFramesFound`, `NoValidFrames`) by the ranking
//! orchestrator. Everything else ends the run.

use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for appraise-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to enumerate videos: {0}")]
    Enumeration(String),

    #[error("No frames found for {0}")]
    NoFramesFound(String),

    #[error("No valid frames in {0}")]
    NoValidFrames(String),

    #[error("Failed to decode frame {path}: {message}")]
    Decode { path: PathBuf, message: String },

    #[error("Invalid frame: {0}")]
    InvalidFrame(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

impl CoreError {
    /// True for the errors that drop a single video from a ranking run.
    #[must_use]
    pub fn is_video_skip(&self) -> bool {
        matches!(self, CoreError::NoFramesFound(_) | CoreError::NoValidFrames(_))
    }

    /// True for the errors that drop a single sampled frame.
    #[must_use]
    pub fn is_sample_skip(&self) -> bool {
        matches!(self, CoreError::Decode { .. } | CoreError::InvalidFrame(_))
    }
}

/// Result type for appraise-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
