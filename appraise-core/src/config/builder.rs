// ============================================================================
// appraise-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// This module implements the builder pattern for the CoreConfig structure,
// providing a fluent API for creating and configuring CoreConfig instances.
// Unset fields keep the CoreConfig defaults; build() validates the result.

// ---- Standard library imports ----
use std::path::PathBuf;

// ---- Internal crate imports ----
use super::CoreConfig;
use crate::analysis::{MotionAveraging, ScoreWeights};
use crate::error::CoreResult;

/// Builder for creating CoreConfig instances.
///
/// # Examples
///
/// ```rust
/// use appraise_core::config::CoreConfigBuilder;
/// use appraise_core::MotionAveraging;
/// use std::path::PathBuf;
///
/// let config = CoreConfigBuilder::new()
///     .input_dir(PathBuf::from("/srv/timelapse/videos"))
///     .frames_dir(PathBuf::from("/srv/timelapse/frames"))
///     .motion_averaging(MotionAveraging::ConsecutivePairs)
///     .build()
///     .unwrap();
/// assert_eq!(config.sample_stride, 10);
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfigBuilder {
    config: CoreConfig,
    frames_dir_set: bool,
}

impl Default for CoreConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreConfigBuilder {
    /// Creates a new CoreConfigBuilder with default values.
    pub fn new() -> Self {
        Self {
            config: CoreConfig::default(),
            frames_dir_set: false,
        }
    }

    /// Sets the directory scanned for videos. Unless `frames_dir` is set
    /// explicitly, frames are looked up in the same directory.
    pub fn input_dir(mut self, input_dir: PathBuf) -> Self {
        if !self.frames_dir_set {
            self.config.frames_dir = input_dir.clone();
        }
        self.config.input_dir = input_dir;
        self
    }

    /// Sets the directory holding the per-date frame folders.
    pub fn frames_dir(mut self, frames_dir: PathBuf) -> Self {
        self.config.frames_dir = frames_dir;
        self.frames_dir_set = true;
        self
    }

    pub fn video_extension(mut self, extension: &str) -> Self {
        self.config.video_extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn frame_extension(mut self, extension: &str) -> Self {
        self.config.frame_extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn folder_marker(mut self, marker: &str) -> Self {
        self.config.folder_marker = marker.to_string();
        self
    }

    /// Sets the sampling interval (every Nth frame is analyzed).
    pub fn sample_stride(mut self, stride: usize) -> Self {
        self.config.sample_stride = stride;
        self
    }

    /// Sets the maximum number of ranked entries.
    pub fn top_n(mut self, top_n: usize) -> Self {
        self.config.top_n = top_n;
        self
    }

    /// Sets the maximum number of videos scored concurrently.
    pub fn concurrency_limit(mut self, limit: usize) -> Self {
        self.config.concurrency_limit = limit;
        self
    }

    pub fn weights(mut self, weights: ScoreWeights) -> Self {
        self.config.weights = weights;
        self
    }

    pub fn motion_averaging(mut self, averaging: MotionAveraging) -> Self {
        self.config.motion_averaging = averaging;
        self
    }

    /// Builds and validates the CoreConfig.
    ///
    /// # Errors
    ///
    /// * `CoreError::Config` - if a value is out of range
    pub fn build(self) -> CoreResult<CoreConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
