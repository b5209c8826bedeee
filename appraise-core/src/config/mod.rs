//! Configuration structures and constants for the appraise-core library.
//!
//! Every tunable of a ranking run lives in [`CoreConfig`]: where to look,
//! how densely to sample, how many videos to score at once and how many
//! to report. Nothing is read from ambient process state unless the caller
//! asks for it with [`CoreConfig::with_env_overrides`].

mod builder;
pub mod utils;

use crate::analysis::{MotionAveraging, ScoreWeights};
use crate::error::{CoreError, CoreResult};

use std::path::PathBuf;

pub use builder::CoreConfigBuilder;

// Default constants

/// Only every Nth extracted frame is analyzed.
pub const DEFAULT_SAMPLE_STRIDE: usize = 10;

/// Number of entries in the final ranking.
pub const DEFAULT_TOP_N: usize = 10;

/// Extension of the video files that identify candidates.
pub const DEFAULT_VIDEO_EXTENSION: &str = "mp4";

/// Extension of the extracted frame images.
pub const DEFAULT_FRAME_EXTENSION: &str = "jpg";

/// Directory-name marker of a dated timelapse capture.
pub const DEFAULT_FOLDER_MARKER: &str = "sunset-timelapse";

// Environment variables read by `CoreConfig::with_env_overrides`

pub const ENV_FRAMES_DIR: &str = "APPRAISE_FRAMES_DIR";
pub const ENV_SAMPLE_STRIDE: &str = "APPRAISE_SAMPLE_STRIDE";
pub const ENV_TOP_N: &str = "APPRAISE_TOP_N";
pub const ENV_JOBS: &str = "APPRAISE_JOBS";
pub const ENV_MOTION_AVERAGING: &str = "APPRAISE_MOTION_AVERAGING";

/// Number of scoring jobs run at once when nothing else is configured:
/// one per available processing unit.
#[must_use]
pub fn default_concurrency() -> usize {
    std::thread::available_parallelism().map_or(1, |n| n.get())
}

/// Main configuration structure for the appraise-core library.
///
/// # Examples
///
/// ```rust
/// use appraise_core::config::CoreConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = CoreConfigBuilder::new()
///     .input_dir(PathBuf::from("/srv/timelapse"))
///     .sample_stride(5)
///     .top_n(3)
///     .concurrency_limit(2)
///     .build()
///     .unwrap();
/// assert_eq!(config.top_n, 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CoreConfig {
    /// Root of the tree scanned for videos
    pub input_dir: PathBuf,

    /// Directory holding the per-date frame folders
    pub frames_dir: PathBuf,

    /// Video file extension, matched case-insensitively
    pub video_extension: String,

    /// Frame image extension, matched case-insensitively
    pub frame_extension: String,

    /// Directory-name marker used to find a video's date folder
    pub folder_marker: String,

    /// Analyze every Nth frame
    pub sample_stride: usize,

    /// Maximum number of ranked entries
    pub top_n: usize,

    /// Maximum number of videos scored at the same time
    pub concurrency_limit: usize,

    pub weights: ScoreWeights,

    pub motion_averaging: MotionAveraging,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            frames_dir: PathBuf::from("."),
            video_extension: DEFAULT_VIDEO_EXTENSION.to_string(),
            frame_extension: DEFAULT_FRAME_EXTENSION.to_string(),
            folder_marker: DEFAULT_FOLDER_MARKER.to_string(),
            sample_stride: DEFAULT_SAMPLE_STRIDE,
            top_n: DEFAULT_TOP_N,
            concurrency_limit: default_concurrency(),
            weights: ScoreWeights::default(),
            motion_averaging: MotionAveraging::default(),
        }
    }
}

impl CoreConfig {
    /// Default configuration scanning `input_dir`, with frames looked up
    /// in the same directory.
    pub fn new(input_dir: PathBuf) -> Self {
        Self {
            frames_dir: input_dir.clone(),
            input_dir,
            ..Self::default()
        }
    }

    /// Applies `APPRAISE_*` environment variables on top of this configuration.
    ///
    /// Unset or unparsable numeric variables leave the field unchanged. An
    /// unknown motion averaging name is an error.
    pub fn with_env_overrides(mut self) -> CoreResult<Self> {
        self.frames_dir = utils::get_env_path(ENV_FRAMES_DIR, self.frames_dir);
        self.sample_stride = utils::get_env_usize(ENV_SAMPLE_STRIDE, self.sample_stride);
        self.top_n = utils::get_env_usize(ENV_TOP_N, self.top_n);
        self.concurrency_limit = utils::get_env_usize(ENV_JOBS, self.concurrency_limit);
        if let Some(value) = utils::get_env_opt(ENV_MOTION_AVERAGING) {
            self.motion_averaging = value.parse()?;
        }
        Ok(self)
    }

    /// Checks that the configuration can drive a ranking run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.sample_stride == 0 {
            return Err(CoreError::Config("sample stride must be at least 1".to_string()));
        }
        if self.top_n == 0 {
            return Err(CoreError::Config("top N must be at least 1".to_string()));
        }
        if self.concurrency_limit == 0 {
            return Err(CoreError::Config("concurrency limit must be at least 1".to_string()));
        }
        if self.video_extension.is_empty() || self.frame_extension.is_empty() {
            return Err(CoreError::Config("file extensions must not be empty".to_string()));
        }
        if self.folder_marker.is_empty() {
            return Err(CoreError::Config("folder marker must not be empty".to_string()));
        }

        let ScoreWeights { colorfulness, motion, contrast } = self.weights;
        if [colorfulness, motion, contrast]
            .iter()
            .any(|w| !w.is_finite() || *w < 0.0)
        {
            return Err(CoreError::Config(format!(
                "score weights must be finite and non-negative, got {:?}",
                self.weights
            )));
        }

        Ok(())
    }
}
