//! Core library for ranking timelapse videos by visual interest.
//!
//! Each video is represented by a folder of frames extracted beforehand.
//! Every Nth frame is sampled and measured for colorfulness, contrast and
//! motion; the per-video averages are combined into one score and the best
//! videos are returned, highest score first.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use appraise_core::{CoreConfig, rank_directory};
//! use std::path::PathBuf;
//!
//! let mut config = CoreConfig::new(PathBuf::from("/srv/timelapse"));
//! config.frames_dir = PathBuf::from("/srv/timelapse/frames");
//! config.top_n = 5;
//! config.validate().unwrap();
//!
//! let ranking = rank_directory(&config).unwrap();
//! for (i, entry) in ranking.entries.iter().enumerate() {
//!     println!("[{}] {} {:.3}", i + 1, entry.path.display(), entry.score);
//! }
//! ```

pub mod analysis;
pub mod config;
pub mod discovery;
pub mod error;
pub mod frames;
pub mod ranking;
pub mod report;
pub mod utils;

// Re-exports for public API
pub use analysis::{
    FrameStats, MotionAveraging, ScoreWeights, Scorer, VideoScore, VideoScorer, compute_frame_stats,
};
pub use config::{CoreConfig, CoreConfigBuilder};
pub use discovery::find_videos;
pub use error::{CoreError, CoreResult};
pub use frames::{DateFolderSource, FrameDecoder, FrameSource, ImageDecoder, MemoryFrames, PixelGrid};
pub use ranking::{Ranking, ScoringFailure, ScoringOrchestrator, rank_top, sort_by_score};
pub use utils::{format_duration, format_elapsed};

use std::sync::Arc;

/// Builds the on-disk scorer described by `config`: frames from date folders
/// under `frames_dir`, decoded with the `image` crate.
pub fn disk_scorer(config: &CoreConfig) -> VideoScorer<DateFolderSource, ImageDecoder> {
    VideoScorer::from_config(DateFolderSource::from_config(config), ImageDecoder, config)
}

/// Discovers every video under `config.input_dir` and ranks them.
///
/// # Errors
///
/// * `CoreError::Config` - the configuration does not validate
/// * `CoreError::Enumeration` - the input directory cannot be walked
pub fn rank_directory(config: &CoreConfig) -> CoreResult<Ranking> {
    rank_directory_with_progress(config, |_, _| {})
}

/// Like [`rank_directory`], calling `on_progress(completed, total)` after
/// each video.
pub fn rank_directory_with_progress<F>(config: &CoreConfig, on_progress: F) -> CoreResult<Ranking>
where
    F: Fn(usize, usize) + Send + Sync + 'static,
{
    config.validate()?;

    let videos = find_videos(&config.input_dir, &config.video_extension)?;
    log::info!("Found {} videos in {}", videos.len(), config.input_dir.display());

    ScoringOrchestrator::from_config(Arc::new(disk_scorer(config)), config)
        .on_progress(on_progress)
        .rank(&videos)
}
