//! Frame statistics and per-video scoring.

/// Colorfulness, contrast and motion of a single frame
pub mod stats;

/// Strided sampling and aggregation into one score per video
pub mod scorer;

pub use scorer::{MotionAveraging, ScoreWeights, Scorer, VideoScore, VideoScorer};
pub use stats::{FrameStats, GrayscaleBuffer, compute_frame_stats, luminance, saturation};
