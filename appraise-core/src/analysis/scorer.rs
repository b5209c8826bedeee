//! Per-video scoring: strided sampling folded through the frame statistics.

use super::stats::{FrameStats, GrayscaleBuffer, compute_frame_stats};
use crate::config::{CoreConfig, DEFAULT_SAMPLE_STRIDE};
use crate::error::{CoreError, CoreResult};
use crate::frames::{FrameDecoder, FrameSource};

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Weights applied to the averaged statistics to form the final score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub colorfulness: f64,
    pub motion: f64,
    pub contrast: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            colorfulness: 3.0,
            motion: 1.5,
            contrast: 1.0,
        }
    }
}

impl ScoreWeights {
    #[must_use]
    pub fn combine(&self, stats: &FrameStats) -> f64 {
        self.colorfulness * stats.colorfulness + self.motion * stats.motion + self.contrast * stats.contrast
    }
}

/// How the motion sum is turned into an average.
///
/// The first sample of a video has no predecessor and contributes 0 motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionAveraging {
    /// Divide by every processed sample, first one included.
    #[default]
    AllSamples,
    /// Divide only by samples that had a predecessor to compare against.
    ConsecutivePairs,
}

impl FromStr for MotionAveraging {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" | "all-samples" | "all_samples" => Ok(Self::AllSamples),
            "pairs" | "consecutive-pairs" | "consecutive_pairs" => Ok(Self::ConsecutivePairs),
            other => Err(CoreError::Config(format!(
                "Unknown motion averaging '{other}' (expected 'all' or 'pairs')"
            ))),
        }
    }
}

/// Aggregate score of one video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoScore {
    pub path: PathBuf,
    pub score: f64,
    /// Averages over the processed samples
    pub details: FrameStats,
    /// Number of sampled frames that decoded and were scored
    pub samples: usize,
}

/// Anything that can score a single video. The ranking orchestrator runs one
/// of these per video on its worker pool.
pub trait Scorer: Send + Sync {
    fn score_video(&self, video: &Path) -> CoreResult<VideoScore>;
}

#[derive(Debug, Clone, Copy, Default)]
struct StatsAccumulator {
    colorfulness: f64,
    contrast: f64,
    motion: f64,
    samples: usize,
    motion_samples: usize,
}

impl StatsAccumulator {
    fn add(&mut self, stats: &FrameStats, had_predecessor: bool) {
        self.colorfulness += stats.colorfulness;
        self.contrast += stats.contrast;
        self.motion += stats.motion;
        self.samples += 1;
        if had_predecessor {
            self.motion_samples += 1;
        }
    }

    fn averages(&self, averaging: MotionAveraging) -> Option<FrameStats> {
        if self.samples == 0 {
            return None;
        }
        let samples = self.samples as f64;
        let motion = match averaging {
            MotionAveraging::AllSamples => self.motion / samples,
            MotionAveraging::ConsecutivePairs if self.motion_samples == 0 => 0.0,
            MotionAveraging::ConsecutivePairs => self.motion / self.motion_samples as f64,
        };
        Some(FrameStats {
            colorfulness: self.colorfulness / samples,
            contrast: self.contrast / samples,
            motion,
        })
    }
}

/// Scores a video from every `sample_stride`-th frame of its frame sequence.
///
/// Samples are processed strictly in order; motion compares each sample
/// with the last sample that decoded successfully.
#[derive(Debug, Clone)]
pub struct VideoScorer<S, D> {
    source: S,
    decoder: D,
    sample_stride: usize,
    weights: ScoreWeights,
    motion_averaging: MotionAveraging,
}

impl<S: FrameSource, D: FrameDecoder> VideoScorer<S, D> {
    pub fn new(source: S, decoder: D) -> Self {
        Self {
            source,
            decoder,
            sample_stride: DEFAULT_SAMPLE_STRIDE,
            weights: ScoreWeights::default(),
            motion_averaging: MotionAveraging::default(),
        }
    }

    pub fn from_config(source: S, decoder: D, config: &CoreConfig) -> Self {
        Self::new(source, decoder)
            .sample_stride(config.sample_stride)
            .weights(config.weights)
            .motion_averaging(config.motion_averaging)
    }

    /// Sets the sampling interval. A stride of 0 is treated as 1.
    pub fn sample_stride(mut self, stride: usize) -> Self {
        self.sample_stride = stride.max(1);
        self
    }

    pub fn weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn motion_averaging(mut self, averaging: MotionAveraging) -> Self {
        self.motion_averaging = averaging;
        self
    }

    /// Scores one video.
    ///
    /// # Errors
    ///
    /// * `CoreError::NoFramesFound` - the source listed no frames or failed
    /// * `CoreError::NoValidFrames` - no sampled frame could be scored
    pub fn score(&self, video: &Path) -> CoreResult<VideoScore> {
        let name = video.display().to_string();

        let frames = match self.source.frame_paths(video) {
            Ok(frames) => frames,
            Err(e) => {
                debug!("Could not resolve frames for {name}: {e}");
                return Err(CoreError::NoFramesFound(name));
            }
        };
        if frames.is_empty() {
            return Err(CoreError::NoFramesFound(name));
        }

        let (totals, _) = frames.iter().step_by(self.sample_stride).fold(
            (StatsAccumulator::default(), None::<GrayscaleBuffer>),
            |(mut totals, previous), frame_path| match self.analyze_sample(frame_path, previous.as_ref()) {
                Ok((stats, gray, had_predecessor)) => {
                    totals.add(&stats, had_predecessor);
                    (totals, Some(gray))
                }
                Err(e) => {
                    if e.is_sample_skip() {
                        debug!("Skipping sample {}: {e}", frame_path.display());
                    } else {
                        warn!("Failed to read sample {}: {e}", frame_path.display());
                    }
                    (totals, previous)
                }
            },
        );

        let details = totals
            .averages(self.motion_averaging)
            .ok_or_else(|| CoreError::NoValidFrames(name.clone()))?;
        let score = self.weights.combine(&details);

        debug!(
            "Scored {name}: {score:.3} from {} of {} frames",
            totals.samples,
            frames.len()
        );

        Ok(VideoScore {
            path: video.to_path_buf(),
            score,
            details,
            samples: totals.samples,
        })
    }

    fn analyze_sample(
        &self,
        frame_path: &Path,
        previous: Option<&GrayscaleBuffer>,
    ) -> CoreResult<(FrameStats, GrayscaleBuffer, bool)> {
        let frame = self.decoder.decode(frame_path)?;
        if frame.is_empty() {
            return Err(CoreError::InvalidFrame(frame_path.display().to_string()));
        }

        let previous = previous.filter(|prev| {
            let same_size = prev.matches(&frame);
            if !same_size {
                warn!(
                    "Frame size changed to {}x{} at {}, motion restarts",
                    frame.width(),
                    frame.height(),
                    frame_path.display()
                );
            }
            same_size
        });

        let (stats, gray) = compute_frame_stats(&frame, previous)?;
        trace!(
            "{}: color {:.4} contrast {:.4} motion {:.4}",
            frame_path.display(),
            stats.colorfulness,
            stats.contrast,
            stats.motion
        );

        Ok((stats, gray, previous.is_some()))
    }
}

impl<S: FrameSource, D: FrameDecoder> Scorer for VideoScorer<S, D> {
    fn score_video(&self, video: &Path) -> CoreResult<VideoScore> {
        self.score(video)
    }
}
