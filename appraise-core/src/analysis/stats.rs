//! Per-frame visual statistics: colorfulness, contrast and motion.
//!
//! Motion needs the grayscale version of the previous sampled frame, so
//! [`compute_frame_stats`] hands back the buffer it builds for the caller to
//! pass into the next call.

use crate::error::{CoreError, CoreResult};
use crate::frames::PixelGrid;

use serde::{Deserialize, Serialize};

/// ITU-R BT.601 luma weights.
pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Visual statistics of one frame, or their averages over a video.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameStats {
    /// Mean per-pixel saturation, in `[0, 1]`
    pub colorfulness: f64,
    /// Standard deviation of luminance
    pub contrast: f64,
    /// Mean squared luminance change against the previous sample
    pub motion: f64,
}

/// Luminance plane of a frame, row-major, same dimensions as the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GrayscaleBuffer {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl GrayscaleBuffer {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        (x < self.width && y < self.height).then(|| self.values[y * self.width + x])
    }

    /// True when this buffer can serve as the predecessor of `frame`.
    pub fn matches(&self, frame: &PixelGrid) -> bool {
        self.width == frame.width() && self.height == frame.height()
    }
}

/// Saturation of one pixel: `(max - min) / max`, 0 for black.
#[must_use]
pub fn saturation([r, g, b]: [u8; 3]) -> f64 {
    let max = r.max(g).max(b);
    if max == 0 {
        return 0.0;
    }
    let min = r.min(g).min(b);
    f64::from(max - min) / f64::from(max)
}

/// Luminance of one pixel on the 0-255 scale.
#[must_use]
pub fn luminance([r, g, b]: [u8; 3]) -> f64 {
    LUMA_WEIGHTS[0] * f64::from(r) + LUMA_WEIGHTS[1] * f64::from(g) + LUMA_WEIGHTS[2] * f64::from(b)
}

/// Computes the statistics of `frame` and returns them with its grayscale buffer.
///
/// `previous` is the buffer returned for the preceding sample of the same
/// video, or `None` for the first one, in which case motion is 0.
///
/// # Errors
///
/// * `CoreError::InvalidFrame` - if the frame has no pixels, or `previous`
///   has different dimensions
pub fn compute_frame_stats(
    frame: &PixelGrid,
    previous: Option<&GrayscaleBuffer>,
) -> CoreResult<(FrameStats, GrayscaleBuffer)> {
    if frame.is_empty() {
        return Err(CoreError::InvalidFrame(format!(
            "{}x{} frame has no pixels",
            frame.width(),
            frame.height()
        )));
    }
    if let Some(prev) = previous {
        if !prev.matches(frame) {
            return Err(CoreError::InvalidFrame(format!(
                "previous frame is {}x{}, current frame is {}x{}",
                prev.width,
                prev.height,
                frame.width(),
                frame.height()
            )));
        }
    }

    let count = frame.pixel_count() as f64;
    let mut values = Vec::with_capacity(frame.pixel_count());
    let mut saturation_sum = 0.0;
    let mut motion_sum = 0.0;

    for (index, pixel) in frame.pixels().enumerate() {
        saturation_sum += saturation(pixel);

        let gray = luminance(pixel);
        if let Some(prev) = previous {
            let diff = gray - prev.values[index];
            motion_sum += diff * diff;
        }
        values.push(gray);
    }

    // Mean is accumulated relative to the first pixel so a uniform frame has
    // a mean exactly equal to its luminance and a contrast of exactly 0.
    let pivot = values[0];
    let mean = pivot + values.iter().map(|g| g - pivot).sum::<f64>() / count;
    let variance = values
        .iter()
        .map(|g| {
            let diff = g - mean;
            diff * diff
        })
        .sum::<f64>()
        / count;

    let stats = FrameStats {
        colorfulness: saturation_sum / count,
        contrast: variance.sqrt(),
        motion: motion_sum / count,
    };
    let gray = GrayscaleBuffer {
        width: frame.width(),
        height: frame.height(),
        values,
    };

    Ok((stats, gray))
}
