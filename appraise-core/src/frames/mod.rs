//! Frame access: where a video's sampled frames live and how they are decoded.
//!
//! The scorer only talks to the two traits defined here. `DateFolderSource`
//! and `ImageDecoder` are the on-disk implementations used by the CLI,
//! `MemoryFrames` serves frames held in memory.

pub mod decode;
pub mod memory;
pub mod source;

pub use decode::{FrameDecoder, ImageDecoder};
pub use memory::MemoryFrames;
pub use source::{DateFolderSource, FrameSource};

/// A decoded frame: `width * height` RGB triples, 8 bits per channel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelGrid {
    /// A frame where every pixel has the same color.
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Self {
        Self::from_fn(width, height, |_, _| rgb)
    }

    /// Builds a frame by evaluating `pixel(x, y)` for every coordinate.
    pub fn from_fn<F>(width: usize, height: usize, mut pixel: F) -> Self
    where
        F: FnMut(usize, usize) -> [u8; 3],
    {
        let mut data = Vec::with_capacity(width * height * 3);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&pixel(x, y));
            }
        }
        Self { width, height, data }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// True for zero-width or zero-height frames.
    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0
    }

    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn get(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y * self.width + x) * 3;
        Some([self.data[offset], self.data[offset + 1], self.data[offset + 2]])
    }

    /// Iterates pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.data.chunks_exact(3).map(|p| [p[0], p[1], p[2]])
    }
}

impl From<image::RgbImage> for PixelGrid {
    fn from(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width: width as usize,
            height: height as usize,
            data: img.into_raw(),
        }
    }
}
