//! Decoding frame images into pixel grids.

use super::PixelGrid;
use crate::error::{CoreError, CoreResult};

use std::path::Path;

/// Decodes one frame image. Failures are recoverable: the scorer skips the
/// sample and moves on.
pub trait FrameDecoder: Send + Sync {
    fn decode(&self, path: &Path) -> CoreResult<PixelGrid>;
}

/// Decodes JPEG and PNG frames with the `image` crate. The format is
/// guessed from the file contents, not the extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageDecoder;

impl FrameDecoder for ImageDecoder {
    fn decode(&self, path: &Path) -> CoreResult<PixelGrid> {
        let decode_error = |message: String| CoreError::Decode {
            path: path.to_path_buf(),
            message,
        };

        let img = image::ImageReader::open(path)
            .map_err(|e| decode_error(e.to_string()))?
            .with_guessed_format()
            .map_err(|e| decode_error(e.to_string()))?
            .decode()
            .map_err(|e| decode_error(e.to_string()))?;
        Ok(PixelGrid::from(img.to_rgb8()))
    }
}
