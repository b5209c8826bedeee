//! In-memory frame store implementing both `FrameSource` and `FrameDecoder`.

use super::{FrameDecoder, FrameSource, PixelGrid};
use crate::error::{CoreError, CoreResult};

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Frames held in memory, keyed by video path.
///
/// Each video gets synthetic frame paths `<video>/frame_000000`, ... in
/// insertion order. A `None` frame is listed but fails to decode, which is how
/// unreadable images on disk behave.
#[derive(Debug, Clone, Default)]
pub struct MemoryFrames {
    videos: HashMap<PathBuf, Vec<PathBuf>>,
    frames: HashMap<PathBuf, PixelGrid>,
}

impl MemoryFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a video and its frames, replacing any previous entry.
    pub fn insert_video<P, I>(&mut self, video: P, frames: I) -> &mut Self
    where
        P: Into<PathBuf>,
        I: IntoIterator<Item = Option<PixelGrid>>,
    {
        let video = video.into();
        let mut paths = Vec::new();
        for (index, frame) in frames.into_iter().enumerate() {
            let path = video.join(format!("frame_{index:06}"));
            if let Some(frame) = frame {
                self.frames.insert(path.clone(), frame);
            }
            paths.push(path);
        }
        self.videos.insert(video, paths);
        self
    }

    /// Builder-style variant of [`insert_video`](Self::insert_video).
    pub fn with_video<P, I>(mut self, video: P, frames: I) -> Self
    where
        P: Into<PathBuf>,
        I: IntoIterator<Item = Option<PixelGrid>>,
    {
        self.insert_video(video, frames);
        self
    }
}

impl FrameSource for MemoryFrames {
    fn frame_paths(&self, video: &Path) -> CoreResult<Vec<PathBuf>> {
        Ok(self.videos.get(video).cloned().unwrap_or_default())
    }
}

impl FrameDecoder for MemoryFrames {
    fn decode(&self, path: &Path) -> CoreResult<PixelGrid> {
        self.frames.get(path).cloned().ok_or_else(|| CoreError::Decode {
            path: path.to_path_buf(),
            message: "no frame data".to_string(),
        })
    }
}
