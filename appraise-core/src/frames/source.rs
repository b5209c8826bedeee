//! Resolving a video to the ordered list of its pre-extracted frames.

use crate::config::{CoreConfig, DEFAULT_FOLDER_MARKER, DEFAULT_FRAME_EXTENSION};
use crate::error::CoreResult;
use crate::utils::has_extension;

use std::path::{Path, PathBuf};

/// Provides the frame image locations of a video, in capture order.
///
/// An empty list is a normal outcome: the scorer turns it into
/// `CoreError::NoFramesFound`.
pub trait FrameSource: Send + Sync {
    fn frame_paths(&self, video: &Path) -> CoreResult<Vec<PathBuf>>;
}

/// Finds frames in a per-day folder named after the video's capture date.
///
/// Videos live under directories such as `2024-06-01--sunset-timelapse/`.
/// The first path component containing the marker is cut at the first `--`
/// and the remainder names a folder under `frames_root` holding the frames.
/// Frames are returned sorted by file name.
#[derive(Debug, Clone)]
pub struct DateFolderSource {
    frames_root: PathBuf,
    marker: String,
    extension: String,
}

impl DateFolderSource {
    pub fn new(frames_root: impl Into<PathBuf>) -> Self {
        Self {
            frames_root: frames_root.into(),
            marker: DEFAULT_FOLDER_MARKER.to_string(),
            extension: DEFAULT_FRAME_EXTENSION.to_string(),
        }
    }

    pub fn from_config(config: &CoreConfig) -> Self {
        Self::new(config.frames_dir.clone())
            .marker(config.folder_marker.clone())
            .extension(config.frame_extension.clone())
    }

    /// Sets the directory-name marker that identifies a dated capture folder.
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Sets the frame file extension (matched case-insensitively).
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Date folder name encoded in the video path, if any.
    pub fn date_folder(&self, video: &Path) -> Option<String> {
        video
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .find(|part| part.contains(self.marker.as_str()))
            .and_then(|part| part.split("--").next().map(str::to_string))
            .filter(|date| !date.is_empty())
    }
}

impl FrameSource for DateFolderSource {
    fn frame_paths(&self, video: &Path) -> CoreResult<Vec<PathBuf>> {
        let Some(date) = self.date_folder(video) else {
            log::debug!("No '{}' folder in {}", self.marker, video.display());
            return Ok(Vec::new());
        };

        let frame_dir = self.frames_root.join(&date);
        if !frame_dir.is_dir() {
            log::debug!("Frame folder {} does not exist", frame_dir.display());
            return Ok(Vec::new());
        }

        let mut frames: Vec<PathBuf> = std::fs::read_dir(&frame_dir)?
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                (path.is_file() && has_extension(&path, &self.extension)).then_some(path)
            })
            .collect();
        frames.sort();

        Ok(frames)
    }
}
