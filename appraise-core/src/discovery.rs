//! Video discovery: finding the candidate videos under a root directory.
//!
//! The whole tree is walked. Entries that cannot be read below the root are
//! skipped with a warning; only a root that cannot be enumerated at all is
//! an error, and that error ends the run.

use crate::error::{CoreError, CoreResult};
use crate::utils::has_extension;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Finds every file under `root` with the given extension (case-insensitive).
///
/// Results are sorted by path so repeated runs see the same order.
///
/// # Errors
///
/// * `CoreError::Enumeration` - if `root` is missing, not a directory, or
///   cannot be read
///
/// # Examples
///
/// ```rust,no_run
/// use appraise_core::find_videos;
/// use std::path::Path;
///
/// let videos = find_videos(Path::new("/srv/timelapse"), "mp4").unwrap();
/// println!("Found {} videos", videos.len());
/// ```
pub fn find_videos(root: &Path, extension: &str) -> CoreResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(CoreError::Enumeration(format!(
            "'{}' is not a readable directory",
            root.display()
        )));
    }

    let mut videos = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(CoreError::Enumeration(format!("{}: {e}", root.display())));
            }
            Err(e) => {
                log::warn!("Skipping unreadable entry during discovery: {e}");
                continue;
            }
        };

        if entry.file_type().is_file() && has_extension(entry.path(), extension) {
            videos.push(entry.into_path());
        }
    }

    videos.sort();
    log::debug!("Found {} .{} files under {}", videos.len(), extension, root.display());

    Ok(videos)
}
