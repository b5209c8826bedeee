// appraise-core/tests/discovery_tests.rs

use appraise_core::discovery::find_videos;
use appraise_core::error::CoreError;
use std::fs::{self, File};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_find_videos_recursive() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path();

    File::create(root.join("a.mp4"))?;
    File::create(root.join("b.MP4"))?; // Case insensitive
    File::create(root.join("notes.txt"))?;
    fs::create_dir_all(root.join("2024-06-01--sunset-timelapse").join("raw"))?;
    File::create(root.join("2024-06-01--sunset-timelapse").join("out.mp4"))?;
    File::create(root.join("2024-06-01--sunset-timelapse").join("raw").join("deep.mp4"))?;
    File::create(root.join("2024-06-01--sunset-timelapse").join("frame.jpg"))?;

    let files = find_videos(root, "mp4")?;

    let names: Vec<_> = files
        .iter()
        .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        names,
        vec![
            PathBuf::from("2024-06-01--sunset-timelapse/out.mp4"),
            PathBuf::from("2024-06-01--sunset-timelapse/raw/deep.mp4"),
            PathBuf::from("a.mp4"),
            PathBuf::from("b.MP4"), // Original case preserved
        ]
    );

    dir.close()?;
    Ok(())
}

#[test]
fn test_find_videos_empty_tree() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("document.txt"))?;
    fs::create_dir(dir.path().join("subdir"))?;

    // An empty result is not an error
    assert!(find_videos(dir.path(), "mp4")?.is_empty());

    dir.close()?;
    Ok(())
}

#[test]
fn test_find_videos_other_extension() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("a.mp4"))?;
    File::create(dir.path().join("b.mov"))?;

    let files = find_videos(dir.path(), ".MOV")?;
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name().unwrap(), "b.mov");

    dir.close()?;
    Ok(())
}

#[test]
fn test_find_videos_nonexistent_dir() {
    let missing = PathBuf::from("surely_this_does_not_exist_42_integration");
    match find_videos(&missing, "mp4") {
        Err(CoreError::Enumeration(msg)) => assert!(msg.contains("surely_this_does_not_exist")),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn test_find_videos_root_is_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("a.mp4");
    File::create(&file)?;

    assert!(matches!(find_videos(&file, "mp4"), Err(CoreError::Enumeration(_))));
    Ok(())
}
