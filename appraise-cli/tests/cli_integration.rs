use assert_cmd::Command;
use image::{Rgb, RgbImage};
use predicates::prelude::*;
use predicates::str::contains;
use std::error::Error;
use std::fs::{self, File};
use std::path::Path;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn appraise_cmd() -> Command {
    let mut cmd = Command::cargo_bin("appraise").expect("Failed to find appraise binary");
    cmd.env_remove("RUST_LOG")
        .env_remove("APPRAISE_FRAMES_DIR")
        .env_remove("APPRAISE_SAMPLE_STRIDE")
        .env_remove("APPRAISE_TOP_N")
        .env_remove("APPRAISE_JOBS")
        .env_remove("APPRAISE_MOTION_AVERAGING")
        .arg("--no-progress");
    cmd
}

/// Creates `<root>/videos/<date>--sunset-timelapse/clip.mp4` and `count`
/// uniform PNG frames under `<root>/frames/<date>/`.
fn add_capture(root: &Path, date: &str, count: usize, rgb: [u8; 3]) -> Result<(), Box<dyn Error>> {
    let video_dir = root.join("videos").join(format!("{date}--sunset-timelapse"));
    fs::create_dir_all(&video_dir)?;
    File::create(video_dir.join("clip.mp4"))?;

    let frame_dir = root.join("frames").join(date);
    fs::create_dir_all(&frame_dir)?;
    for i in 0..count {
        RgbImage::from_pixel(4, 4, Rgb(rgb)).save(frame_dir.join(format!("frame_{i:04}.png")))?;
    }
    Ok(())
}

#[test]
fn test_empty_tree_succeeds() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;

    appraise_cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("Top 10 Sunset Timelapses:"))
        .stdout(contains("Processed 0 videos"));

    Ok(())
}

#[test]
fn test_non_existent_root_fails() -> Result<(), Box<dyn Error>> {
    appraise_cmd()
        .arg("surely/this/does/not/exist")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Failed to enumerate videos"));

    Ok(())
}

#[test]
fn test_invalid_jobs_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;

    appraise_cmd()
        .arg(dir.path())
        .args(["--jobs", "0"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Invalid configuration"));

    Ok(())
}

#[test]
fn test_ranks_fixture_tree() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    add_capture(dir.path(), "2024-06-01", 12, [200, 100, 50])?;
    add_capture(dir.path(), "2024-06-02", 12, [80, 80, 80])?;
    add_capture(dir.path(), "2024-06-03", 0, [0, 0, 0])?;

    let assert = appraise_cmd()
        .arg(dir.path().join("videos"))
        .arg("--frames-dir")
        .arg(dir.path().join("frames"))
        .args(["--frame-extension", "png", "--jobs", "2"])
        .assert()
        .success()
        .stdout(contains("Score: 2.250 | Color: 0.750 | Motion: 0.000 | Contrast: 0.000"))
        .stdout(contains("Processed 2 videos"))
        .stdout(contains("Skipped 1 videos"))
        .stdout(contains("[3]").not());

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let first = stdout.find("2024-06-01").ok_or("first capture missing")?;
    let second = stdout.find("2024-06-02").ok_or("second capture missing")?;
    assert!(first < second);

    Ok(())
}

#[test]
fn test_heading_follows_top_and_summary_is_separated() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    add_capture(dir.path(), "2024-06-01", 2, [200, 100, 50])?;
    add_capture(dir.path(), "2024-06-02", 0, [0, 0, 0])?;

    appraise_cmd()
        .arg(dir.path().join("videos"))
        .arg("--frames-dir")
        .arg(dir.path().join("frames"))
        .args(["--frame-extension", "png", "--top", "3"])
        .assert()
        .success()
        .stdout(predicates::str::starts_with("Top 3 Sunset Timelapses:\n[1] "))
        .stdout(contains("Contrast: 0.000\n\nProcessed 1 videos in "));

    Ok(())
}

#[test]
fn test_json_output() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    add_capture(dir.path(), "2024-06-01", 3, [200, 100, 50])?;

    let output = appraise_cmd()
        .arg(dir.path().join("videos"))
        .arg("--frames-dir")
        .arg(dir.path().join("frames"))
        .args(["--frame-extension", "png", "--stride", "1", "--json"])
        .output()?;
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["total"], 1);
    assert_eq!(report["scored"], 1);
    assert_eq!(report["entries"][0]["rank"], 1);
    assert_eq!(report["entries"][0]["samples"], 3);
    assert!((report["entries"][0]["score"].as_f64().unwrap() - 2.25).abs() < 1e-9);

    Ok(())
}

#[test]
fn test_top_limits_entries() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    for (i, level) in [40u8, 120, 200].iter().enumerate() {
        add_capture(dir.path(), &format!("2024-07-0{}", i + 1), 2, [*level, 10, 10])?;
    }

    appraise_cmd()
        .arg(dir.path().join("videos"))
        .arg("--frames-dir")
        .arg(dir.path().join("frames"))
        .args(["--frame-extension", "png", "--top", "2"])
        .assert()
        .success()
        .stdout(contains("[2]"))
        .stdout(contains("[3]").not());

    Ok(())
}
