// appraise-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use appraise_core::MotionAveraging;
use clap::Parser;
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Appraise: rank timelapse videos by visual interest",
    long_about = "Scores every video under ROOT from its pre-extracted frames \
                  (colorfulness, contrast, motion) and prints the best ones.\n\n\
                  APPRAISE_FRAMES_DIR, APPRAISE_SAMPLE_STRIDE, APPRAISE_TOP_N, \
                  APPRAISE_JOBS and APPRAISE_MOTION_AVERAGING set defaults that \
                  flags override."
)]
pub struct Cli {
    /// Directory scanned recursively for videos
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Directory holding the per-date frame folders (defaults to ROOT)
    #[arg(long, value_name = "DIR")]
    pub frames_dir: Option<PathBuf>,

    /// Analyze every Nth frame
    #[arg(long, value_name = "N")]
    pub stride: Option<usize>,

    /// Number of videos to report
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Maximum number of videos scored at the same time
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Motion average over all samples ("all") or only over consecutive pairs ("pairs")
    #[arg(long, value_name = "MODE")]
    pub motion_averaging: Option<MotionAveraging>,

    /// Video file extension
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Frame image extension
    #[arg(long, value_name = "EXT")]
    pub frame_extension: Option<String>,

    /// Directory-name marker of a dated capture folder
    #[arg(long, value_name = "TEXT")]
    pub marker: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Do not show the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
