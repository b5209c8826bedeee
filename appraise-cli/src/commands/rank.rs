//! Implementation of the ranking run.
//!
//! Settings are layered as defaults, then `APPRAISE_*` variables, then
//! flags. The merged configuration is validated before anything is read
//! from disk.

use crate::cli::Cli;
use crate::error::{CliErrorContext, CliResult};
use crate::output::{should_use_color, write_json_report, write_text_report};
use crate::progress::ScoringProgress;

use appraise_core::{CoreConfig, rank_directory_with_progress};

use log::info;
use std::io::{self, Write};
use std::time::Instant;

/// Builds the effective configuration for a run.
pub fn build_config(args: &Cli) -> CliResult<CoreConfig> {
    let mut config = CoreConfig::new(args.root.clone())
        .with_env_overrides()
        .cli_context("Invalid APPRAISE_* environment setting")?;

    if let Some(ref frames_dir) = args.frames_dir {
        config.frames_dir = frames_dir.clone();
    }
    if let Some(stride) = args.stride {
        config.sample_stride = stride;
    }
    if let Some(top) = args.top {
        config.top_n = top;
    }
    if let Some(jobs) = args.jobs {
        config.concurrency_limit = jobs;
    }
    if let Some(averaging) = args.motion_averaging {
        config.motion_averaging = averaging;
    }
    if let Some(ref ext) = args.extension {
        config.video_extension = ext.trim_start_matches('.').to_string();
    }
    if let Some(ref ext) = args.frame_extension {
        config.frame_extension = ext.trim_start_matches('.').to_string();
    }
    if let Some(ref marker) = args.marker {
        config.folder_marker = marker.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Runs a full ranking and prints the report to stdout.
pub fn run_rank(args: &Cli) -> CliResult<()> {
    let start = Instant::now();
    let config = build_config(args)?;

    info!(
        "Ranking videos under {} (frames in {}, stride {}, top {}, {} jobs)",
        config.input_dir.display(),
        config.frames_dir.display(),
        config.sample_stride,
        config.top_n,
        config.concurrency_limit
    );

    let progress = ScoringProgress::new(!args.no_progress && !args.json);
    let ranking = rank_directory_with_progress(&config, progress.callback());
    progress.finish();
    let ranking = ranking?;

    let elapsed = start.elapsed();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        write_json_report(&mut out, &ranking, elapsed)?;
    } else {
        write_text_report(&mut out, &ranking, elapsed, should_use_color())?;
    }
    out.flush().cli_context("Failed to write report")?;

    Ok(())
}
