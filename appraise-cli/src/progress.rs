// ============================================================================
// appraise-cli/src/progress.rs
// ============================================================================
//
// PROGRESS REPORTING: indicatif bar driven by the orchestrator's callback
//
// The bar draws on stderr and is hidden when stderr is not a terminal or
// when --no-progress is given.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

/// Progress bar counting scored videos.
#[derive(Clone)]
pub struct ScoringProgress {
    bar: ProgressBar,
}

impl ScoringProgress {
    pub fn new(enabled: bool) -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("  ⧖ Scoring: {pos}/{len} [{bar:30}] ({elapsed_precise})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("##."),
        );

        if !enabled || !std::io::stderr().is_terminal() {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        } else {
            bar.enable_steady_tick(Duration::from_millis(100));
        }

        Self { bar }
    }

    /// Callback handed to the orchestrator. Completions can be reported out
    /// of order, so each call advances the bar by one.
    pub fn callback(&self) -> impl Fn(usize, usize) + Send + Sync + 'static {
        let bar = self.bar.clone();
        move |_completed, total| {
            bar.set_length(total as u64);
            bar.inc(1);
        }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
