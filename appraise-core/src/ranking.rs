//! Concurrent scoring of many videos and the final top-N ranking.
//!
//! Each video is scored as an independent task on a rayon pool sized to the
//! concurrency limit, so no more than that many videos are in flight at once.
//! Results are appended under a mutex and ranked only after every task has
//! finished. A video that fails to score is left out of the ranking and
//! recorded as a [`ScoringFailure`]; it never stops its siblings.

use crate::analysis::{Scorer, VideoScore};
use crate::config::{CoreConfig, DEFAULT_TOP_N, default_concurrency};
use crate::error::{CoreError, CoreResult};

use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Progress callback, called with `(completed, total)` after each video.
pub type ProgressCallback = Arc<dyn Fn(usize, usize) + Send + Sync>;

/// A video that produced no score, and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a ranking run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    /// Best scores first, at most `top_n` entries
    pub entries: Vec<VideoScore>,
    /// Number of videos submitted
    pub total: usize,
    /// Number of videos that produced a score
    pub scored: usize,
    /// Videos left out, sorted by path
    pub failures: Vec<ScoringFailure>,
    /// Entry limit the ranking was built with
    pub top_n: usize,
}

impl Default for Ranking {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            total: 0,
            scored: 0,
            failures: Vec::new(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl Ranking {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sorts scores best first. Equal scores are ordered by path so the ranking
/// does not depend on completion order.
pub fn sort_by_score(scores: &mut [VideoScore]) {
    scores.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.path.cmp(&b.path)));
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Runs a [`Scorer`] over many videos with bounded parallelism.
pub struct ScoringOrchestrator {
    scorer: Arc<dyn Scorer>,
    concurrency_limit: usize,
    top_n: usize,
    on_progress: Option<ProgressCallback>,
}

impl ScoringOrchestrator {
    /// Create a new orchestrator with one job per available processing unit
    pub fn new(scorer: Arc<dyn Scorer>) -> Self {
        Self {
            scorer,
            concurrency_limit: default_concurrency(),
            top_n: DEFAULT_TOP_N,
            on_progress: None,
        }
    }

    pub fn from_config(scorer: Arc<dyn Scorer>, config: &CoreConfig) -> Self {
        Self::new(scorer)
            .concurrency_limit(config.concurrency_limit)
            .top_n(config.top_n)
    }

    /// Set maximum number of videos scored at the same time
    pub fn concurrency_limit(mut self, jobs: usize) -> Self {
        self.concurrency_limit = jobs;
        self
    }

    /// Set maximum number of ranked entries
    pub fn top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set progress callback function
    pub fn on_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(usize, usize) + Send + Sync + 'static,
    {
        self.on_progress = Some(Arc::new(callback));
        self
    }

    /// Scores every video and returns the top entries.
    ///
    /// Blocks until all videos have been scored or have failed.
    ///
    /// # Errors
    ///
    /// * `CoreError::Config` - zero concurrency limit or zero top N
    /// * `CoreError::OperationFailed` - the worker pool could not be created
    pub fn rank<P>(&self, videos: &[P]) -> CoreResult<Ranking>
    where
        P: AsRef<Path> + Sync,
    {
        if self.concurrency_limit == 0 {
            return Err(CoreError::Config("concurrency limit must be at least 1".to_string()));
        }
        if self.top_n == 0 {
            return Err(CoreError::Config("top N must be at least 1".to_string()));
        }

        let total = videos.len();
        if total == 0 {
            info!("No videos to score");
            return Ok(Ranking {
                top_n: self.top_n,
                ..Ranking::default()
            });
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.concurrency_limit)
            .thread_name(|i| format!("appraise-worker-{i}"))
            .build()
            .map_err(|e| CoreError::OperationFailed(format!("Failed to initialize thread pool: {e}")))?;

        info!(
            "Scoring {} videos with {} concurrent jobs",
            total, self.concurrency_limit
        );

        let scores = Mutex::new(Vec::with_capacity(total));
        let failures = Mutex::new(Vec::new());
        let completed = AtomicUsize::new(0);

        pool.install(|| {
            videos.par_iter().for_each(|video| {
                let video = video.as_ref();
                match self.scorer.score_video(video) {
                    Ok(score) => lock(&scores).push(score),
                    Err(e) => {
                        if e.is_video_skip() {
                            debug!("Skipping {}: {e}", video.display());
                        } else {
                            warn!("Failed to score {}: {e}", video.display());
                        }
                        lock(&failures).push(ScoringFailure {
                            path: video.to_path_buf(),
                            reason: e.to_string(),
                        });
                    }
                }

                let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
                if let Some(ref callback) = self.on_progress {
                    callback(done, total);
                }
            });
        });

        let mut scores = scores.into_inner().unwrap_or_else(PoisonError::into_inner);
        let mut failures = failures.into_inner().unwrap_or_else(PoisonError::into_inner);

        let scored = scores.len();
        sort_by_score(&mut scores);
        scores.truncate(self.top_n);
        failures.sort_by(|a, b| a.path.cmp(&b.path));

        info!("Scored {} of {} videos ({} skipped)", scored, total, failures.len());

        Ok(Ranking {
            entries: scores,
            total,
            scored,
            failures,
            top_n: self.top_n,
        })
    }
}

/// Scores `videos` with at most `concurrency_limit` in flight and returns the
/// best `top_n`, highest score first.
pub fn rank_top<P>(
    scorer: Arc<dyn Scorer>,
    videos: &[P],
    concurrency_limit: usize,
    top_n: usize,
) -> CoreResult<Ranking>
where
    P: AsRef<Path> + Sync,
{
    ScoringOrchestrator::new(scorer)
        .concurrency_limit(concurrency_limit)
        .top_n(top_n)
        .rank(videos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::FrameStats;
    use std::collections::HashMap;

    /// Scores from a fixed table; unknown videos fail.
    struct TableScorer(HashMap<PathBuf, f64>);

    /// Fails every video with an I/O error.
    struct BrokenScorer;

    impl Scorer for BrokenScorer {
        fn score_video(&self, video: &Path) -> CoreResult<VideoScore> {
            Err(CoreError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                format!("cannot read {}", video.display()),
            )))
        }
    }

    impl Scorer for TableScorer {
        fn score_video(&self, video: &Path) -> CoreResult<VideoScore> {
            let score = *self
                .0
                .get(video)
                .ok_or_else(|| CoreError::NoFramesFound(video.display().to_string()))?;
            Ok(VideoScore {
                path: video.to_path_buf(),
                score,
                details: FrameStats::default(),
                samples: 1,
            })
        }
    }

    fn table(entries: &[(&str, f64)]) -> Arc<dyn Scorer> {
        Arc::new(TableScorer(
            entries.iter().map(|(p, s)| (PathBuf::from(p), *s)).collect(),
        ))
    }

    fn paths(ranking: &Ranking) -> Vec<String> {
        ranking
            .entries
            .iter()
            .map(|e| e.path.display().to_string())
            .collect()
    }

    #[test]
    fn test_sorted_descending_and_truncated() -> CoreResult<()> {
        let scorer = table(&[("a", 1.0), ("b", 5.0), ("c", 3.0), ("d", 4.0)]);
        let ranking = rank_top(scorer, &["a", "b", "c", "d"], 2, 3)?;

        assert_eq!(paths(&ranking), vec!["b", "d", "c"]);
        assert_eq!(ranking.scored, 4);
        assert_eq!(ranking.total, 4);
        assert_eq!(ranking.top_n, 3);
        Ok(())
    }

    #[test]
    fn test_ties_ordered_by_path() -> CoreResult<()> {
        let scorer = table(&[("z", 2.0), ("m", 2.0), ("a", 2.0)]);
        let ranking = rank_top(scorer, &["z", "m", "a"], 3, 10)?;
        assert_eq!(paths(&ranking), vec!["a", "m", "z"]);
        Ok(())
    }

    #[test]
    fn test_failures_are_isolated() -> CoreResult<()> {
        let scorer = table(&[("good", 1.0)]);
        let ranking = rank_top(scorer, &["missing-2", "good", "missing-1"], 2, 10)?;

        assert_eq!(paths(&ranking), vec!["good"]);
        assert_eq!(ranking.scored, 1);
        let failed: Vec<_> = ranking.failures.iter().map(|f| f.path.clone()).collect();
        assert_eq!(failed, vec![PathBuf::from("missing-1"), PathBuf::from("missing-2")]);
        assert!(ranking.failures[0].reason.contains("No frames found"));
        Ok(())
    }

    #[test]
    fn test_unexpected_errors_are_recorded_as_failures() -> CoreResult<()> {
        let ranking = rank_top(Arc::new(BrokenScorer), &["b", "a"], 2, 10)?;

        assert!(ranking.is_empty());
        assert_eq!(ranking.scored, 0);
        assert_eq!(ranking.failures.len(), 2);
        assert_eq!(ranking.failures[0].path, PathBuf::from("a"));
        assert!(ranking.failures[0].reason.contains("cannot read a"));
        Ok(())
    }

    #[test]
    fn test_empty_input() -> CoreResult<()> {
        let ranking = rank_top(table(&[]), &[] as &[PathBuf], 4, 3)?;
        assert!(ranking.is_empty());
        assert_eq!(ranking.total, 0);
        assert_eq!(ranking.top_n, 3);
        Ok(())
    }

    #[test]
    fn test_invalid_limits() {
        assert!(matches!(
            rank_top(table(&[]), &["a"], 0, 10),
            Err(CoreError::Config(_))
        ));
        assert!(matches!(
            rank_top(table(&[]), &["a"], 1, 0),
            Err(CoreError::Config(_))
        ));
    }

    #[test]
    fn test_progress_reports_every_video() -> CoreResult<()> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        ScoringOrchestrator::new(table(&[("a", 1.0), ("b", 2.0)]))
            .concurrency_limit(2)
            .on_progress(move |done, total| sink.lock().unwrap().push((done, total)))
            .rank(&["a", "b", "c"])?;

        let mut seen = seen.lock().unwrap().clone();
        seen.sort();
        assert_eq!(seen, vec![(1, 3), (2, 3), (3, 3)]);
        Ok(())
    }
}
