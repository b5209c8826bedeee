//! Plain-text and JSON renderings of a [`Ranking`].
//!
//! The CLI adds color on top of the text produced here; anything that only
//! needs the data can serialize a [`JsonReport`].

use crate::analysis::VideoScore;
use crate::error::CoreResult;
use crate::ranking::{Ranking, ScoringFailure};
use crate::utils::format_elapsed;

use serde::{Deserialize, Serialize};

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

/// Heading printed above the ranked entries.
#[must_use]
pub fn format_title(top_n: usize) -> String {
    format!("Top {top_n} Sunset Timelapses:")
}

/// Two-line text block for one ranked entry. `rank` is 1-based.
#[must_use]
pub fn format_entry(rank: usize, entry: &VideoScore) -> String {
    format!(
        "[{rank}] {}\n\tScore: {:.3} | Color: {:.3} | Motion: {:.3} | Contrast: {:.3}",
        entry.path.display(),
        entry.score,
        entry.details.colorfulness,
        entry.details.motion,
        entry.details.contrast
    )
}

/// Summary line. Counts the videos that produced a score.
#[must_use]
pub fn format_summary(ranking: &Ranking, elapsed: Duration) -> String {
    format!("Processed {} videos in {}", ranking.scored, format_elapsed(elapsed))
}

/// Writes the full text report: heading, ranked entries, then the summary
/// after a blank line.
pub fn write_report<W: Write>(out: &mut W, ranking: &Ranking, elapsed: Duration) -> CoreResult<()> {
    writeln!(out, "{}", format_title(ranking.top_n))?;
    for (index, entry) in ranking.entries.iter().enumerate() {
        writeln!(out, "{}", format_entry(index + 1, entry))?;
    }
    writeln!(out)?;
    writeln!(out, "{}", format_summary(ranking, elapsed))?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonEntry {
    pub rank: usize,
    pub path: PathBuf,
    pub score: f64,
    pub colorfulness: f64,
    pub motion: f64,
    pub contrast: f64,
    pub samples: usize,
}

/// Machine-readable report document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    pub elapsed_secs: f64,
    pub total: usize,
    pub scored: usize,
    pub skipped: usize,
    pub entries: Vec<JsonEntry>,
    pub failures: Vec<ScoringFailure>,
}

impl JsonReport {
    pub fn new(ranking: &Ranking, elapsed: Duration) -> Self {
        let entries = ranking
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| JsonEntry {
                rank: index + 1,
                path: entry.path.clone(),
                score: entry.score,
                colorfulness: entry.details.colorfulness,
                motion: entry.details.motion,
                contrast: entry.details.contrast,
                samples: entry.samples,
            })
            .collect();

        Self {
            elapsed_secs: elapsed.as_secs_f64(),
            total: ranking.total,
            scored: ranking.scored,
            skipped: ranking.failures.len(),
            entries,
            failures: ranking.failures.clone(),
        }
    }
}

/// Pretty-printed JSON document for a ranking.
pub fn to_json(ranking: &Ranking, elapsed: Duration) -> CoreResult<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::new(ranking, elapsed))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::FrameStats;

    fn sample_ranking() -> Ranking {
        Ranking {
            entries: vec![VideoScore {
                path: PathBuf::from("2024-06-01--sunset-timelapse/a.mp4"),
                score: 12.55,
                details: FrameStats { colorfulness: 0.8, motion: 0.1, contrast: 10.0 },
                samples: 4,
            }],
            total: 2,
            scored: 1,
            failures: vec![ScoringFailure {
                path: PathBuf::from("b.mp4"),
                reason: "No valid frames in b.mp4".to_string(),
            }],
            top_n: 5,
        }
    }

    #[test]
    fn test_format_entry() {
        let ranking = sample_ranking();
        assert_eq!(
            format_entry(1, &ranking.entries[0]),
            "[1] 2024-06-01--sunset-timelapse/a.mp4\n\tScore: 12.550 | Color: 0.800 | Motion: 0.100 | Contrast: 10.000"
        );
    }

    #[test]
    fn test_write_report() -> CoreResult<()> {
        let mut out = Vec::new();
        write_report(&mut out, &sample_ranking(), Duration::from_millis(1500))?;
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Top 5 Sunset Timelapses:");
        assert!(lines[1].starts_with("[1] "));
        assert_eq!(lines[lines.len() - 2], "");
        assert_eq!(lines.last(), Some(&"Processed 1 videos in 1.50s"));
        Ok(())
    }

    #[test]
    fn test_empty_report() -> CoreResult<()> {
        let mut out = Vec::new();
        write_report(&mut out, &Ranking::default(), Duration::from_millis(3))?;
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Top 10 Sunset Timelapses:\n\nProcessed 0 videos in 3ms\n"
        );
        Ok(())
    }

    #[test]
    fn test_json_report() -> CoreResult<()> {
        let json = to_json(&sample_ranking(), Duration::from_secs(2))?;
        let report: JsonReport = serde_json::from_str(&json)?;

        assert_eq!(report.total, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.entries[0].rank, 1);
        assert_eq!(report.entries[0].samples, 4);
        assert_eq!(report.failures[0].path, PathBuf::from("b.mp4"));
        Ok(())
    }
}
