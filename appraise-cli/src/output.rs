//! Report printing for the CLI: colored text on a terminal, plain text
//! otherwise, or a JSON document with `--json`.

use appraise_core::report::{self, format_summary, format_title};
use appraise_core::{CoreResult, Ranking};
use owo_colors::OwoColorize;

use std::io::{IsTerminal, Write};
use std::time::Duration;

/// Color only on a terminal, and never when NO_COLOR is set.
pub fn should_use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Writes the text report, with a skipped-videos line when any failed.
pub fn write_text_report<W: Write>(
    out: &mut W,
    ranking: &Ranking,
    elapsed: Duration,
    color: bool,
) -> CoreResult<()> {
    if !color {
        report::write_report(out, ranking, elapsed)?;
    } else {
        writeln!(out, "{}", format_title(ranking.top_n).bold().cyan())?;
        for (index, entry) in ranking.entries.iter().enumerate() {
            writeln!(out, "{} {}", format!("[{}]", index + 1).bold(), entry.path.display())?;
            writeln!(
                out,
                "\tScore: {} | Color: {:.3} | Motion: {:.3} | Contrast: {:.3}",
                format!("{:.3}", entry.score).green().bold(),
                entry.details.colorfulness,
                entry.details.motion,
                entry.details.contrast
            )?;
        }
        writeln!(out)?;
        writeln!(out, "{}", format_summary(ranking, elapsed))?;
    }

    if !ranking.failures.is_empty() {
        let line = format!("Skipped {} videos without usable frames", ranking.failures.len());
        if color {
            writeln!(out, "{}", line.yellow())?;
        } else {
            writeln!(out, "{line}")?;
        }
    }

    Ok(())
}

pub fn write_json_report<W: Write>(out: &mut W, ranking: &Ranking, elapsed: Duration) -> CoreResult<()> {
    writeln!(out, "{}", report::to_json(ranking, elapsed)?)?;
    Ok(())
}
