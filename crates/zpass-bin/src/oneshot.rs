//! Non-interactive scoring of a password given on the command line.

use crate::error::SessionError;
use core_config::SessionConfig;
use core_render::render;
use core_score::{ScoreReport, Scorer};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Report,
    Json,
}

pub fn score_once<S: Scorer + ?Sized>(scorer: &S, password: &str) -> Result<ScoreReport, SessionError> {
    let report = scorer.score(password)?;
    tracing::info!(target: "runtime.oneshot", score = report.score, "scored");
    Ok(report)
}

/// Print `report` for a password of `masked_len` characters.
pub fn print_report<W: Write>(
    out: &mut W,
    masked_len: usize,
    report: &ScoreReport,
    config: &SessionConfig,
    format: OutputFormat,
) -> Result<(), SessionError> {
    match format {
        OutputFormat::Json => print_json(out, report)?,
        OutputFormat::Report => {
            for line in render(masked_len, report, config) {
                writeln!(out, "{line}")?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

pub fn print_json<W: Write>(out: &mut W, report: &ScoreReport) -> Result<(), SessionError> {
    serde_json::to_writer_pretty(&mut *out, report).map_err(std::io::Error::from)?;
    writeln!(out)?;
    Ok(())
}
