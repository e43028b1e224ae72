//! CSV emitters for the three export reports.
//!
//! Rows are rendered to an in-memory buffer first and hit the disk in a
//! single `fs::write`, so a failed export never leaves behind a file
//! that looks like a complete report.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use quizmark_core::model::{DetailRecord, DifficultyRecord, ScoreRecord};

fn render<T: Serialize>(header: &[&str], records: &[T]) -> Result<Vec<u8>> {
    let mut writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer
        .write_record(header)
        .context("failed to write report header")?;
    for record in records {
        writer
            .serialize(record)
            .context("failed to serialize report row")?;
    }
    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush report rows: {e}"))
}

fn write_whole(buffer: Vec<u8>, path: &Path, what: &str) -> Result<()> {
    std::fs::write(path, buffer)
        .with_context(|| format!("failed to write {what} to {}", path.display()))
}

/// Write the score report: `student,score`, one row per student.
pub fn write_score_report(records: &[ScoreRecord], path: &Path) -> Result<()> {
    write_whole(render(&["student", "score"], records)?, path, "score report")
}

/// Write the difficulty analysis: `qid,correct,total,difficulty`.
pub fn write_difficulty_report(records: &[DifficultyRecord], path: &Path) -> Result<()> {
    write_whole(
        render(&["qid", "correct", "total", "difficulty"], records)?,
        path,
        "difficulty analysis",
    )
}

/// Write the detailed report: `student,qid,chosen,correct,marks`, one row
/// per (student, question) pair. An unanswered cell leaves `chosen` empty.
pub fn write_detailed_report(records: &[DetailRecord], path: &Path) -> Result<()> {
    write_whole(
        render(&["student", "qid", "chosen", "correct", "marks"], records)?,
        path,
        "detailed report",
    )
}
