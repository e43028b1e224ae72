//! The `quizmark difficulty` command.

use std::path::PathBuf;

use anyhow::Result;

use quizmark_core::report::difficulty_analysis;

use crate::commands::TableArgs;

pub fn execute(tables: TableArgs, output: PathBuf) -> Result<()> {
    let session = tables.load_session()?;

    let records = difficulty_analysis(&session)?;
    quizmark_report::csv::write_difficulty_report(&records, &output)?;

    println!(
        "Difficulty analysis for {} question(s) saved to: {}",
        records.len(),
        output.display()
    );
    Ok(())
}
