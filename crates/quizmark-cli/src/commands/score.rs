//! The `quizmark score` command.

use std::path::PathBuf;

use anyhow::Result;

use quizmark_core::report::score_report;

use crate::commands::{resolve_rule, TableArgs};

pub fn execute(tables: TableArgs, rule_name: String, output: PathBuf) -> Result<()> {
    let session = tables.load_session()?;
    let rule = resolve_rule(&rule_name)?;

    let records = score_report(&session, rule.as_ref());
    quizmark_report::csv::write_score_report(&records, &output)?;

    println!(
        "Score report for {} student(s) saved to: {}",
        records.len(),
        output.display()
    );
    Ok(())
}
