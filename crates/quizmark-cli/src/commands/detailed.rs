//! The `quizmark detailed` command.

use std::path::PathBuf;

use anyhow::Result;

use quizmark_core::report::detailed_report;

use crate::commands::{resolve_rule, TableArgs};

pub fn execute(tables: TableArgs, rule_name: String, output: PathBuf) -> Result<()> {
    let session = tables.load_session()?;
    let rule = resolve_rule(&rule_name)?;

    let records = detailed_report(&session, rule.as_ref());
    quizmark_report::csv::write_detailed_report(&records, &output)?;

    println!(
        "Detailed report with {} row(s) saved to: {}",
        records.len(),
        output.display()
    );
    Ok(())
}
