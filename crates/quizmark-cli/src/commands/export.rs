//! The `quizmark export` command — every report in one pass.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizmark_report::csv::{
    write_detailed_report, write_difficulty_report, write_score_report,
};
use quizmark_report::json::QuizReport;

use crate::commands::{resolve_rule, TableArgs};

pub fn execute(tables: TableArgs, rule_name: String, output: PathBuf, format: String) -> Result<()> {
    let session = tables.load_session()?;
    let rule = resolve_rule(&rule_name)?;

    // Compute everything once; individual formats only differ in emission.
    let report = QuizReport::build(&session, rule.as_ref())?;

    std::fs::create_dir_all(&output)?;

    let formats: Vec<&str> = if format == "all" {
        vec!["csv", "json"]
    } else {
        format.split(',').collect()
    };

    for fmt in &formats {
        match *fmt {
            "csv" => {
                let path = output.join("report.csv");
                write_score_report(&report.scores, &path)?;
                eprintln!("Score report: {}", path.display());

                let path = output.join("difficulty.csv");
                write_difficulty_report(&report.difficulty, &path)?;
                eprintln!("Difficulty analysis: {}", path.display());

                let path = output.join("detailed_report.csv");
                write_detailed_report(&report.details, &path)?;
                eprintln!("Detailed report: {}", path.display());
            }
            "json" => {
                let path = output.join("report.json");
                report.save_json(&path)?;
                eprintln!("JSON report: {}", path.display());
            }
            _ => {
                eprintln!("Unknown format: {fmt}");
            }
        }
    }

    print_summary(&report);
    Ok(())
}

fn print_summary(report: &QuizReport) {
    let mut table = Table::new();
    table.set_header(vec!["Student", "Score"]);
    for record in &report.scores {
        table.add_row(vec![
            Cell::new(&record.student),
            Cell::new(format!("{:.2}", record.score)),
        ]);
    }

    eprintln!("\n{table}");
    eprintln!(
        "{} student(s) x {} question(s), rule: {}",
        report.student_count, report.question_count, report.rule
    );
}
