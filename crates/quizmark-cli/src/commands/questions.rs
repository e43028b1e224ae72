//! The `quizmark questions` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use crate::commands::TableArgs;

pub fn execute(tables: TableArgs) -> Result<()> {
    let session = tables.load_session()?;

    let mut table = Table::new();
    table.set_header(vec!["ID", "Question", "Options", "Correct", "Marks", "Penalty"]);
    for question in session.catalog.values() {
        table.add_row(vec![
            Cell::new(&question.id),
            Cell::new(&question.text),
            Cell::new(question.options.join(" | ")),
            Cell::new(&question.correct_option),
            Cell::new(question.marks),
            Cell::new(question.penalty),
        ]);
    }

    println!("{table}");
    println!("{} question(s)", session.catalog.len());
    Ok(())
}
