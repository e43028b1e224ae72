//! The `quizmark answers` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use crate::commands::TableArgs;

pub fn execute(tables: TableArgs) -> Result<()> {
    let session = tables.load_session()?;

    let mut table = Table::new();
    table.set_header(vec!["ID", "Correct option"]);
    for (qid, correct) in &session.answer_key {
        table.add_row(vec![Cell::new(qid), Cell::new(correct)]);
    }

    println!("{table}");
    println!("{} answer key entries", session.answer_key.len());
    Ok(())
}
