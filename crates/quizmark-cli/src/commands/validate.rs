//! The `quizmark validate` command.

use anyhow::Result;

use quizmark_core::loader::validate_session;

use crate::commands::TableArgs;

pub fn execute(tables: TableArgs) -> Result<()> {
    let session = tables.load_session()?;

    println!(
        "Loaded {} question(s), {} answer key entries, {} student(s)",
        session.catalog.len(),
        session.answer_key.len(),
        session.responses.len()
    );

    let warnings = validate_session(&session);
    for w in &warnings {
        let prefix = w
            .subject
            .as_ref()
            .map(|s| format!("  [{s}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("All tables consistent.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
