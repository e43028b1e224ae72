//! The `quizmark shell` command — interactive menu session.
//!
//! State loaded from the data files persists across menu operations and
//! is replaced wholesale by a subsequent load. Operation failures are
//! printed and the menu continues; nothing here terminates the process.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

use quizmark_core::report::{detailed_report, difficulty_analysis, score_report};
use quizmark_core::scoring::ScoringRule;
use quizmark_core::session::QuizSession;

use crate::commands::resolve_rule;
use crate::config::{self, QuizmarkConfig};

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let cfg = config::load_config_from(config_path.as_deref())?;
    let rule = resolve_rule(&cfg.rule)?;
    let stdin = io::stdin();
    run(stdin.lock(), &cfg, rule.as_ref())
}

fn run(input: impl BufRead, cfg: &QuizmarkConfig, rule: &dyn ScoringRule) -> Result<()> {
    let mut lines = input.lines();
    let mut session = QuizSession::new();

    loop {
        print_menu();
        let Some(choice) = next_line(&mut lines)? else {
            break;
        };
        match choice.trim() {
            "1" => load_data(&mut lines, cfg, &mut session)?,
            "2" => export_scores(&session, rule, cfg),
            "3" => show_questions(&session),
            "4" => show_answers(&session),
            "5" => export_difficulty(&session, cfg),
            "6" => export_detailed(&session, rule, cfg),
            "7" => {
                println!("Exiting...");
                break;
            }
            other => println!("Invalid choice: '{other}'"),
        }
    }

    Ok(())
}

fn print_menu() {
    println!("\n===== QUIZ MENU =====");
    println!("1. Load data files");
    println!("2. Generate score report");
    println!("3. Show questions");
    println!("4. Show answers");
    println!("5. Export difficulty analysis");
    println!("6. Export detailed report");
    println!("7. Exit");
    print!("Choose: ");
    let _ = io::stdout().flush();
}

fn next_line<B: BufRead>(lines: &mut io::Lines<B>) -> Result<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn prompt_path<B: BufRead>(
    lines: &mut io::Lines<B>,
    label: &str,
    default: &Path,
) -> Result<Option<PathBuf>> {
    print!("Path to {label} [{}]: ", default.display());
    io::stdout().flush()?;
    let Some(line) = next_line(lines)? else {
        return Ok(None);
    };
    let trimmed = line.trim();
    Ok(Some(if trimmed.is_empty() {
        default.to_path_buf()
    } else {
        PathBuf::from(trimmed)
    }))
}

/// Load the three tables, each independently: one file's failure does not
/// block the others or discard their previous state.
fn load_data<B: BufRead>(
    lines: &mut io::Lines<B>,
    cfg: &QuizmarkConfig,
    session: &mut QuizSession,
) -> Result<()> {
    let Some(questions) = prompt_path(lines, "questions table", &cfg.questions)? else {
        return Ok(());
    };
    let Some(answers) = prompt_path(lines, "answers table", &cfg.answers)? else {
        return Ok(());
    };
    let Some(responses) = prompt_path(lines, "responses table", &cfg.responses)? else {
        return Ok(());
    };

    match session.load_questions(&questions) {
        Ok(count) => println!("Questions loaded: {count}"),
        Err(e) => println!("Error loading questions: {e}"),
    }
    match session.load_answers(&answers) {
        Ok(count) => println!("Answers loaded: {count}"),
        Err(e) => println!("Error loading answers: {e}"),
    }
    match session.load_responses(&responses) {
        Ok(count) => println!("Responses loaded: {count}"),
        Err(e) => println!("Error loading responses: {e}"),
    }

    Ok(())
}

fn export_scores(session: &QuizSession, rule: &dyn ScoringRule, cfg: &QuizmarkConfig) {
    let result = (|| -> Result<PathBuf> {
        std::fs::create_dir_all(&cfg.output_dir)?;
        let path = cfg.output_dir.join("report.csv");
        let records = score_report(session, rule);
        quizmark_report::csv::write_score_report(&records, &path)?;
        Ok(path)
    })();
    match result {
        Ok(path) => println!("Saved: {}", path.display()),
        Err(e) => println!("Error writing score report: {e:#}"),
    }
}

fn export_difficulty(session: &QuizSession, cfg: &QuizmarkConfig) {
    let result = (|| -> Result<PathBuf> {
        std::fs::create_dir_all(&cfg.output_dir)?;
        let path = cfg.output_dir.join("difficulty.csv");
        let records = difficulty_analysis(session)?;
        quizmark_report::csv::write_difficulty_report(&records, &path)?;
        Ok(path)
    })();
    match result {
        Ok(path) => println!("Saved: {}", path.display()),
        Err(e) => println!("Error writing difficulty analysis: {e:#}"),
    }
}

fn export_detailed(session: &QuizSession, rule: &dyn ScoringRule, cfg: &QuizmarkConfig) {
    let result = (|| -> Result<PathBuf> {
        std::fs::create_dir_all(&cfg.output_dir)?;
        let path = cfg.output_dir.join("detailed_report.csv");
        let records = detailed_report(session, rule);
        quizmark_report::csv::write_detailed_report(&records, &path)?;
        Ok(path)
    })();
    match result {
        Ok(path) => println!("Saved: {}", path.display()),
        Err(e) => println!("Error writing detailed report: {e:#}"),
    }
}

fn show_questions(session: &QuizSession) {
    println!("\n=== QUESTIONS ===");
    for (id, question) in &session.catalog {
        println!("{id}: {}", question.text);
    }
}

fn show_answers(session: &QuizSession) {
    println!("\n=== ANSWERS ===");
    for (id, correct) in &session.answer_key {
        println!("{id}: {correct}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizmark_core::scoring::NegativeMarking;
    use std::io::Cursor;

    fn cfg_in(dir: &tempfile::TempDir) -> QuizmarkConfig {
        QuizmarkConfig {
            questions: dir.path().join("questions.csv"),
            answers: dir.path().join("answers.csv"),
            responses: dir.path().join("responses.csv"),
            output_dir: dir.path().join("out"),
            rule: "negative-marking".into(),
        }
    }

    fn write_fixtures(dir: &tempfile::TempDir) {
        std::fs::write(
            dir.path().join("questions.csv"),
            "id,text,options,correct,marks,penalty\nQ1,Only,A|B,A,2,1\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("answers.csv"), "id,correct\nQ1,A\n").unwrap();
        std::fs::write(
            dir.path().join("responses.csv"),
            "student,question,chosen\nstudent1,Q1,A\nstudent2,Q1,B\n",
        )
        .unwrap();
    }

    #[test]
    fn invalid_choice_keeps_the_loop_alive() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = cfg_in(&dir);
        run(Cursor::new("9\n7\n"), &cfg, &NegativeMarking).unwrap();
    }

    #[test]
    fn eof_ends_the_session_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = cfg_in(&dir);
        run(Cursor::new(""), &cfg, &NegativeMarking).unwrap();
    }

    #[test]
    fn load_then_score_writes_the_report() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(&dir);
        let cfg = cfg_in(&dir);

        // "1" loads (blank lines accept the config defaults), "2" scores, "7" exits.
        run(Cursor::new("1\n\n\n\n2\n7\n"), &cfg, &NegativeMarking).unwrap();

        let report = std::fs::read_to_string(cfg.output_dir.join("report.csv")).unwrap();
        assert_eq!(report, "student,score\nstudent1,2.0\nstudent2,-1.0\n");
    }

    #[test]
    fn difficulty_without_data_reports_but_does_not_crash() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = cfg_in(&dir);
        // "5" with nothing loaded must print an error and keep going.
        run(Cursor::new("5\n7\n"), &cfg, &NegativeMarking).unwrap();
        assert!(!cfg.output_dir.join("difficulty.csv").exists());
    }
}
