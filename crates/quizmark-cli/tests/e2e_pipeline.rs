//! End-to-end pipeline tests: fixture tables in, every report artifact
//! out, all values checked against hand-computed expectations.

use assert_cmd::Command;
use tempfile::TempDir;

fn quizmark() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quizmark").unwrap()
}

/// One-question fixture: Q1 correct=A, marks=2, penalty=1.
/// student1 chose A, student2 chose B, student3 left it blank.
fn write_single_question_fixtures(dir: &TempDir) {
    std::fs::write(
        dir.path().join("questions.csv"),
        "id,text,options,correct,marks,penalty\nQ1,Only question,A|B,A,2,1\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("answers.csv"), "id,correct\nQ1,A\n").unwrap();
    std::fs::write(
        dir.path().join("responses.csv"),
        "student,question,chosen\nstudent1,Q1,A\nstudent2,Q1,B\nstudent3,Q1,\n",
    )
    .unwrap();
}

fn run_export(dir: &TempDir, format: &str) {
    quizmark()
        .current_dir(dir.path())
        .arg("export")
        .arg("--questions")
        .arg("questions.csv")
        .arg("--answers")
        .arg("answers.csv")
        .arg("--responses")
        .arg("responses.csv")
        .arg("--output")
        .arg("results")
        .arg("--format")
        .arg(format)
        .assert()
        .success();
}

#[test]
fn e2e_score_report_values() {
    let dir = TempDir::new().unwrap();
    write_single_question_fixtures(&dir);
    run_export(&dir, "csv");

    let content = std::fs::read_to_string(dir.path().join("results/report.csv")).unwrap();
    assert_eq!(
        content,
        "student,score\nstudent1,2.0\nstudent2,-1.0\nstudent3,0.0\n"
    );
}

#[test]
fn e2e_difficulty_values() {
    let dir = TempDir::new().unwrap();
    write_single_question_fixtures(&dir);
    run_export(&dir, "csv");

    // 1 of 3 students matched the answer key.
    let content = std::fs::read_to_string(dir.path().join("results/difficulty.csv")).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("qid,correct,total,difficulty"));
    let row = lines.next().unwrap();
    assert!(row.starts_with("Q1,1,3,0.6666666"), "got: {row}");
}

#[test]
fn e2e_detailed_report_values() {
    let dir = TempDir::new().unwrap();
    write_single_question_fixtures(&dir);
    run_export(&dir, "csv");

    let content =
        std::fs::read_to_string(dir.path().join("results/detailed_report.csv")).unwrap();
    assert_eq!(
        content,
        "student,qid,chosen,correct,marks\n\
         student1,Q1,A,A,2.0\n\
         student2,Q1,B,A,-1.0\n\
         student3,Q1,,A,0.0\n"
    );
}

#[test]
fn e2e_json_bundle_round_trips() {
    let dir = TempDir::new().unwrap();
    write_single_question_fixtures(&dir);
    run_export(&dir, "all");

    let raw = std::fs::read_to_string(dir.path().join("results/report.json")).unwrap();
    let report: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(report["rule"], "negative-marking");
    assert_eq!(report["question_count"], 1);
    assert_eq!(report["student_count"], 3);

    let scores = report["scores"].as_array().unwrap();
    assert_eq!(scores.len(), 3);
    assert_eq!(scores[0]["student"], "student1");
    assert_eq!(scores[0]["score"], 2.0);
    assert_eq!(scores[1]["score"], -1.0);
    assert_eq!(scores[2]["score"], 0.0);

    let details = report["details"].as_array().unwrap();
    assert_eq!(details.len(), 3);
    assert!(details[2]["chosen"].is_null() || details[2]["chosen"] == "");
}

#[test]
fn e2e_reports_are_reproducible() {
    let dir = TempDir::new().unwrap();
    write_single_question_fixtures(&dir);

    run_export(&dir, "csv");
    let first = std::fs::read_to_string(dir.path().join("results/report.csv")).unwrap();

    run_export(&dir, "csv");
    let second = std::fs::read_to_string(dir.path().join("results/report.csv")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn e2e_score_and_detailed_agree() {
    let dir = TempDir::new().unwrap();
    write_single_question_fixtures(&dir);
    run_export(&dir, "csv");

    let scores = std::fs::read_to_string(dir.path().join("results/report.csv")).unwrap();
    let details =
        std::fs::read_to_string(dir.path().join("results/detailed_report.csv")).unwrap();

    // With a single-question catalog the per-cell score IS the total.
    for line in scores.lines().skip(1) {
        let (student, total) = line.split_once(',').unwrap();
        let cell = details
            .lines()
            .skip(1)
            .find(|l| l.starts_with(student))
            .unwrap();
        assert!(cell.ends_with(&format!(",{total}")), "{cell} vs {total}");
    }
}
