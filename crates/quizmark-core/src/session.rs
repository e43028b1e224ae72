//! The loaded quiz session: catalog, answer key, and response matrix.

use std::path::Path;

use indexmap::IndexMap;

use crate::error::QuizError;
use crate::loader;
use crate::model::Question;

/// Response matrix: student id → question id → chosen option.
pub type ResponseMatrix = IndexMap<String, IndexMap<String, String>>;

/// The three loaded tables for one grading session.
///
/// This is the explicit context every report operation borrows; there is
/// no ambient global state, so independent sessions can coexist. Each
/// index preserves insertion order: reports iterate questions in catalog
/// order and students in order of first appearance.
///
/// The only mutation after construction is a wholesale replacement of one
/// table by a successful `load_*` call; a failed load leaves the previous
/// table in place and never touches the other two.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    /// Question catalog in file order. Its correct-option field drives scoring.
    pub catalog: IndexMap<String, Question>,
    /// Canonical correct option per question, used by difficulty analysis.
    pub answer_key: IndexMap<String, String>,
    /// Chosen option per (student, question).
    pub responses: ResponseMatrix,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the question catalog from a CSV file. Returns the number
    /// of questions loaded.
    pub fn load_questions(&mut self, path: &Path) -> Result<usize, QuizError> {
        let catalog = loader::parse_questions(path)?;
        let count = catalog.len();
        self.catalog = catalog;
        tracing::info!(count, path = %path.display(), "questions loaded");
        Ok(count)
    }

    /// Replace the answer key from a CSV file. Returns the number of entries.
    pub fn load_answers(&mut self, path: &Path) -> Result<usize, QuizError> {
        let key = loader::parse_answers(path)?;
        let count = key.len();
        self.answer_key = key;
        tracing::info!(count, path = %path.display(), "answer key loaded");
        Ok(count)
    }

    /// Replace the response matrix from a CSV file. Returns the number of
    /// students loaded.
    pub fn load_responses(&mut self, path: &Path) -> Result<usize, QuizError> {
        let matrix = loader::parse_responses(path)?;
        let count = matrix.len();
        self.responses = matrix;
        tracing::info!(count, path = %path.display(), "responses loaded");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    const QUESTIONS: &str = "\
id,text,options,correct,marks,penalty
Q1,First question,A|B|C,A,2,1
";

    #[test]
    fn failed_reload_preserves_previous_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_file(&dir, "good.csv", QUESTIONS);
        let bad = write_file(
            &dir,
            "bad.csv",
            "id,text,options,correct,marks,penalty\nQ9,text,A|B,A,not-a-number,1\n",
        );

        let mut session = QuizSession::new();
        session.load_questions(&good).unwrap();
        assert_eq!(session.catalog.len(), 1);

        let err = session.load_questions(&bad).unwrap_err();
        assert!(err.is_load_error());
        // previous catalog untouched
        assert_eq!(session.catalog.len(), 1);
        assert!(session.catalog.contains_key("Q1"));
    }

    #[test]
    fn reload_replaces_responses_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_file(
            &dir,
            "first.csv",
            "student,question,chosen\ns1,Q1,A\ns2,Q1,B\n",
        );
        let second = write_file(&dir, "second.csv", "student,question,chosen\ns3,Q1,C\n");

        let mut session = QuizSession::new();
        session.load_responses(&first).unwrap();
        assert_eq!(session.responses.len(), 2);

        session.load_responses(&second).unwrap();
        assert_eq!(session.responses.len(), 1);
        assert!(!session.responses.contains_key("s1"));
        assert!(session.responses.contains_key("s3"));
    }

    #[test]
    fn failed_load_leaves_other_tables_alone() {
        let dir = tempfile::tempdir().unwrap();
        let questions = write_file(&dir, "questions.csv", QUESTIONS);

        let mut session = QuizSession::new();
        session.load_questions(&questions).unwrap();

        let missing = dir.path().join("nope.csv");
        let err = session.load_responses(&missing).unwrap_err();
        assert!(matches!(err, QuizError::Unreadable { .. }));
        assert_eq!(session.catalog.len(), 1);
        assert!(session.responses.is_empty());
    }

    #[test]
    fn unreadable_file_reports_path() {
        let mut session = QuizSession::new();
        let err = session
            .load_questions(Path::new("does/not/exist.csv"))
            .unwrap_err();
        assert!(err.to_string().contains("does/not/exist.csv"));
    }
}
