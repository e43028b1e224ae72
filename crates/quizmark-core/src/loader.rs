//! CSV table loaders and cross-table validation.
//!
//! Each loader parses one header-skipped, comma-delimited table into its
//! in-memory index. A loader either returns a complete index or an error;
//! partial state never escapes, so a failed load leaves the caller's
//! previous index untouched.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::QuizError;
use crate::model::Question;
use crate::session::{QuizSession, ResponseMatrix};

fn open(path: &Path) -> Result<File, QuizError> {
    File::open(path).map_err(|source| QuizError::Unreadable {
        path: path.display().to_string(),
        source,
    })
}

fn reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input)
}

fn malformed(path: &Path, row: usize, message: String) -> QuizError {
    QuizError::MalformedRow {
        path: path.display().to_string(),
        row,
        message,
    }
}

fn field<'r>(
    record: &'r csv::StringRecord,
    index: usize,
    name: &str,
    path: &Path,
    row: usize,
) -> Result<&'r str, QuizError> {
    record
        .get(index)
        .ok_or_else(|| malformed(path, row, format!("missing {name} field")))
}

fn non_negative(raw: &str, name: &str, path: &Path, row: usize) -> Result<f64, QuizError> {
    let value: f64 = raw
        .parse()
        .map_err(|_| malformed(path, row, format!("{name} is not a number: '{raw}'")))?;
    if value < 0.0 {
        return Err(malformed(
            path,
            row,
            format!("{name} must be non-negative, got {value}"),
        ));
    }
    Ok(value)
}

/// Parse the questions table: `id,text,option1|option2|...,correct,marks,penalty`.
///
/// Question ids must be non-empty and unique; marks and penalty must be
/// non-negative numbers. Any violation aborts the whole load.
pub fn parse_questions(path: &Path) -> Result<IndexMap<String, Question>, QuizError> {
    parse_questions_from(open(path)?, path)
}

/// Reader variant of [`parse_questions`] (useful for testing).
pub fn parse_questions_from<R: Read>(
    input: R,
    origin: &Path,
) -> Result<IndexMap<String, Question>, QuizError> {
    let mut catalog = IndexMap::new();
    for (index, record) in reader(input).records().enumerate() {
        let row = index + 1;
        let record = record.map_err(|source| QuizError::Csv {
            path: origin.display().to_string(),
            source,
        })?;

        let id = field(&record, 0, "id", origin, row)?.to_string();
        if id.is_empty() {
            return Err(malformed(origin, row, "empty question id".into()));
        }
        let text = field(&record, 1, "text", origin, row)?.to_string();
        let options: Vec<String> = field(&record, 2, "options", origin, row)?
            .split('|')
            .map(str::to_string)
            .collect();
        let correct_option = field(&record, 3, "correct option", origin, row)?.to_string();
        let marks = non_negative(field(&record, 4, "marks", origin, row)?, "marks", origin, row)?;
        let penalty = non_negative(
            field(&record, 5, "penalty", origin, row)?,
            "penalty",
            origin,
            row,
        )?;

        let question = Question {
            id: id.clone(),
            text,
            options,
            correct_option,
            marks,
            penalty,
        };
        if catalog.insert(id.clone(), question).is_some() {
            return Err(malformed(origin, row, format!("duplicate question id: {id}")));
        }
    }
    Ok(catalog)
}

/// Parse the answer key table: `id,correct`.
///
/// A repeated id keeps the last entry, matching response semantics.
pub fn parse_answers(path: &Path) -> Result<IndexMap<String, String>, QuizError> {
    parse_answers_from(open(path)?, path)
}

/// Reader variant of [`parse_answers`] (useful for testing).
pub fn parse_answers_from<R: Read>(
    input: R,
    origin: &Path,
) -> Result<IndexMap<String, String>, QuizError> {
    let mut key = IndexMap::new();
    for (index, record) in reader(input).records().enumerate() {
        let row = index + 1;
        let record = record.map_err(|source| QuizError::Csv {
            path: origin.display().to_string(),
            source,
        })?;

        let id = field(&record, 0, "id", origin, row)?.to_string();
        if id.is_empty() {
            return Err(malformed(origin, row, "empty question id".into()));
        }
        let correct = field(&record, 1, "correct option", origin, row)?.to_string();
        key.insert(id, correct);
    }
    Ok(key)
}

/// Parse the responses table: `studentId,questionId,chosenOption`.
///
/// Rows accumulate into a nested index keyed by student, then question.
/// The chosen option may be blank (an unanswered cell); a duplicate
/// (student, question) pair keeps the last row.
pub fn parse_responses(path: &Path) -> Result<ResponseMatrix, QuizError> {
    parse_responses_from(open(path)?, path)
}

/// Reader variant of [`parse_responses`] (useful for testing).
pub fn parse_responses_from<R: Read>(input: R, origin: &Path) -> Result<ResponseMatrix, QuizError> {
    let mut matrix = ResponseMatrix::new();
    for (index, record) in reader(input).records().enumerate() {
        let row = index + 1;
        let record = record.map_err(|source| QuizError::Csv {
            path: origin.display().to_string(),
            source,
        })?;

        let student = field(&record, 0, "student id", origin, row)?.to_string();
        if student.is_empty() {
            return Err(malformed(origin, row, "empty student id".into()));
        }
        let qid = field(&record, 1, "question id", origin, row)?.to_string();
        if qid.is_empty() {
            return Err(malformed(origin, row, "empty question id".into()));
        }
        let chosen = field(&record, 2, "chosen option", origin, row)?.to_string();

        matrix
            .entry(student)
            .or_insert_with(IndexMap::new)
            .insert(qid, chosen);
    }
    Ok(matrix)
}

/// A warning from cross-table validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question or student the warning is about, if any.
    pub subject: Option<String>,
    /// Warning message.
    pub message: String,
}

fn warn(warnings: &mut Vec<ValidationWarning>, subject: &str, message: String) {
    tracing::warn!(subject, "{message}");
    warnings.push(ValidationWarning {
        subject: Some(subject.to_string()),
        message,
    });
}

/// Check the loaded tables for cross-table inconsistencies.
///
/// These are warnings, not errors: reports can still be generated, but
/// the numbers may not mean what the data's author intended. In
/// particular the catalog's correct-option field (which drives scoring)
/// and the answer key (which drives difficulty analysis) are loaded
/// independently and can disagree.
pub fn validate_session(session: &QuizSession) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for (qid, question) in &session.catalog {
        match session.answer_key.get(qid) {
            None => warn(
                &mut warnings,
                qid,
                "question has no answer key entry; difficulty will count zero correct".into(),
            ),
            Some(key) if !key.eq_ignore_ascii_case(&question.correct_option) => warn(
                &mut warnings,
                qid,
                format!(
                    "answer key '{key}' disagrees with catalog correct option '{}'",
                    question.correct_option
                ),
            ),
            Some(_) => {}
        }
        if !question
            .options
            .iter()
            .any(|o| o.eq_ignore_ascii_case(&question.correct_option))
        {
            warn(
                &mut warnings,
                qid,
                format!(
                    "correct option '{}' is not in the option list",
                    question.correct_option
                ),
            );
        }
    }

    for qid in session.answer_key.keys() {
        if !session.catalog.contains_key(qid) {
            warn(
                &mut warnings,
                qid,
                "answer key entry for a question not in the catalog".into(),
            );
        }
    }

    for (student, answered) in &session.responses {
        if answered.is_empty() {
            warn(&mut warnings, student, "student has no recorded answers".into());
        }
        for (qid, chosen) in answered {
            match session.catalog.get(qid) {
                None => warn(
                    &mut warnings,
                    student,
                    format!("response references unknown question '{qid}'"),
                ),
                Some(question) => {
                    if !chosen.is_empty()
                        && !question.options.iter().any(|o| o.eq_ignore_ascii_case(chosen))
                    {
                        warn(
                            &mut warnings,
                            student,
                            format!("chose '{chosen}' which {qid} does not offer"),
                        );
                    }
                }
            }
        }
    }

    warnings
}
