//! Quiz pipeline error types.
//!
//! Defined in `quizmark-core` so callers can classify failures — a table
//! load that must be aborted versus a report request that was rejected —
//! without string matching.

use thiserror::Error;

/// Errors that can occur while loading tables or generating reports.
///
/// Paths are carried as display strings so every message names the file
/// it is about.
#[derive(Debug, Error)]
pub enum QuizError {
    /// A table file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A data row is malformed: missing field, bad number, broken invariant.
    /// `row` is 1-based and counts data rows, the header excluded.
    #[error("{path}: row {row}: {message}")]
    MalformedRow {
        path: String,
        row: usize,
        message: String,
    },

    /// The CSV reader rejected the record stream.
    #[error("{path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// Difficulty is a ratio over loaded students; with none loaded it is undefined.
    #[error("no student responses loaded; difficulty is undefined")]
    NoRespondents,
}

impl QuizError {
    /// Returns `true` if this error aborted a table load, leaving the
    /// previously loaded index in place.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            QuizError::Unreadable { .. } | QuizError::MalformedRow { .. } | QuizError::Csv { .. }
        )
    }
}
