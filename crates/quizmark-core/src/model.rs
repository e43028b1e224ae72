//! Core data model types for quizmark.
//!
//! These are the types that the whole quizmark system uses to represent
//! questions and the records derived from them during report generation.

use serde::{Deserialize, Serialize};

/// A single multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier for this question.
    pub id: String,
    /// The question text shown to students.
    pub text: String,
    /// Ordered option labels a student may choose from.
    pub options: Vec<String>,
    /// The option that earns full marks; drives scoring.
    pub correct_option: String,
    /// Score awarded on a correct answer. Non-negative.
    pub marks: f64,
    /// Magnitude subtracted on an incorrect answer. Non-negative.
    pub penalty: f64,
}

/// A student's total score over the whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub student: String,
    pub score: f64,
}

/// Per-question difficulty: the fraction of students who did not answer
/// it correctly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyRecord {
    pub qid: String,
    /// Students whose chosen option matched the answer key.
    pub correct: u32,
    /// Every student in the response matrix, answered or not.
    pub total: u32,
    /// `1 - correct / total`.
    pub difficulty: f64,
}

/// One (student, question) cell of the detailed report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub student: String,
    pub qid: String,
    /// Absent when the student never answered this question.
    pub chosen: Option<String>,
    /// The catalog's correct option.
    pub correct: String,
    /// Per-question score under the active scoring rule.
    pub marks: f64,
}
