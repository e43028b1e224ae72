//! Report generation over a loaded session.
//!
//! Every operation here is read-only and stateless: given the same
//! session and rule it produces the same records, in any call order.
//! The score report and the detailed report share the injected
//! [`ScoringRule`], so their per-cell numbers always agree. Difficulty
//! analysis deliberately reads the answer key, not the catalog's
//! correct-option field; the two tables are loaded independently.

use crate::error::QuizError;
use crate::model::{DetailRecord, DifficultyRecord, ScoreRecord};
use crate::scoring::ScoringRule;
use crate::session::QuizSession;

/// Total score per student, students in order of first appearance.
///
/// A question the student never answered contributes 0 (it is passed to
/// the rule as an absent choice, not treated as an error).
pub fn score_report(session: &QuizSession, rule: &dyn ScoringRule) -> Vec<ScoreRecord> {
    session
        .responses
        .iter()
        .map(|(student, answered)| {
            let score: f64 = session
                .catalog
                .values()
                .map(|q| {
                    rule.evaluate(
                        answered.get(&q.id).map(String::as_str),
                        &q.correct_option,
                        q.marks,
                        q.penalty,
                    )
                })
                .sum();
            ScoreRecord {
                student: student.clone(),
                score,
            }
        })
        .collect()
}

/// Per-question difficulty against the answer key, questions in catalog
/// order.
///
/// Every loaded student counts toward the total, answered or not. A
/// question with no answer key entry counts zero correct. With no
/// students loaded the ratio has a zero denominator and the call fails
/// with [`QuizError::NoRespondents`] instead of producing NaN.
pub fn difficulty_analysis(session: &QuizSession) -> Result<Vec<DifficultyRecord>, QuizError> {
    let total = session.responses.len();
    if total == 0 {
        return Err(QuizError::NoRespondents);
    }

    Ok(session
        .catalog
        .keys()
        .map(|qid| {
            let key = session.answer_key.get(qid);
            let correct = session
                .responses
                .values()
                .filter(|answered| match (key, answered.get(qid)) {
                    (Some(correct), Some(chosen)) => chosen.eq_ignore_ascii_case(correct),
                    _ => false,
                })
                .count();
            DifficultyRecord {
                qid: qid.clone(),
                correct: correct as u32,
                total: total as u32,
                difficulty: 1.0 - correct as f64 / total as f64,
            }
        })
        .collect())
}

/// Every (student, question) cell: the full cross-product of loaded
/// students and the catalog, in the same orders as the other reports.
pub fn detailed_report(session: &QuizSession, rule: &dyn ScoringRule) -> Vec<DetailRecord> {
    let mut records = Vec::with_capacity(session.responses.len() * session.catalog.len());
    for (student, answered) in &session.responses {
        for question in session.catalog.values() {
            let chosen = answered.get(&question.id);
            let marks = rule.evaluate(
                chosen.map(String::as_str),
                &question.correct_option,
                question.marks,
                question.penalty,
            );
            records.push(DetailRecord {
                student: student.clone(),
                qid: question.id.clone(),
                chosen: chosen.cloned(),
                correct: question.correct_option.clone(),
                marks,
            });
        }
    }
    records
}
