//! JSON report bundle with save/load round-trip.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quizmark_core::error::QuizError;
use quizmark_core::model::{DetailRecord, DifficultyRecord, ScoreRecord};
use quizmark_core::report::{detailed_report, difficulty_analysis, score_report};
use quizmark_core::scoring::ScoringRule;
use quizmark_core::session::QuizSession;

/// A complete quiz report: all three derived record sets plus the
/// metadata needed to interpret them later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Scoring rule the score and detail sections were generated with.
    pub rule: String,
    /// Number of questions in the catalog at generation time.
    pub question_count: usize,
    /// Number of students in the response matrix at generation time.
    pub student_count: usize,
    /// Per-student totals.
    pub scores: Vec<ScoreRecord>,
    /// Per-question difficulty.
    pub difficulty: Vec<DifficultyRecord>,
    /// Per-(student, question) cells.
    pub details: Vec<DetailRecord>,
}

impl QuizReport {
    /// Generate every report section from a loaded session.
    pub fn build(session: &QuizSession, rule: &dyn ScoringRule) -> Result<Self, QuizError> {
        Ok(Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            rule: rule.name().to_string(),
            question_count: session.catalog.len(),
            student_count: session.responses.len(),
            scores: score_report(session, rule),
            difficulty: difficulty_analysis(session)?,
            details: detailed_report(session, rule),
        })
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: QuizReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
