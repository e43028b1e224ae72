//! Subcommand implementations.

pub mod answers;
pub mod detailed;
pub mod difficulty;
pub mod export;
pub mod init;
pub mod questions;
pub mod score;
pub mod shell;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use quizmark_core::scoring::{self, ScoringRule};
use quizmark_core::session::QuizSession;

use crate::config;

/// Table path flags shared by every data-loading command. Flags override
/// config file values, which override the built-in defaults.
#[derive(Debug, clap::Args)]
pub struct TableArgs {
    /// Path to the questions CSV
    #[arg(long)]
    pub questions: Option<PathBuf>,

    /// Path to the answer key CSV
    #[arg(long)]
    pub answers: Option<PathBuf>,

    /// Path to the responses CSV
    #[arg(long)]
    pub responses: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl TableArgs {
    /// Resolve paths against the config file and load all three tables.
    pub fn load_session(&self) -> Result<QuizSession> {
        let cfg = config::load_config_from(self.config.as_deref())?;
        let questions = self.questions.clone().unwrap_or(cfg.questions);
        let answers = self.answers.clone().unwrap_or(cfg.answers);
        let responses = self.responses.clone().unwrap_or(cfg.responses);
        tracing::debug!(
            questions = %questions.display(),
            answers = %answers.display(),
            responses = %responses.display(),
            "loading tables"
        );

        let mut session = QuizSession::new();
        session.load_questions(&questions)?;
        session.load_answers(&answers)?;
        session.load_responses(&responses)?;
        Ok(session)
    }
}

/// Look up a scoring rule by CLI name.
pub fn resolve_rule(name: &str) -> Result<Box<dyn ScoringRule>> {
    scoring::rule_by_name(name).ok_or_else(|| {
        anyhow::anyhow!("unknown scoring rule: '{name}' (expected negative-marking or no-penalty)")
    })
}
