//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizmark configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizmarkConfig {
    /// Questions table path.
    #[serde(default = "default_questions")]
    pub questions: PathBuf,
    /// Answer key table path.
    #[serde(default = "default_answers")]
    pub answers: PathBuf,
    /// Responses table path.
    #[serde(default = "default_responses")]
    pub responses: PathBuf,
    /// Directory exported reports are written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Default scoring rule.
    #[serde(default = "default_rule")]
    pub rule: String,
}

fn default_questions() -> PathBuf {
    PathBuf::from("data/questions.csv")
}
fn default_answers() -> PathBuf {
    PathBuf::from("data/answers.csv")
}
fn default_responses() -> PathBuf {
    PathBuf::from("data/responses.csv")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./quizmark-results")
}
fn default_rule() -> String {
    "negative-marking".to_string()
}

impl Default for QuizmarkConfig {
    fn default() -> Self {
        Self {
            questions: default_questions(),
            answers: default_answers(),
            responses: default_responses(),
            output_dir: default_output_dir(),
            rule: default_rule(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order when no path is given:
/// 1. `quizmark.toml` in the current directory
/// 2. `~/.config/quizmark/config.toml`
pub fn load_config_from(path: Option<&Path>) -> Result<QuizmarkConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizmark.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizmarkConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizmarkConfig::default(),
    };

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizmark"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = QuizmarkConfig::default();
        assert_eq!(config.questions, PathBuf::from("data/questions.csv"));
        assert_eq!(config.rule, "negative-marking");
    }

    #[test]
    fn parse_partial_config_fills_defaults() {
        let toml_str = r#"
questions = "tables/q.csv"
output_dir = "out"
"#;
        let config: QuizmarkConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.questions, PathBuf::from("tables/q.csv"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.answers, PathBuf::from("data/answers.csv"));
        assert_eq!(config.rule, "negative-marking");
    }

    #[test]
    fn explicit_missing_path_errors() {
        let err = load_config_from(Some(Path::new("no/such/quizmark.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }
}
