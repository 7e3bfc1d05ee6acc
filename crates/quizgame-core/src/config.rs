//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::DEFAULT_CAPACITY;
use crate::store::{QuestionStore, DEFAULT_QUESTIONS_FILE};

/// Name of the per-directory config file.
pub const CONFIG_FILE_NAME: &str = "quizgame.toml";

/// Top-level quizgame configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Where the question bank lives.
    #[serde(default = "default_questions_file")]
    pub questions_file: PathBuf,
    /// Maximum number of questions kept in a bank.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_questions_file() -> PathBuf {
    PathBuf::from(DEFAULT_QUESTIONS_FILE)
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions_file: default_questions_file(),
            capacity: default_capacity(),
        }
    }
}

impl QuizConfig {
    /// A store for the configured file and capacity.
    pub fn store(&self) -> QuestionStore {
        QuestionStore::new(&self.questions_file).with_capacity(self.capacity)
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizgame.toml` in the current directory
/// 2. `~/.config/quizgame/config.toml`
///
/// Environment variable overrides: `QUIZGAME_QUESTIONS_FILE`, `QUIZGAME_CAPACITY`.
pub fn load_config() -> Result<QuizConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => read_config_file(&path)?,
        None => QuizConfig::default(),
    };

    apply_overrides(&mut config, |key| std::env::var(key).ok())?;
    anyhow::ensure!(config.capacity >= 1, "capacity must be at least 1");

    Ok(config)
}

/// Parse a single config file, without environment overrides.
pub fn read_config_file(path: &Path) -> Result<QuizConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<QuizConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Apply `QUIZGAME_*` overrides, looking each variable up with `lookup`.
fn apply_overrides<F>(config: &mut QuizConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(file) = lookup("QUIZGAME_QUESTIONS_FILE") {
        config.questions_file = PathBuf::from(file);
    }

    if let Some(capacity) = lookup("QUIZGAME_CAPACITY") {
        config.capacity = capacity
            .trim()
            .parse()
            .with_context(|| format!("QUIZGAME_CAPACITY is not a number: {capacity}"))?;
    }

    Ok(())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizgame"))
}
