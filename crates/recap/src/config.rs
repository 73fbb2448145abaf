//! Configuration management for Recap
//!
//! Holds the tunables of the summarization pipeline. Every field falls back
//! to its default when missing from the JSON file, so a partial file such as
//! `{"top_n": 8}` is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{RecapError, Result};

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV_VAR: &str = "RECAP_CONFIG";

/// Words whose presence (as a substring) marks a message as actionable
pub const DEFAULT_ACTION_KEYWORDS: &[&str] =
  &["should", "need", "plan", "decide", "focus", "do", "complete", "try", "test"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
  /// Number of keywords extracted per transcript
  #[serde(default = "default_top_n")]
  pub top_n: usize,
  /// Tokens must be strictly longer than this to count as keywords
  #[serde(default = "default_min_keyword_len")]
  pub min_keyword_len: usize,
  /// Leading messages quoted in each topic summary
  #[serde(default = "default_snippet_messages")]
  pub snippet_messages: usize,
  /// Action excerpts appended to a topic summary
  #[serde(default = "default_max_actions")]
  pub max_actions: usize,
  /// Topic labels named in the overall summary
  #[serde(default = "default_overview_topics")]
  pub overview_topics: usize,
  #[serde(default = "default_action_keywords")]
  pub action_keywords: Vec<String>,
}

fn default_top_n() -> usize {
  5
}
fn default_min_keyword_len() -> usize {
  crate::keywords::DEFAULT_MIN_KEYWORD_LEN
}
fn default_snippet_messages() -> usize {
  2
}
fn default_max_actions() -> usize {
  2
}
fn default_overview_topics() -> usize {
  5
}
fn default_action_keywords() -> Vec<String> {
  DEFAULT_ACTION_KEYWORDS.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
  fn default() -> Self {
    Self {
      top_n: default_top_n(),
      min_keyword_len: default_min_keyword_len(),
      snippet_messages: default_snippet_messages(),
      max_actions: default_max_actions(),
      overview_topics: default_overview_topics(),
      action_keywords: default_action_keywords(),
    }
  }
}

impl Config {
  /// Load configuration from a file
  pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
  }

  /// Load configuration from `$RECAP_CONFIG`, the working directory, the user
  /// config directory, or defaults, in that order
  pub fn load() -> Result<Self> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
      return Self::load_from_file(path);
    }

    for path in Self::candidate_paths() {
      if path.exists() {
        tracing::debug!(path = %path.display(), "loading config");
        return Self::load_from_file(path);
      }
    }

    Ok(Config::default())
  }

  fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("recap.json"), PathBuf::from(".recap.json")];
    if let Some(config_dir) = dirs::config_dir() {
      paths.push(config_dir.join("recap").join("config.json"));
    }
    paths
  }

  /// Save configuration to a file
  pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
    let content = serde_json::to_string_pretty(self)?;
    std::fs::write(path, content)?;
    Ok(())
  }

  pub fn validate(&self) -> Result<()> {
    if self.top_n == 0 {
      return Err(RecapError::config("top_n must be at least 1"));
    }
    if self.action_keywords.is_empty() {
      return Err(RecapError::config("action_keywords must not be empty"));
    }
    if self.action_keywords.iter().any(|kw| kw.is_empty()) {
      return Err(RecapError::config("action_keywords must not contain empty words"));
    }
    Ok(())
  }

  /// Lowercased action words, the form the summary generator matches on
  pub fn action_keywords_lowercase(&self) -> Vec<String> {
    self.action_keywords.iter().map(|kw| kw.to_lowercase()).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;
  use std::fs;
  use tempfile::TempDir;

  #[test]
  fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.top_n, 5);
    assert_eq!(config.min_keyword_len, 3);
    assert_eq!(config.snippet_messages, 2);
    assert_eq!(config.max_actions, 2);
    assert_eq!(config.overview_topics, 5);
    assert_eq!(config.action_keywords.len(), 9);
    assert!(config.action_keywords.contains(&"need".to_string()));
  }

  #[test]
  fn test_config_load_nonexistent_file() {
    let result = Config::load_from_file(Path::new("nonexistent.json"));
    assert!(matches!(result, Err(RecapError::Io(_))));
  }

  #[test]
  fn test_config_load_partial_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("recap.json");
    fs::write(&config_path, r#"{ "top_n": 8, "max_actions": 1 }"#).unwrap();

    let config = Config::load_from_file(&config_path).unwrap();
    assert_eq!(config.top_n, 8);
    assert_eq!(config.max_actions, 1);
    assert_eq!(config.snippet_messages, 2);
    assert_eq!(config.action_keywords, default_action_keywords());
  }

  #[test]
  fn test_config_load_invalid_json() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("recap.json");
    fs::write(&config_path, "{ not json").unwrap();

    let result = Config::load_from_file(&config_path);
    assert!(matches!(result, Err(RecapError::Json(_))));
  }

  #[test]
  fn test_config_rejects_zero_top_n() {
    let config = Config { top_n: 0, ..Config::default() };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("top_n"));
  }

  #[test]
  fn test_config_rejects_empty_action_keywords() {
    let config = Config { action_keywords: vec![], ..Config::default() };
    assert!(config.validate().is_err());

    let config = Config { action_keywords: vec!["".to_string()], ..Config::default() };
    assert!(config.validate().is_err());
  }

  #[test]
  fn test_config_save_and_reload() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("saved.json");

    let config = Config { overview_topics: 3, ..Config::default() };
    config.save_to_file(&config_path).unwrap();

    let reloaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(reloaded, config);
  }

  #[test]
  #[serial]
  fn test_config_load_from_env_var() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("env.json");
    fs::write(&config_path, r#"{ "top_n": 2 }"#).unwrap();

    std::env::set_var(CONFIG_ENV_VAR, &config_path);
    let config = Config::load();
    std::env::remove_var(CONFIG_ENV_VAR);

    assert_eq!(config.unwrap().top_n, 2);
  }

  /// Run `f` with the working directory switched to `dir`
  fn in_dir<T>(dir: &Path, f: impl FnOnce() -> T) -> T {
    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir).unwrap();
    let result = f();
    std::env::set_current_dir(original).unwrap();
    result
  }

  #[test]
  #[serial]
  fn test_config_load_from_working_dir() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("recap.json"), r#"{ "top_n": 3 }"#).unwrap();

    std::env::remove_var(CONFIG_ENV_VAR);
    let config = in_dir(temp_dir.path(), Config::load);

    assert_eq!(config.unwrap().top_n, 3);
  }

  #[test]
  #[serial]
  fn test_config_load_from_hidden_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".recap.json"), r#"{ "top_n": 4 }"#).unwrap();

    std::env::remove_var(CONFIG_ENV_VAR);
    let config = in_dir(temp_dir.path(), Config::load);

    assert_eq!(config.unwrap().top_n, 4);
  }

  #[test]
  #[serial]
  fn test_config_visible_file_beats_hidden_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("recap.json"), r#"{ "top_n": 3 }"#).unwrap();
    fs::write(temp_dir.path().join(".recap.json"), r#"{ "top_n": 4 }"#).unwrap();

    std::env::remove_var(CONFIG_ENV_VAR);
    let config = in_dir(temp_dir.path(), Config::load);

    assert_eq!(config.unwrap().top_n, 3);
  }

  #[test]
  #[serial]
  fn test_config_env_var_beats_working_dir() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("recap.json"), r#"{ "top_n": 3 }"#).unwrap();
    let env_path = temp_dir.path().join("env.json");
    fs::write(&env_path, r#"{ "top_n": 2 }"#).unwrap();

    std::env::set_var(CONFIG_ENV_VAR, &env_path);
    let config = in_dir(temp_dir.path(), Config::load);
    std::env::remove_var(CONFIG_ENV_VAR);

    assert_eq!(config.unwrap().top_n, 2);
  }

  #[test]
  fn test_action_keywords_lowercase() {
    let config =
      Config { action_keywords: vec!["Should".to_string(), "TRY".to_string()], ..Config::default() };
    assert_eq!(config.action_keywords_lowercase(), vec!["should", "try"]);
  }
}
