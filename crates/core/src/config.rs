use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Evaluation configuration: the label vocabulary and dump-file paths.
///
/// The vocabulary is caller-supplied and ordered; it often follows a
/// task-specific convention rather than an alphabetical one, so order is
/// preserved exactly. Validation (non-empty, no duplicates) happens when the
/// engine is constructed, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Ordered label vocabulary
    pub labels: Vec<String>,

    /// Output path for records whose labels agree
    #[serde(default = "default_correct_file")]
    pub correct_file: PathBuf,

    /// Output path for records whose labels disagree
    #[serde(default = "default_wrong_file")]
    pub wrong_file: PathBuf,
}

fn default_correct_file() -> PathBuf {
    PathBuf::from("correct_predictions.txt")
}

fn default_wrong_file() -> PathBuf {
    PathBuf::from("wrong_predictions.txt")
}

impl EvalConfig {
    /// Create a configuration with the default dump-file paths.
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            correct_file: default_correct_file(),
            wrong_file: default_wrong_file(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::file_not_found(path));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Failed to parse TOML: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_toml_str_applies_dump_path_defaults() {
        let config = EvalConfig::from_toml_str(r#"labels = ["I-NP", "B-NP"]"#)
            .expect("valid TOML");
        assert_eq!(config.labels, ["I-NP", "B-NP"]);
        assert_eq!(config.correct_file, PathBuf::from("correct_predictions.txt"));
        assert_eq!(config.wrong_file, PathBuf::from("wrong_predictions.txt"));
    }

    #[test]
    fn from_toml_str_honors_explicit_paths() {
        let config = EvalConfig::from_toml_str(
            r#"
            labels = ["A"]
            correct_file = "ok.txt"
            wrong_file = "bad.txt"
            "#,
        )
        .expect("valid TOML");
        assert_eq!(config.correct_file, PathBuf::from("ok.txt"));
        assert_eq!(config.wrong_file, PathBuf::from("bad.txt"));
    }

    #[test]
    fn from_toml_str_rejects_missing_labels() {
        let result = EvalConfig::from_toml_str(r#"correct_file = "ok.txt""#);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse TOML"));
    }
}
