//! Fold configuration, the applicability rule, and JSON persistence.
//!
//! The fold algorithm is a pure function of (document, configuration); nothing in the kernel
//! reads ambient global state. [`ConfigStore`] is the separate persistence collaborator: it
//! loads the configuration once at startup and writes the file back on every mutation.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default indentation threshold: items indented eight columns or more fold on open.
pub const DEFAULT_FOLD_LEVEL: usize = 8;

/// Which documents auto-folding applies to on open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShowMethod {
    /// Never fold on open.
    #[serde(rename = "none")]
    Never,
    /// Fold every document on open.
    #[serde(rename = "any")]
    Always,
    /// Fold only documents whose tag set intersects the configured list.
    Tagged {
        /// Tags that opt a document in, written with or without a leading `#`.
        tags: Vec<String>,
    },
}

impl ShowMethod {
    /// Decide whether a document carrying `doc_tags` should fold on open.
    ///
    /// Tag comparison is case-insensitive and ignores a leading `#` on either side, so a
    /// configured `detail` matches front-matter `Detail` and inline `#detail` alike.
    pub fn matches(&self, doc_tags: &[String]) -> bool {
        match self {
            ShowMethod::Never => false,
            ShowMethod::Always => true,
            ShowMethod::Tagged { tags } => doc_tags.iter().any(|doc_tag| {
                let doc_tag = normalize_tag(doc_tag);
                tags.iter().any(|tag| normalize_tag(tag) == doc_tag)
            }),
        }
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().trim_start_matches('#').to_lowercase()
}

/// The three persisted fold settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoldConfig {
    /// Indentation threshold: list items at or beyond this depth fold on open.
    pub indentation_fold_level: usize,
    /// Whether to fold every level from the deepest down to the threshold, deepest first.
    pub recursive_fold: bool,
    /// Per-document applicability rule.
    pub show_method: ShowMethod,
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self {
            indentation_fold_level: DEFAULT_FOLD_LEVEL,
            recursive_fold: false,
            show_method: ShowMethod::Always,
        }
    }
}

/// Errors produced by the configuration store.
///
/// These never surface from the fold path itself; folding reads an in-memory snapshot.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    /// Filesystem I/O failed.
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    /// The persisted configuration could not be decoded.
    Json(#[from] serde_json::Error),
}

/// Loads the fold configuration at startup and persists it on every change.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    config: FoldConfig,
}

impl ConfigStore {
    /// Load the configuration from `path`, falling back to defaults when the file is missing.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let config = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!(target: "deepfold::config", "no config at {}, using defaults", path.display());
                FoldConfig::default()
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, config })
    }

    /// The current configuration snapshot.
    pub fn config(&self) -> &FoldConfig {
        &self.config
    }

    /// Path the configuration persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Set the indentation threshold and persist.
    pub fn set_indentation_fold_level(&mut self, level: usize) -> Result<(), ConfigError> {
        self.config.indentation_fold_level = level;
        self.save()
    }

    /// Enable or disable recursive folding and persist.
    pub fn set_recursive_fold(&mut self, recursive: bool) -> Result<(), ConfigError> {
        self.config.recursive_fold = recursive;
        self.save()
    }

    /// Replace the applicability rule and persist.
    pub fn set_show_method(&mut self, method: ShowMethod) -> Result<(), ConfigError> {
        self.config.show_method = method;
        self.save()
    }

    fn save(&self) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(&self.config)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FoldConfig::default();
        assert_eq!(config.indentation_fold_level, 8);
        assert!(!config.recursive_fold);
        assert_eq!(config.show_method, ShowMethod::Always);
    }

    #[test]
    fn test_show_method_never_and_always() {
        let tags = vec!["detail".to_string()];
        assert!(!ShowMethod::Never.matches(&tags));
        assert!(!ShowMethod::Never.matches(&[]));
        assert!(ShowMethod::Always.matches(&[]));
    }

    #[test]
    fn test_tagged_match_is_case_insensitive() {
        let method = ShowMethod::Tagged {
            tags: vec!["detail".to_string()],
        };
        assert!(method.matches(&["Detail".to_string(), "x".to_string()]));
        assert!(!method.matches(&["other".to_string()]));
        assert!(!method.matches(&[]));
    }

    #[test]
    fn test_tagged_match_ignores_leading_marker() {
        let method = ShowMethod::Tagged {
            tags: vec!["#Fold".to_string()],
        };
        assert!(method.matches(&["fold".to_string()]));
        assert!(method.matches(&["#FOLD".to_string()]));
    }

    #[test]
    fn test_show_method_wire_format() {
        let json = serde_json::to_string(&ShowMethod::Never).unwrap();
        assert_eq!(json, r#"{"type":"none"}"#);

        let json = serde_json::to_string(&ShowMethod::Always).unwrap();
        assert_eq!(json, r#"{"type":"any"}"#);

        let method: ShowMethod =
            serde_json::from_str(r#"{"type":"tagged","tags":["a","b"]}"#).unwrap();
        assert_eq!(
            method,
            ShowMethod::Tagged {
                tags: vec!["a".to_string(), "b".to_string()]
            }
        );
    }

    #[test]
    fn test_config_round_trip() {
        let config = FoldConfig {
            indentation_fold_level: 12,
            recursive_fold: true,
            show_method: ShowMethod::Tagged {
                tags: vec!["detail".to_string()],
            },
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: FoldConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: FoldConfig = serde_json::from_str(r#"{"recursive_fold":true}"#).unwrap();
        assert!(config.recursive_fold);
        assert_eq!(config.indentation_fold_level, DEFAULT_FOLD_LEVEL);
    }
}
