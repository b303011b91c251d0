use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Category;
use crate::error::{ReleaseNotesError, Result};

/// File name searched for in the working directory and the user config directory.
pub const CONFIG_FILE_NAME: &str = "release-notes.toml";

/// Represents the complete configuration for release-notes.
///
/// Contains history query settings, footer content, and optional per-category
/// pattern overrides.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub footer: FooterConfig,

    /// Replacement pattern lists keyed by category name. Categories not listed
    /// keep the built-in patterns.
    #[serde(default)]
    pub patterns: BTreeMap<String, Vec<String>>,
}

impl Config {
    /// Pattern overrides with their category names resolved.
    ///
    /// `other` cannot carry patterns; it is the fallback for unmatched subjects.
    pub fn pattern_overrides(&self) -> Result<Vec<(Category, Vec<String>)>> {
        self.patterns
            .iter()
            .map(|(name, patterns)| {
                let category: Category = name.parse()?;
                if category == Category::Other {
                    return Err(ReleaseNotesError::config(
                        "patterns for 'other' are not allowed; it collects unmatched commits",
                    ));
                }
                Ok((category, patterns.clone()))
            })
            .collect()
    }
}

/// Which implementation answers history queries.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// In-process queries through libgit2
    #[default]
    Git2,
    /// `git` subprocesses bounded by `query_timeout_secs`
    Cli,
}

fn default_query_timeout_secs() -> u64 {
    10
}

fn default_bump_marker() -> String {
    "^🔖 Bump version".to_string()
}

fn default_root_hash_length() -> usize {
    8
}

/// Configuration for reading commit history.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HistoryConfig {
    #[serde(default)]
    pub backend: Backend,

    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,

    /// Subjects matching this pattern are dropped before classification
    #[serde(default = "default_bump_marker")]
    pub bump_marker: String,

    /// Length of the root commit hash used when no previous tag exists
    #[serde(default = "default_root_hash_length")]
    pub root_hash_length: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            backend: Backend::default(),
            query_timeout_secs: default_query_timeout_secs(),
            bump_marker: default_bump_marker(),
            root_hash_length: default_root_hash_length(),
        }
    }
}

fn default_docker_image() -> String {
    "groovycodexyz/taschengeld".to_string()
}

fn default_platforms() -> Vec<String> {
    vec![
        "linux/amd64 (Intel/AMD processors)".to_string(),
        "linux/arm64 (Apple Silicon, ARM processors)".to_string(),
    ]
}

fn default_docs_url() -> String {
    "https://taschengeld.groovycode.xyz".to_string()
}

fn default_attribution() -> String {
    "🤖 Generated with release-notes".to_string()
}

/// Values substituted into the static footer of every document.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FooterConfig {
    #[serde(default = "default_docker_image")]
    pub docker_image: String,

    #[serde(default = "default_platforms")]
    pub platforms: Vec<String>,

    #[serde(default = "default_docs_url")]
    pub docs_url: String,

    #[serde(default = "default_attribution")]
    pub attribution: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        FooterConfig {
            docker_image: default_docker_image(),
            platforms: default_platforms(),
            docs_url: default_docs_url(),
            attribution: default_attribution(),
        }
    }
}

/// Locates the configuration file to use, if any.
///
/// Search order:
/// 1. Custom path provided as parameter
/// 2. `release-notes.toml` in current directory
/// 3. `release-notes.toml` in the user config directory
pub fn find_config_file(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

/// Loads configuration from file or returns defaults.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file was found but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    match find_config_file(config_path) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            let config_str = fs::read_to_string(&path)?;
            parse_config(&config_str)
                .map_err(|e| ReleaseNotesError::config(format!("{}: {}", path.display(), e)))
        }
        None => {
            tracing::debug!("no configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Parses configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| ReleaseNotesError::config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_backend_names() {
        let config = parse_config("[history]\nbackend = \"cli\"\n").unwrap();
        assert_eq!(config.history.backend, Backend::Cli);
        assert_eq!(config.history.query_timeout_secs, 10);
    }

    #[test]
    fn test_pattern_overrides_by_category() {
        let config = parse_config(
            r#"
[patterns]
docs = ["^docs: (.+)"]
ui_improvements = ["^style: (.+)"]
"#,
        )
        .unwrap();
        let overrides = config.pattern_overrides().unwrap();
        assert_eq!(overrides.len(), 2);
        assert_eq!(
            overrides[0],
            (Category::Docs, vec!["^docs: (.+)".to_string()])
        );
        assert_eq!(overrides[1].0, Category::UiImprovements);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let config = parse_config("[patterns]\nrefactors = [\"x\"]\n").unwrap();
        assert!(matches!(
            config.pattern_overrides(),
            Err(ReleaseNotesError::Config(_))
        ));
    }

    #[test]
    fn test_other_category_cannot_have_patterns() {
        let config = parse_config("[patterns]\nother = [\"x\"]\n").unwrap();
        assert!(config.pattern_overrides().is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let result = load_config(Some("/nonexistent/release-notes.toml"));
        assert!(matches!(result, Err(ReleaseNotesError::Io(_))));
    }
}
