//! Error types for Herald

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across Herald crates
pub type Result<T> = std::result::Result<T, HeraldError>;

/// Top-level error, one variant per subsystem
#[derive(Debug, Error)]
pub enum HeraldError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Changelog(#[from] ChangelogError),
}

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config file in the directory or any parent
    #[error("no herald config found from {0}")]
    NotFound(PathBuf),

    /// A value failed validation
    #[error("invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("malformed TOML config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Repository access errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Neither the path nor any parent holds a repository
    #[error("not inside a git repository: {0}")]
    NotARepository(PathBuf),

    /// The repository exists but libgit2 refused to open it
    #[error("could not open repository at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    /// The configured remote does not exist
    #[error("no remote named {0}")]
    RemoteNotFound(String),

    #[error(transparent)]
    Git2(#[from] git2::Error),
}

/// Commit input and entry generation errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Input could not be split into records at all
    #[error("commit input is not a JSON array or JSON lines: {0}")]
    InvalidInput(String),

    /// One record could not be decoded into a commit
    #[error("commit record {index} is malformed: {reason}")]
    DecodeFailed { index: usize, reason: String },

    /// A tag message lookup failed for a reason other than the tag missing
    #[error("tag {tag} could not be read: {reason}")]
    TagLookupFailed { tag: String, reason: String },
}
