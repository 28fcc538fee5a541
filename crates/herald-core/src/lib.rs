//! Herald Core - Shared error and configuration types
//!
//! This crate provides the error hierarchy and the configuration model used by
//! the git, changelog and CLI crates.

pub mod config;
pub mod error;

pub use config::{
    ChangelogConfig, CommitTypeConfig, Config, ContextConfig, NoteSortField, TemplatePreset,
    TemplatesConfig,
};
pub use error::{ChangelogError, ConfigError, GitError, HeraldError, Result};
