//! Writer options
//!
//! Everything the transformer, the sort policy and the renderer need for one
//! run, assembled once from configuration and read-only afterwards.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

pub use herald_core::config::TemplatePreset;
use herald_core::config::{
    ChangelogConfig, CommitTypeConfig, Config, TemplatesConfig, VersioningConfig,
};

use crate::grouping::SortPolicy;

/// Template strings passed through to the renderer untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Templates {
    /// Template set the strings belong to
    pub preset: TemplatePreset,
    /// Main template
    pub main_template: String,
    /// Header partial
    pub header_partial: String,
    /// Per-commit partial
    pub commit_partial: String,
    /// Footer partial
    pub footer_partial: String,
}

impl Templates {
    /// Build templates from configuration
    pub fn from_config(config: &TemplatesConfig) -> Self {
        Self {
            preset: config.preset,
            main_template: config.main.clone(),
            header_partial: config.header.clone(),
            commit_partial: config.commit.clone(),
            footer_partial: config.footer.clone(),
        }
    }
}

/// Options for one changelog run
#[derive(Debug, Clone)]
pub struct WriterOptions {
    types: HashMap<String, CommitTypeConfig>,
    hidden: HashSet<String>,
    breaking_title: String,
    versioning: VersioningConfig,
    sort: SortPolicy,
    templates: Templates,
}

impl WriterOptions {
    /// Build options from a loaded configuration
    pub fn from_config(config: &Config) -> Self {
        let sort = SortPolicy {
            notes_sort: config.changelog.notes_sort.clone(),
            ..SortPolicy::default()
        };

        Self::from_changelog(&config.changelog)
            .with_tag_format(config.versioning.tag_format.clone())
            .with_sort(sort)
            .with_templates(Templates::from_config(&config.templates))
    }

    fn from_changelog(changelog: &ChangelogConfig) -> Self {
        let hidden = changelog
            .hidden_types()
            .into_iter()
            .map(str::to_string)
            .collect();

        Self {
            types: changelog.types.clone(),
            hidden,
            breaking_title: changelog.breaking_title.clone(),
            versioning: VersioningConfig::default(),
            sort: SortPolicy::default(),
            templates: Templates::default(),
        }
    }

    /// Use a tag format; `{version}` is replaced by the commit's version
    pub fn with_tag_format(mut self, tag_format: impl Into<String>) -> Self {
        self.versioning.tag_format = tag_format.into();
        self
    }

    /// Use a sort policy
    pub fn with_sort(mut self, sort: SortPolicy) -> Self {
        self.sort = sort;
        self
    }

    /// Use templates
    pub fn with_templates(mut self, templates: Templates) -> Self {
        self.templates = templates;
        self
    }

    /// Whether a raw commit type is in the classification table
    pub fn is_known(&self, commit_type: &str) -> bool {
        self.types.contains_key(commit_type)
    }

    /// Whether a raw commit type is dropped unless it carries notes or a version
    pub fn is_hidden(&self, commit_type: &str) -> bool {
        self.hidden.contains(commit_type)
    }

    /// Section label for a classification key
    pub fn label<'a>(&'a self, type_key: &'a str) -> &'a str {
        self.types
            .get(type_key)
            .map(|t| t.section.as_str())
            .unwrap_or(type_key)
    }

    /// Title given to breaking-change notes
    pub fn breaking_title(&self) -> &str {
        &self.breaking_title
    }

    /// Tag name for a version
    pub fn tag_name(&self, version: &str) -> String {
        self.versioning.tag_name(version)
    }

    /// Sort policy for groups, entries and notes
    pub fn sort(&self) -> &SortPolicy {
        &self.sort
    }

    /// Templates handed to the renderer
    pub fn templates(&self) -> &Templates {
        &self.templates
    }
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self::from_changelog(&ChangelogConfig::default())
    }
}
