//! Configuration types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Main configuration for Herald
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Versioning configuration
    pub versioning: VersioningConfig,

    /// Git configuration
    pub git: GitConfig,

    /// Changelog entry configuration
    pub changelog: ChangelogConfig,

    /// Rendering context overrides
    pub context: ContextConfig,

    /// Template strings handed to the renderer
    pub templates: TemplatesConfig,
}

/// Versioning configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VersioningConfig {
    /// Tag format (e.g., "v{version}")
    pub tag_format: String,
}

impl Default for VersioningConfig {
    fn default() -> Self {
        Self {
            tag_format: "v{version}".to_string(),
        }
    }
}

impl VersioningConfig {
    /// Tag name for a version, e.g. "v1.2.0"
    pub fn tag_name(&self, version: &str) -> String {
        self.tag_format.replace("{version}", version)
    }
}

/// Git configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Remote used to derive the rendering context
    pub remote: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
        }
    }
}

/// Changelog entry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Commit type classification table
    pub types: HashMap<String, CommitTypeConfig>,

    /// Title given to every breaking-change note
    pub breaking_title: String,

    /// Note fields used to order notes within a note group
    pub notes_sort: Vec<NoteSortField>,
}

impl ChangelogConfig {
    /// Keys of the commit types that are dropped unless they carry notes or a version
    pub fn hidden_types(&self) -> Vec<&str> {
        let mut hidden: Vec<&str> = self
            .types
            .iter()
            .filter(|(_, t)| t.hidden)
            .map(|(k, _)| k.as_str())
            .collect();
        hidden.sort_unstable();
        hidden
    }
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        let types = [
            ("feat", "Features", false),
            ("fix", "Bug Fixes", false),
            ("perf", "Performance Improvements", false),
            ("refactor", "Code Refactoring", false),
            ("security", "Security Improvements", false),
            ("docs", "Documentation", false),
            ("style", "Styles", true),
            ("test", "Tests", false),
            ("build", "Build System", false),
            ("chore", "Chores", true),
            ("autogen", "Code Generation", true),
            ("ci", "Continuous Integration", true),
            ("revert", "Reverts", false),
            ("other", "Unclassified", false),
        ]
        .into_iter()
        .map(|(key, section, hidden)| {
            (
                key.to_string(),
                CommitTypeConfig {
                    section: section.to_string(),
                    hidden,
                },
            )
        })
        .collect();

        Self {
            types,
            breaking_title: "Breaking Changes".to_string(),
            notes_sort: vec![NoteSortField::Text],
        }
    }
}

/// Commit type configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitTypeConfig {
    /// Section title in changelog
    pub section: String,

    /// Whether commits of this type are dropped unless they carry notes or a version
    #[serde(default)]
    pub hidden: bool,
}

/// Rendering context overrides
///
/// Any field set here wins over the value derived from the git remote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Host URL (e.g., "https://github.com")
    pub host: Option<String>,

    /// Repository owner
    pub owner: Option<String>,

    /// Repository name
    pub repository: Option<String>,

    /// Full repository URL, used when owner/repository are unknown
    pub repo_url: Option<String>,
}

/// Note fields usable for ordering notes within a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteSortField {
    Title,
    Text,
}

/// Template set shipped with the renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplatePreset {
    /// Changelog file templates
    #[default]
    Default,
    /// Release announcement email templates
    Email,
}

/// Template configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Template set the renderer should use
    pub preset: TemplatePreset,

    /// Main template
    pub main: String,

    /// Header partial
    pub header: String,

    /// Per-commit partial
    pub commit: String,

    /// Footer partial
    pub footer: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            preset: TemplatePreset::Default,
            main: String::new(),
            header: String::new(),
            commit: String::new(),
            footer: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_type_table() {
        let config = ChangelogConfig::default();
        assert_eq!(config.types.len(), 14);
        assert_eq!(config.types["feat"].section, "Features");
        assert_eq!(config.types["other"].section, "Unclassified");
        assert_eq!(config.hidden_types(), vec!["autogen", "chore", "ci", "style"]);
    }

    #[test]
    fn test_tag_name() {
        let versioning = VersioningConfig::default();
        assert_eq!(versioning.tag_name("1.2.0"), "v1.2.0");

        let versioning = VersioningConfig {
            tag_format: "release-{version}".to_string(),
        };
        assert_eq!(versioning.tag_name("1.2.0"), "release-1.2.0");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[context]\nhost = \"https://github.com\"\n").unwrap();
        assert_eq!(config.context.host.as_deref(), Some("https://github.com"));
        assert_eq!(config.versioning.tag_format, "v{version}");
        assert_eq!(config.changelog.breaking_title, "Breaking Changes");
        assert_eq!(config.templates.preset, TemplatePreset::Default);
        assert_eq!(config.changelog.notes_sort, vec![NoteSortField::Text]);
    }

    #[test]
    fn test_typed_fields_parse() {
        let config: Config = toml::from_str(
            "[changelog]\nnotes_sort = [\"title\", \"text\"]\n\n[templates]\npreset = \"email\"\n",
        )
        .unwrap();
        assert_eq!(
            config.changelog.notes_sort,
            vec![NoteSortField::Title, NoteSortField::Text]
        );
        assert_eq!(config.templates.preset, TemplatePreset::Email);
    }

    #[test]
    fn test_unknown_typed_values_rejected() {
        assert!(toml::from_str::<Config>("[changelog]\nnotes_sort = [\"author\"]\n").is_err());
        assert!(toml::from_str::<Config>("[templates]\npreset = \"html\"\n").is_err());
    }
}
