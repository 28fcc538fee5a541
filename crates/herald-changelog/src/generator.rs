//! Changelog generation

use serde::Serialize;
use tracing::{debug, info, instrument};

use herald_core::error::Result;

use crate::context::RenderContext;
use crate::grouping::{group_entries, Changelog};
use crate::input::decode_commits;
use crate::options::{Templates, WriterOptions};
use crate::transform::{CommitTransformer, TagMessageResolver};
use crate::types::{ChangelogEntry, RawCommit};

/// Everything a template renderer needs for one changelog
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderBundle<'a> {
    /// Repository details for links in templates
    pub context: &'a RenderContext,
    /// Template strings, untouched
    pub templates: &'a Templates,
    /// Grouped entries and notes
    #[serde(flatten)]
    pub changelog: &'a Changelog,
}

/// Changelog generator
pub struct ChangelogGenerator {
    transformer: CommitTransformer,
    context: RenderContext,
}

impl ChangelogGenerator {
    /// Create a generator without tag message lookups
    pub fn new(options: WriterOptions, context: RenderContext) -> Self {
        Self {
            transformer: CommitTransformer::new(options),
            context,
        }
    }

    /// Use a tag message resolver
    pub fn with_resolver<R: TagMessageResolver + 'static>(mut self, resolver: R) -> Self {
        self.transformer = self.transformer.with_resolver(resolver);
        self
    }

    /// Rendering context used for links
    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// Transform commits, keeping the entries that survive
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn transform_all(&self, commits: &[RawCommit]) -> Vec<ChangelogEntry> {
        let entries: Vec<ChangelogEntry> = commits
            .iter()
            .filter_map(|commit| self.transformer.transform(commit, &self.context))
            .collect();

        debug!(
            kept = entries.len(),
            discarded = commits.len() - entries.len(),
            "commits transformed"
        );
        entries
    }

    /// Transform, group and sort commits
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn generate(&self, commits: &[RawCommit]) -> Changelog {
        info!(commit_count = commits.len(), "generating changelog entries");
        let entries = self.transform_all(commits);
        let changelog = group_entries(entries, self.transformer.options().sort());

        debug!(
            group_count = changelog.commit_groups.len(),
            note_group_count = changelog.note_groups.len(),
            "changelog groups built"
        );
        changelog
    }

    /// Decode commit records from JSON and generate in one step
    pub fn generate_from_json(&self, input: &str) -> Result<Changelog> {
        let commits = decode_commits(input)?;
        Ok(self.generate(&commits))
    }

    /// Bundle a changelog with the context and templates for rendering
    pub fn render_bundle<'a>(&'a self, changelog: &'a Changelog) -> RenderBundle<'a> {
        RenderBundle {
            context: &self.context,
            templates: self.transformer.options().templates(),
            changelog,
        }
    }
}
