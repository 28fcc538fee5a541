//! Commit entry transformation
//!
//! Turns one [`RawCommit`] into a [`ChangelogEntry`], or drops it when its
//! type is hidden and nothing forces it into the changelog. The input record
//! is never modified; every entry is a new value.

mod body;
mod tag;

pub use body::{format_body, FormattedBody};
pub use tag::{strip_signatures, NoTagMessages, TagMessageResolver};

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::context::RenderContext;
use crate::options::WriterOptions;
use crate::rewrite::rewrite_subject;
use crate::types::{ChangelogEntry, Note, RawCommit};

/// Commit type used for reverts
const REVERT_TYPE: &str = "revert";

/// Commit type used for anything not in the classification table
const OTHER_TYPE: &str = "other";

/// Transforms raw commits into changelog entries
pub struct CommitTransformer {
    options: WriterOptions,
    resolver: Box<dyn TagMessageResolver>,
}

impl CommitTransformer {
    /// Create a transformer that never finds tag messages
    pub fn new(options: WriterOptions) -> Self {
        Self {
            options,
            resolver: Box::new(NoTagMessages),
        }
    }

    /// Use a tag message resolver
    pub fn with_resolver<R: TagMessageResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Writer options in use
    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Transform a commit, returning `None` when it is discarded
    pub fn transform(&self, commit: &RawCommit, context: &RenderContext) -> Option<ChangelogEntry> {
        let raw_type = commit.commit_type.as_deref();
        let version = commit.tagged_version();

        if let Some(raw_type) = raw_type {
            if self.options.is_hidden(raw_type) && commit.notes.is_empty() && version.is_none() {
                debug!(
                    commit_type = raw_type,
                    hash = commit.hash.as_deref().unwrap_or_default(),
                    "discarding hidden commit"
                );
                return None;
            }
        }

        let type_key = self.classify(commit);

        let mut notes = Vec::with_capacity(commit.notes.len() + 1);
        if let Some(version) = version {
            if let Some(message) = self.release_message(version) {
                notes.push(Note::release(message));
            }
        }
        notes.extend(commit.notes.iter().map(|note| Note {
            title: self.options.breaking_title().to_string(),
            text: note.text.clone(),
            is_release_note: false,
        }));

        let scope = commit.scope.as_deref().map(|scope| {
            if scope == "*" {
                String::new()
            } else {
                scope.to_string()
            }
        });

        let (hash, short_hash) = resolve_hash(commit);

        let (subject, issues) = match commit.subject.as_deref() {
            Some(subject) => {
                let rewrite = rewrite_subject(subject, context);
                (Some(rewrite.subject), rewrite.issues)
            }
            None => (None, Vec::new()),
        };

        let references = commit
            .references
            .iter()
            .filter(|reference| !issues.contains(&reference.issue))
            .cloned()
            .collect();

        let (body, has_body) = match commit.body.as_deref() {
            Some(body) => {
                let formatted = format_body(body);
                (Some(formatted.text), formatted.has_body)
            }
            None => (None, false),
        };

        Some(ChangelogEntry {
            commit_type: self.options.label(type_key).to_string(),
            scope,
            subject,
            hash,
            short_hash,
            body,
            has_body,
            footer: commit.footer.clone(),
            notes,
            references,
            revert: commit.revert,
            version: commit.version.clone(),
            issues,
            extra: passthrough_fields(commit),
        })
    }

    /// Classification key: reverts first, then known types, then "other"
    fn classify<'a>(&self, commit: &'a RawCommit) -> &'a str {
        if commit.revert {
            return REVERT_TYPE;
        }

        match commit.commit_type.as_deref() {
            Some(raw_type) if self.options.is_known(raw_type) => raw_type,
            _ => OTHER_TYPE,
        }
    }

    /// Tag message for a version with signatures removed, `None` when there is nothing to show
    fn release_message(&self, version: &str) -> Option<String> {
        let tag = self.options.tag_name(version);

        let message = match self.resolver.tag_message(&tag) {
            Ok(message) => message?,
            Err(e) => {
                warn!(tag = %tag, error = %e, "tag message lookup failed, continuing without it");
                return None;
            }
        };

        let message = strip_signatures(&message);
        if message.trim().is_empty() {
            debug!(tag = %tag, "tag has no message");
            return None;
        }

        Some(message)
    }
}

/// Raw fields carried onto the entry, minus any that the entry computes itself
fn passthrough_fields(commit: &RawCommit) -> BTreeMap<String, Value> {
    commit
        .extra
        .iter()
        .filter(|(key, _)| !ChangelogEntry::FIELDS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Full and short hash, recovering the hash from the footer's last line when missing
fn resolve_hash(commit: &RawCommit) -> (String, String) {
    let hash = match commit.hash.as_deref().map(str::trim) {
        Some(hash) if !hash.is_empty() => hash.to_string(),
        _ => {
            let recovered = commit
                .footer
                .as_deref()
                .and_then(|footer| footer.lines().rev().find(|line| !line.trim().is_empty()))
                .map(|line| line.replace(['"', '\''], "").trim().to_string())
                .unwrap_or_default();
            debug!(recovered = %recovered, "commit hash missing, recovered from footer");
            recovered
        }
    };

    let short_hash: String = hash.chars().take(7).collect();
    (hash, short_hash)
}
