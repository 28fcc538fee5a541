//! Grouping and sort policy
//!
//! Entries are bucketed by section label; groups, entries and notes are then
//! ordered by plain lexicographic comparison of the configured fields. Every
//! sort is stable, so ties keep their input order.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use herald_core::config::NoteSortField;

use crate::types::{ChangelogEntry, Note};

/// Entry fields usable for ordering entries within a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitSortField {
    Type,
    Scope,
    Subject,
}

impl CommitSortField {
    fn value<'a>(&self, entry: &'a ChangelogEntry) -> &'a str {
        match self {
            Self::Type => &entry.commit_type,
            Self::Scope => entry.scope.as_deref().unwrap_or_default(),
            Self::Subject => entry.subject.as_deref().unwrap_or_default(),
        }
    }
}

fn note_field(field: NoteSortField, note: &Note) -> &str {
    match field {
        NoteSortField::Title => &note.title,
        NoteSortField::Text => &note.text,
    }
}

/// How groups, entries and notes are ordered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortPolicy {
    /// Fields compared, in order, to sort entries within a group
    pub commits_sort: Vec<CommitSortField>,
    /// Fields compared, in order, to sort notes within a group
    pub notes_sort: Vec<NoteSortField>,
}

impl Default for SortPolicy {
    fn default() -> Self {
        Self {
            commits_sort: vec![
                CommitSortField::Type,
                CommitSortField::Scope,
                CommitSortField::Subject,
            ],
            notes_sort: vec![NoteSortField::Text],
        }
    }
}

impl SortPolicy {
    /// Compare two entries by the configured fields
    pub fn compare_entries(&self, a: &ChangelogEntry, b: &ChangelogEntry) -> Ordering {
        self.commits_sort
            .iter()
            .map(|field| field.value(a).cmp(field.value(b)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Compare two notes by the configured fields
    pub fn compare_notes(&self, a: &Note, b: &Note) -> Ordering {
        self.notes_sort
            .iter()
            .map(|&field| note_field(field, a).cmp(note_field(field, b)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

/// Entries sharing a section label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitGroup {
    /// Section label
    pub title: String,
    /// Entries in this section
    pub commits: Vec<ChangelogEntry>,
}

/// Notes sharing a title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteGroup {
    /// Note title; empty for tag release messages
    pub title: String,
    /// Notes in this group
    pub notes: Vec<Note>,
}

/// Grouped and ordered changelog content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Changelog {
    /// Entry groups ordered by title
    pub commit_groups: Vec<CommitGroup>,
    /// Note groups ordered by title
    pub note_groups: Vec<NoteGroup>,
}

impl Changelog {
    /// Total number of entries across groups
    pub fn entry_count(&self) -> usize {
        self.commit_groups.iter().map(|g| g.commits.len()).sum()
    }

    /// Check if there is nothing to render
    pub fn is_empty(&self) -> bool {
        self.commit_groups.is_empty() && self.note_groups.is_empty()
    }
}

/// Group entries by section label and notes by title, then apply the sort policy
pub fn group_entries(entries: Vec<ChangelogEntry>, policy: &SortPolicy) -> Changelog {
    let mut notes_by_title: BTreeMap<String, Vec<Note>> = BTreeMap::new();
    for note in entries.iter().flat_map(|entry| entry.notes.iter()) {
        notes_by_title
            .entry(note.title.clone())
            .or_default()
            .push(note.clone());
    }

    let mut entries_by_type: BTreeMap<String, Vec<ChangelogEntry>> = BTreeMap::new();
    for entry in entries {
        entries_by_type
            .entry(entry.commit_type.clone())
            .or_default()
            .push(entry);
    }

    let commit_groups = entries_by_type
        .into_iter()
        .map(|(title, mut commits)| {
            commits.sort_by(|a, b| policy.compare_entries(a, b));
            CommitGroup { title, commits }
        })
        .collect();

    let note_groups = notes_by_title
        .into_iter()
        .map(|(title, mut notes)| {
            notes.sort_by(|a, b| policy.compare_notes(a, b));
            NoteGroup { title, notes }
        })
        .collect();

    Changelog {
        commit_groups,
        note_groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(commit_type: &str, scope: Option<&str>, subject: &str, hash: &str) -> ChangelogEntry {
        ChangelogEntry {
            commit_type: commit_type.to_string(),
            scope: scope.map(str::to_string),
            subject: Some(subject.to_string()),
            hash: hash.to_string(),
            ..ChangelogEntry::default()
        }
    }

    #[test]
    fn test_groups_sorted_by_title() {
        let changelog = group_entries(
            vec![
                entry("Features", None, "b", "1"),
                entry("Bug Fixes", None, "a", "2"),
                entry("Documentation", None, "c", "3"),
            ],
            &SortPolicy::default(),
        );

        let titles: Vec<&str> = changelog
            .commit_groups
            .iter()
            .map(|g| g.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Bug Fixes", "Documentation", "Features"]);
        assert_eq!(changelog.entry_count(), 3);
    }

    #[test]
    fn test_entries_sorted_by_scope_then_subject() {
        let changelog = group_entries(
            vec![
                entry("Features", Some("cli"), "Zed", "1"),
                entry("Features", None, "Later", "2"),
                entry("Features", Some("api"), "Beta", "3"),
                entry("Features", Some("api"), "Alpha", "4"),
            ],
            &SortPolicy::default(),
        );

        let hashes: Vec<&str> = changelog.commit_groups[0]
            .commits
            .iter()
            .map(|e| e.hash.as_str())
            .collect();
        assert_eq!(hashes, vec!["2", "4", "3", "1"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let changelog = group_entries(
            vec![
                entry("Bug Fixes", Some("core"), "Same", "first"),
                entry("Bug Fixes", Some("core"), "Same", "second"),
                entry("Bug Fixes", Some("core"), "Same", "third"),
            ],
            &SortPolicy::default(),
        );

        let hashes: Vec<&str> = changelog.commit_groups[0]
            .commits
            .iter()
            .map(|e| e.hash.as_str())
            .collect();
        assert_eq!(hashes, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_uppercase_sorts_before_lowercase() {
        let changelog = group_entries(
            vec![
                entry("Features", None, "apple", "1"),
                entry("Features", None, "Zebra", "2"),
            ],
            &SortPolicy::default(),
        );
        assert_eq!(changelog.commit_groups[0].commits[0].hash, "2");
    }

    #[test]
    fn test_note_groups() {
        let mut tagged = entry("Bug Fixes", None, "a", "1");
        tagged.notes = vec![
            Note::release("Release 1.2.0"),
            Note {
                title: "Breaking Changes".to_string(),
                text: "z removed".to_string(),
                is_release_note: false,
            },
        ];
        let mut other = entry("Features", None, "b", "2");
        other.notes = vec![Note {
            title: "Breaking Changes".to_string(),
            text: "a renamed".to_string(),
            is_release_note: false,
        }];

        let changelog = group_entries(vec![tagged, other], &SortPolicy::default());

        assert_eq!(changelog.note_groups.len(), 2);
        assert_eq!(changelog.note_groups[0].title, "");
        assert!(changelog.note_groups[0].notes[0].is_release_note);
        assert_eq!(changelog.note_groups[1].title, "Breaking Changes");
        let texts: Vec<&str> = changelog.note_groups[1]
            .notes
            .iter()
            .map(|n| n.text.as_str())
            .collect();
        assert_eq!(texts, vec!["a renamed", "z removed"]);
    }

    #[test]
    fn test_notes_without_sort_fields_keep_order() {
        let policy = SortPolicy {
            notes_sort: Vec::new(),
            ..SortPolicy::default()
        };
        let mut e = entry("Features", None, "a", "1");
        e.notes = vec![Note::new("Breaking Changes", "z"), Note::new("Breaking Changes", "a")];

        let changelog = group_entries(vec![e], &policy);
        assert_eq!(changelog.note_groups[0].notes[0].text, "z");
    }

    #[test]
    fn test_empty() {
        let changelog = group_entries(Vec::new(), &SortPolicy::default());
        assert!(changelog.is_empty());
    }
}
