//! Changelog types

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A commit record as produced by an upstream commit parser
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawCommit {
    /// Commit type (feat, fix, etc.)
    #[serde(rename = "type")]
    pub commit_type: Option<String>,
    /// Scope (the part in parentheses)
    pub scope: Option<String>,
    /// Subject line without type and scope
    pub subject: Option<String>,
    /// Commit body
    pub body: Option<String>,
    /// Commit footer
    pub footer: Option<String>,
    /// Full commit hash
    pub hash: Option<String>,
    /// Whether this commit reverts another one
    #[serde(deserialize_with = "deserialize_revert")]
    pub revert: bool,
    /// Version tagged on this commit, without the tag prefix
    pub version: Option<String>,
    /// Notes extracted from the footer (breaking changes)
    pub notes: Vec<Note>,
    /// Issue references extracted from the message
    pub references: Vec<Reference>,
    /// Fields the transformation does not touch
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl RawCommit {
    /// Create a commit with a type and subject
    pub fn new(commit_type: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            commit_type: Some(commit_type.into()),
            subject: Some(subject.into()),
            ..Self::default()
        }
    }

    /// Set the scope
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Set the full hash
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    /// Set the body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the footer
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Set the tagged version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Add a note
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Add a reference
    pub fn with_reference(mut self, reference: Reference) -> Self {
        self.references.push(reference);
        self
    }

    /// Mark as a revert
    pub fn reverted(mut self) -> Self {
        self.revert = true;
        self
    }

    /// Tagged version, treating an empty string as untagged
    pub fn tagged_version(&self) -> Option<&str> {
        self.version.as_deref().filter(|v| !v.is_empty())
    }
}

/// A note attached to a commit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Note {
    /// Note group title
    pub title: String,
    /// Note text
    pub text: String,
    /// Whether this note is the release message of a tag
    pub is_release_note: bool,
}

impl Note {
    /// Create a note from parser output
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            is_release_note: false,
        }
    }

    /// Create the release note carrying a tag message
    pub fn release(text: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            text: text.into(),
            is_release_note: true,
        }
    }
}

/// An issue reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    /// Issue number
    #[serde(deserialize_with = "deserialize_issue")]
    pub issue: String,
    /// Parser fields passed through untouched (action, owner, repository, raw, prefix, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Reference {
    /// Create a reference to an issue number
    pub fn new(issue: impl Into<String>) -> Self {
        Self {
            issue: issue.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Add a passthrough field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// A changelog entry ready for rendering
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogEntry {
    /// Section label (e.g. "Features")
    #[serde(rename = "type")]
    pub commit_type: String,
    /// Scope, empty when the commit applied to everything
    pub scope: Option<String>,
    /// Subject with issue and user links
    pub subject: Option<String>,
    /// Full hash, empty when unresolvable
    pub hash: String,
    /// First seven characters of the hash
    pub short_hash: String,
    /// Indented body
    pub body: Option<String>,
    /// Whether the body has content worth rendering
    pub has_body: bool,
    /// Footer as parsed
    pub footer: Option<String>,
    /// Release note first, then breaking-change notes
    pub notes: Vec<Note>,
    /// References not already linked in the subject
    pub references: Vec<Reference>,
    /// Whether this commit reverts another one
    pub revert: bool,
    /// Version tagged on this commit
    pub version: Option<String>,
    /// Issue numbers linked in the subject
    #[serde(skip)]
    pub issues: Vec<String>,
    /// Fields passed through from the raw commit
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ChangelogEntry {
    /// Serialized names of the fields an entry always carries
    pub const FIELDS: &'static [&'static str] = &[
        "type",
        "scope",
        "subject",
        "hash",
        "shortHash",
        "body",
        "hasBody",
        "footer",
        "notes",
        "references",
        "revert",
        "version",
    ];
}

/// Parsers emit `revert` as an object or `null`; plain booleans are accepted too.
fn deserialize_revert<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        _ => true,
    })
}

fn deserialize_issue<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected issue number, found {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_parser_output() {
        let commit: RawCommit = serde_json::from_value(json!({
            "type": "feat",
            "scope": null,
            "subject": "add support",
            "header": "feat: add support",
            "hash": "abcdef1234567",
            "revert": null,
            "notes": [{ "title": "BREAKING CHANGE", "text": "removed flag" }],
            "references": [{ "action": "Closes", "issue": "42", "raw": "#42" }]
        }))
        .unwrap();

        assert_eq!(commit.commit_type.as_deref(), Some("feat"));
        assert!(commit.scope.is_none());
        assert!(!commit.revert);
        assert_eq!(commit.notes[0].title, "BREAKING CHANGE");
        assert!(!commit.notes[0].is_release_note);
        assert_eq!(commit.references[0].issue, "42");
        assert_eq!(commit.references[0].extra["action"], json!("Closes"));
        assert_eq!(commit.extra["header"], json!("feat: add support"));
    }

    #[test]
    fn test_revert_object_is_truthy() {
        let commit: RawCommit = serde_json::from_value(json!({
            "type": null,
            "revert": { "header": "feat: thing", "hash": "abc" }
        }))
        .unwrap();
        assert!(commit.revert);

        let commit: RawCommit = serde_json::from_value(json!({ "revert": true })).unwrap();
        assert!(commit.revert);
    }

    #[test]
    fn test_numeric_issue() {
        let reference: Reference = serde_json::from_value(json!({ "issue": 7 })).unwrap();
        assert_eq!(reference.issue, "7");
        assert!(serde_json::from_value::<Reference>(json!({ "issue": [] })).is_err());
    }

    #[test]
    fn test_tagged_version_ignores_empty() {
        assert_eq!(RawCommit::default().with_version("").tagged_version(), None);
        assert_eq!(
            RawCommit::default().with_version("1.0.0").tagged_version(),
            Some("1.0.0")
        );
    }

    #[test]
    fn test_entry_serializes_render_contract() {
        let entry = ChangelogEntry {
            commit_type: "Features".to_string(),
            short_hash: "abcdef1".to_string(),
            has_body: true,
            issues: vec!["42".to_string()],
            notes: vec![Note::release("Release message")],
            ..ChangelogEntry::default()
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], json!("Features"));
        assert_eq!(value["shortHash"], json!("abcdef1"));
        assert_eq!(value["hasBody"], json!(true));
        assert_eq!(value["notes"][0]["isReleaseNote"], json!(true));
        assert!(value.get("issues").is_none());
    }
}
