//! Tag message lookup

use std::sync::LazyLock;

use regex::Regex;

use herald_core::{ChangelogError, GitError, Result};
use herald_git::GitRepo;

/// Armored signature blocks appended to signed tags (PGP, SSH, X.509)
static SIGNATURE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)-*BEGIN (?:[a-z0-9]+ )*SIGNATURE-*.*?-*END (?:[a-z0-9]+ )*SIGNATURE-*",
    )
    .expect("Invalid regex")
});

/// Source of tag messages for released versions
pub trait TagMessageResolver {
    /// Get the raw message of a tag, `Ok(None)` when the tag does not exist
    fn tag_message(&self, tag: &str) -> Result<Option<String>>;
}

/// Resolver for runs without a repository; every tag is treated as missing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTagMessages;

impl TagMessageResolver for NoTagMessages {
    fn tag_message(&self, _tag: &str) -> Result<Option<String>> {
        Ok(None)
    }
}

impl TagMessageResolver for GitRepo {
    fn tag_message(&self, tag: &str) -> Result<Option<String>> {
        GitRepo::tag_message(self, tag).map_err(|e| lookup_failed(tag, e).into())
    }
}

fn lookup_failed(tag: &str, error: GitError) -> ChangelogError {
    ChangelogError::TagLookupFailed {
        tag: tag.to_string(),
        reason: error.to_string(),
    }
}

/// Remove every signature block from a tag message
pub fn strip_signatures(message: &str) -> String {
    SIGNATURE_REGEX.replace_all(message, "").into_owned()
}
