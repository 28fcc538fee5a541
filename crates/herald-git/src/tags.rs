//! Tag operations

use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use herald_core::error::GitError;

impl GitRepo {
    /// Get the message attached to a tag.
    ///
    /// Annotated tags yield the tag message (including any signature block the
    /// tagger appended). Lightweight tags yield the message of the commit they
    /// point to. Missing tags and names that are not valid references yield
    /// `Ok(None)`.
    #[instrument(skip(self))]
    pub fn tag_message(&self, name: &str) -> Result<Option<String>> {
        let tag_ref = format!("refs/tags/{}", name);

        let reference = match self.repo.find_reference(&tag_ref) {
            Ok(reference) => reference,
            Err(e)
                if matches!(
                    e.code(),
                    git2::ErrorCode::NotFound | git2::ErrorCode::InvalidSpec
                ) =>
            {
                debug!(name, "tag not found");
                return Ok(None);
            }
            Err(e) => return Err(GitError::Git2(e)),
        };

        if let Some(oid) = reference.target() {
            if let Ok(tag) = self.repo.find_tag(oid) {
                let message = tag
                    .message_bytes()
                    .map(|bytes| String::from_utf8_lossy(bytes).into_owned());
                debug!(name, annotated = true, has_message = message.is_some(), "resolved tag message");
                return Ok(message);
            }
        }

        let commit = reference.peel_to_commit()?;
        let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();
        debug!(name, annotated = false, "resolved tag message from commit");
        Ok(Some(message))
    }
}
