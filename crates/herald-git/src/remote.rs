//! Remote operations

use tracing::debug;

use crate::repository::{GitRepo, Result};
use crate::types::RemoteInfo;
use herald_core::error::GitError;

impl GitRepo {
    /// Get the URL for a remote
    pub fn remote_url(&self, name: &str) -> Result<Option<String>> {
        match self.repo.find_remote(name) {
            Ok(remote) => Ok(remote.url().map(|s| s.to_string())),
            Err(e) if e.code() == git2::ErrorCode::NotFound => {
                Err(GitError::RemoteNotFound(name.to_string()))
            }
            Err(e) => Err(GitError::Git2(e)),
        }
    }

    /// Get the hosting details of a remote, if its URL is recognized
    pub fn remote_info(&self, name: &str) -> Result<Option<RemoteInfo>> {
        let info = self
            .remote_url(name)?
            .as_deref()
            .and_then(RemoteInfo::parse);
        debug!(remote = name, recognized = info.is_some(), "resolved remote info");
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Repository;
    use tempfile::TempDir;

    #[test]
    fn test_remote_info() {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        repo.remote("origin", "git@github.com:ory/kratos.git").unwrap();

        let git_repo = GitRepo::open(temp.path()).unwrap();
        let info = git_repo.remote_info("origin").unwrap().unwrap();
        assert_eq!(info.host, "https://github.com");
        assert_eq!(info.owner, "ory");
        assert_eq!(info.repository, "kratos");
    }

    #[test]
    fn test_missing_remote() {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();

        let git_repo = GitRepo::open(temp.path()).unwrap();
        let result = git_repo.remote_url("upstream");
        assert!(matches!(result, Err(GitError::RemoteNotFound(_))));
    }
}
