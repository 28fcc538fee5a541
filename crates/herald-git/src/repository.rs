//! Repository handle

use std::path::{Path, PathBuf};

use git2::{ErrorCode, Repository};
use tracing::debug;

use herald_core::error::GitError;

/// Result type for git operations
pub type Result<T> = std::result::Result<T, GitError>;

/// An open repository and the directory it was opened for
pub struct GitRepo {
    pub(crate) repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open the repository rooted at `path`
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::open(path).map_err(|e| open_error(path, e))?;
        debug!(path = %path.display(), "opened repository");
        Ok(Self {
            repo,
            path: path.to_path_buf(),
        })
    }

    /// Open the repository containing `start_path`, searching parent directories
    pub fn discover(start_path: &Path) -> Result<Self> {
        let repo = Repository::discover(start_path).map_err(|e| open_error(start_path, e))?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();
        debug!(path = %path.display(), "discovered repository");
        Ok(Self { repo, path })
    }

    /// Working directory, or the git directory of a bare repository
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn open_error(path: &Path, source: git2::Error) -> GitError {
    if source.code() == ErrorCode::NotFound {
        GitError::NotARepository(path.to_path_buf())
    } else {
        GitError::Open {
            path: path.to_path_buf(),
            source,
        }
    }
}
