//! Rendering context

use serde::{Deserialize, Serialize};

use herald_core::config::ContextConfig;
use herald_git::RemoteInfo;

/// Repository details used to build links, constant for one changelog run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderContext {
    /// Host URL (e.g., "https://github.com")
    pub host: Option<String>,
    /// Repository owner
    pub owner: Option<String>,
    /// Repository name
    pub repository: Option<String>,
    /// Full repository URL
    pub repo_url: Option<String>,
}

impl RenderContext {
    /// Create a context for a hosted repository
    pub fn new(
        host: impl Into<String>,
        owner: impl Into<String>,
        repository: impl Into<String>,
    ) -> Self {
        Self {
            host: Some(host.into()),
            owner: Some(owner.into()),
            repository: Some(repository.into()),
            repo_url: None,
        }
    }

    /// Create a context from hosting details of a git remote
    pub fn from_remote(info: &RemoteInfo) -> Self {
        Self {
            host: Some(info.host.clone()),
            owner: Some(info.owner.clone()),
            repository: Some(info.repository.clone()),
            repo_url: Some(info.repo_url()),
        }
    }

    /// Apply configured overrides; set fields win over the current values
    pub fn with_overrides(self, overrides: &ContextConfig) -> Self {
        Self {
            host: overrides.host.clone().or(self.host),
            owner: overrides.owner.clone().or(self.owner),
            repository: overrides.repository.clone().or(self.repository),
            repo_url: overrides.repo_url.clone().or(self.repo_url),
        }
    }

    /// Host used for user profile links, `None` when unset or empty
    pub fn link_host(&self) -> Option<&str> {
        present(&self.host)
    }

    /// Base URL that issue numbers are appended to.
    ///
    /// Uses host/owner/repository when a repository is known, the repository
    /// URL otherwise. Empty fields count as unset. `None` when neither can be
    /// formed.
    pub fn issues_base_url(&self) -> Option<String> {
        match present(&self.repository) {
            Some(repository) => {
                let host = present(&self.host)?;
                let owner = present(&self.owner)?;
                Some(format!("{}/{}/{}/issues", host, owner, repository))
            }
            None => present(&self.repo_url).map(|url| format!("{}/issues", url)),
        }
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
