//! Git types

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// URL-style remotes: `https://host/owner/repo.git`, `ssh://git@host:22/owner/repo`
static URL_REMOTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<scheme>[a-z+]+)://(?:[^@/]+@)?(?P<host>[^/:]+)(?::\d+)?/(?P<path>.+?)(?:\.git)?/?$",
    )
    .expect("Invalid regex")
});

/// scp-style remotes: `git@host:owner/repo.git`
static SCP_REMOTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[^@/]+@)?(?P<host>[^/:]+):(?P<path>[^/].*?)(?:\.git)?/?$")
        .expect("Invalid regex")
});

/// Hosting details parsed from a remote URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteInfo {
    /// Web host including scheme (e.g., "https://github.com")
    pub host: String,
    /// Repository owner; nested groups are kept joined by "/"
    pub owner: String,
    /// Repository name without ".git"
    pub repository: String,
}

impl RemoteInfo {
    /// Parse a remote URL into hosting details
    pub fn parse(url: &str) -> Option<Self> {
        let url = url.trim();

        let (host, path) = if let Some(caps) = URL_REMOTE_REGEX.captures(url) {
            let scheme = if &caps["scheme"] == "http" { "http" } else { "https" };
            (
                format!("{}://{}", scheme, &caps["host"]),
                caps["path"].to_string(),
            )
        } else if let Some(caps) = SCP_REMOTE_REGEX.captures(url) {
            (
                format!("https://{}", &caps["host"]),
                caps["path"].to_string(),
            )
        } else {
            return None;
        };

        let (owner, repository) = path.rsplit_once('/')?;
        if owner.is_empty() || repository.is_empty() {
            return None;
        }

        Some(Self {
            host,
            owner: owner.to_string(),
            repository: repository.to_string(),
        })
    }

    /// Web URL of the repository
    pub fn repo_url(&self) -> String {
        format!("{}/{}/{}", self.host, self.owner, self.repository)
    }
}
