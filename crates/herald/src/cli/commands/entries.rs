//! Entries command

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::{debug, info, warn};

use herald_changelog::{ChangelogGenerator, RenderContext, WriterOptions};
use herald_core::config::{load_config_or_default, Config, ContextConfig};
use herald_git::GitRepo;

use crate::cli::{output, Cli};

/// Transform commit records and print the render bundle as JSON
#[derive(Debug, Args)]
pub struct EntriesCommand {
    /// File with commit records, a JSON array or one record per line (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Host URL used for links (e.g., https://github.com)
    #[arg(long)]
    pub host: Option<String>,

    /// Repository owner used for links
    #[arg(long)]
    pub owner: Option<String>,

    /// Repository name used for links
    #[arg(long)]
    pub repository: Option<String>,

    /// Full repository URL, used for issue links when no repository name is known
    #[arg(long)]
    pub repo_url: Option<String>,

    /// Don't look up tag messages for tagged commits
    #[arg(long)]
    pub no_tags: bool,
}

impl EntriesCommand {
    /// Execute the entries command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(input = ?self.input, no_tags = self.no_tags, "executing entries command");
        let cwd = std::env::current_dir()?;
        let (config, config_path) = load_config_or_default(&cwd);

        if cli.verbose {
            match &config_path {
                Some(path) => output::info(&format!("Using config {}", path.display())),
                None => output::info("Using default configuration"),
            }
        }

        let repo = match GitRepo::discover(&cwd) {
            Ok(repo) => {
                if cli.verbose {
                    output::info(&format!("Using repository {}", repo.path().display()));
                }
                Some(repo)
            }
            Err(e) => {
                debug!(error = %e, "not inside a git repository");
                None
            }
        };

        let context = self.context(&config, repo.as_ref());
        if cli.verbose {
            output::info(&format!(
                "Linking against {}",
                context.issues_base_url().as_deref().unwrap_or("nothing")
            ));
        }

        let options = WriterOptions::from_config(&config);
        let mut generator = ChangelogGenerator::new(options, context);
        match repo {
            Some(repo) if !self.no_tags => generator = generator.with_resolver(repo),
            _ => debug!("tag message lookups disabled"),
        }

        let input = read_input(self.input.as_deref())?;
        let changelog = generator.generate_from_json(&input)?;

        if changelog.is_empty() && !cli.quiet {
            output::warning("No changelog entries produced.");
        }

        println!(
            "{}",
            serde_json::to_string_pretty(&generator.render_bundle(&changelog))?
        );

        if cli.verbose {
            output::success(&format!(
                "{} entries in {} groups",
                changelog.entry_count(),
                changelog.commit_groups.len()
            ));
        }

        Ok(())
    }

    /// Rendering context: remote-derived, then config overrides, then flags
    fn context(&self, config: &Config, repo: Option<&GitRepo>) -> RenderContext {
        let detected = repo.and_then(|repo| match repo.remote_info(&config.git.remote) {
            Ok(info) => info,
            Err(e) => {
                warn!(remote = %config.git.remote, error = %e, "could not read remote");
                None
            }
        });

        detected
            .as_ref()
            .map(RenderContext::from_remote)
            .unwrap_or_default()
            .with_overrides(&config.context)
            .with_overrides(&self.overrides())
    }

    fn overrides(&self) -> ContextConfig {
        ContextConfig {
            host: self.host.clone(),
            owner: self.owner.clone(),
            repository: self.repository.clone(),
            repo_url: self.repo_url.clone(),
        }
    }
}

/// Read commit records from a file, or stdin when no file is given
fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn command() -> EntriesCommand {
        EntriesCommand {
            input: None,
            host: None,
            owner: None,
            repository: None,
            repo_url: None,
            no_tags: false,
        }
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();
        config.context.host = Some("https://github.com".to_string());
        config.context.owner = Some("ory".to_string());
        config.context.repository = Some("kratos".to_string());

        let cmd = EntriesCommand {
            owner: Some("fork".to_string()),
            ..command()
        };
        let context = cmd.context(&config, None);

        assert_eq!(context.host.as_deref(), Some("https://github.com"));
        assert_eq!(context.owner.as_deref(), Some("fork"));
        assert_eq!(context.repository.as_deref(), Some("kratos"));
        assert_eq!(context.repo_url, None);
    }

    #[test]
    fn test_context_from_remote() {
        let temp = TempDir::new().unwrap();
        let repo = git2::Repository::init(temp.path()).unwrap();
        repo.remote("origin", "git@github.com:ory/hydra.git").unwrap();
        let repo = GitRepo::open(temp.path()).unwrap();

        let context = command().context(&Config::default(), Some(&repo));
        assert_eq!(context.host.as_deref(), Some("https://github.com"));
        assert_eq!(context.owner.as_deref(), Some("ory"));
        assert_eq!(context.repository.as_deref(), Some("hydra"));
        assert_eq!(
            context.repo_url.as_deref(),
            Some("https://github.com/ory/hydra")
        );
    }

    #[test]
    fn test_missing_remote_gives_empty_context() {
        let temp = TempDir::new().unwrap();
        git2::Repository::init(temp.path()).unwrap();
        let repo = GitRepo::open(temp.path()).unwrap();

        let context = command().context(&Config::default(), Some(&repo));
        assert_eq!(context, RenderContext::default());
    }

    #[test]
    fn test_read_input_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("commits.json");
        std::fs::write(&path, "[{\"type\":\"feat\"}]").unwrap();

        assert_eq!(read_input(Some(&path)).unwrap(), "[{\"type\":\"feat\"}]");
        assert!(read_input(Some(&temp.path().join("missing.json"))).is_err());
    }
}
