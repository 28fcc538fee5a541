//! Config command

use clap::Args;
use tracing::info;

use herald_core::config::load_config_or_default;

use crate::cli::{output, Cli};

/// Print the effective configuration
#[derive(Debug, Args)]
pub struct ConfigCommand {
    /// Print as JSON instead of TOML
    #[arg(long)]
    pub json: bool,
}

impl ConfigCommand {
    /// Execute the config command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(json = self.json, "executing config command");
        let cwd = std::env::current_dir()?;
        let (config, config_path) = load_config_or_default(&cwd);

        if !cli.quiet {
            let source = config_path
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "built-in defaults".to_string());
            eprintln!("{}", output::key_value("source", &source));
        }

        let rendered = if self.json {
            serde_json::to_string_pretty(&config)?
        } else {
            toml::to_string_pretty(&config)?
        };
        println!("{}", rendered);

        Ok(())
    }
}
