//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ConfigError, HeraldError, Result};

use super::defaults::config_file_names;
use super::types::Config;
use super::validation::validate_config;

/// On-disk config syntax, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Yaml,
}

impl ConfigFormat {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }

    fn parse(self, content: &str) -> Result<Config> {
        let config = match self {
            Self::Toml => toml::from_str(content).map_err(ConfigError::Toml)?,
            Self::Yaml => serde_yaml::from_str(content).map_err(ConfigError::Yaml)?,
        };
        Ok(config)
    }
}

/// Read, parse and validate a config file
pub fn load_config(path: &Path) -> Result<Config> {
    let format = ConfigFormat::of(path);
    info!(path = %path.display(), ?format, "loading config");

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = format.parse(&content)?;

    validate_config(&config)?;
    Ok(config)
}

/// Find the nearest config file, walking up from `start_dir`.
///
/// Each directory is checked for every known file name, first at its root
/// and then under `.github/`.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let found = start_dir.ancestors().find_map(|dir| {
        config_file_names().into_iter().find_map(|name| {
            [dir.join(name), dir.join(".github").join(name)]
                .into_iter()
                .find(|candidate| candidate.is_file())
        })
    });

    match &found {
        Some(path) => debug!(path = %path.display(), "found config file"),
        None => debug!(start_dir = %start_dir.display(), "no config file found"),
    }
    found
}

/// Find and load the nearest config file
pub fn load_config_from_dir(dir: &Path) -> Result<(Config, PathBuf)> {
    let path = find_config(dir).ok_or_else(|| ConfigError::NotFound(dir.to_path_buf()))?;
    let config = load_config(&path)?;
    Ok((config, path))
}

/// Load the nearest config file, falling back to defaults.
///
/// A missing file is normal; a file that fails to load is reported before
/// falling back.
pub fn load_config_or_default(dir: &Path) -> (Config, Option<PathBuf>) {
    match load_config_from_dir(dir) {
        Ok((config, path)) => (config, Some(path)),
        Err(HeraldError::Config(ConfigError::NotFound(_))) => (Config::default(), None),
        Err(e) => {
            warn!(error = %e, "ignoring unusable config, using defaults");
            (Config::default(), None)
        }
    }
}
