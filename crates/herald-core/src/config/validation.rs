//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Type every unrecognized commit falls back to
const FALLBACK_TYPE: &str = "other";

/// Check a loaded configuration, reporting the first invalid value.
///
/// Note-sort fields and the template preset are typed, so unknown values are
/// already rejected while parsing.
pub fn validate_config(config: &Config) -> Result<()> {
    check(
        config.versioning.tag_format.contains("{version}"),
        "versioning.tag_format",
        "must contain {version}",
    )?;
    check(
        !config.git.remote.trim().is_empty(),
        "git.remote",
        "cannot be empty",
    )?;

    let changelog = &config.changelog;
    check(
        changelog.types.contains_key(FALLBACK_TYPE),
        "changelog.types",
        "must define an \"other\" type",
    )?;

    let mut keys: Vec<&String> = changelog.types.keys().collect();
    keys.sort();
    for key in keys {
        check(
            !changelog.types[key].section.trim().is_empty(),
            &format!("changelog.types.{}.section", key),
            "cannot be empty",
        )?;
    }

    check(
        !changelog.breaking_title.trim().is_empty(),
        "changelog.breaking_title",
        "cannot be empty",
    )?;

    debug!("configuration is valid");
    Ok(())
}

fn check(ok: bool, field: &str, message: &str) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(invalid(field, message))
    }
}

fn invalid(field: &str, message: &str) -> crate::error::HeraldError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
    .into()
}
