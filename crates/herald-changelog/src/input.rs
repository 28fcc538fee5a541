//! Commit record input
//!
//! Accepts either a JSON array of commit records or one JSON record per line,
//! the two shapes commit parsers commonly emit.

use serde_json::Value;
use tracing::{debug, warn};

use herald_core::error::{ChangelogError, Result};

use crate::types::RawCommit;

/// Decode commit records, dropping the ones that cannot be decoded.
///
/// Only input that cannot be split into records at all is an error; a bad
/// record is logged and skipped so the rest of the batch still goes through.
pub fn decode_commits(input: &str) -> Result<Vec<RawCommit>> {
    let records = split_records(input)?;
    let total = records.len();

    let commits: Vec<RawCommit> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match decode_record(index, record) {
            Ok(commit) => Some(commit),
            Err(e) => {
                warn!(error = %e, "skipping commit record");
                None
            }
        })
        .collect();

    debug!(total, decoded = commits.len(), "decoded commit records");
    Ok(commits)
}

fn split_records(input: &str) -> Result<Vec<std::result::Result<Value, String>>> {
    if input.trim_start().starts_with('[') {
        let values: Vec<Value> = serde_json::from_str(input)
            .map_err(|e| ChangelogError::InvalidInput(e.to_string()))?;
        return Ok(values.into_iter().map(Ok).collect());
    }

    Ok(input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str::<Value>(line).map_err(|e| e.to_string()))
        .collect())
}

fn decode_record(
    index: usize,
    record: std::result::Result<Value, String>,
) -> std::result::Result<RawCommit, ChangelogError> {
    let value = record.map_err(|reason| ChangelogError::DecodeFailed { index, reason })?;
    serde_json::from_value(value).map_err(|e| ChangelogError::DecodeFailed {
        index,
        reason: e.to_string(),
    })
}
