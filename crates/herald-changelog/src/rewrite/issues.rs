//! Issue number links

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::context::RenderContext;

static ISSUE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([0-9]+)").expect("Invalid regex"));

/// Replace every `#123` with a link to the issue tracker.
///
/// Returns the rewritten text and the linked issue numbers. The text is
/// returned unchanged when the context has no issue tracker URL.
pub fn link_issues(text: &str, context: &RenderContext) -> (String, Vec<String>) {
    let Some(base) = context.issues_base_url() else {
        return (text.to_string(), Vec::new());
    };

    let mut issues: Vec<String> = Vec::new();
    let linked = ISSUE_REGEX.replace_all(text, |caps: &Captures| {
        let issue = &caps[1];
        if !issues.iter().any(|seen| seen == issue) {
            issues.push(issue.to_string());
        }
        format!("[#{}]({}/{})", issue, base, issue)
    });

    (linked.into_owned(), issues)
}
