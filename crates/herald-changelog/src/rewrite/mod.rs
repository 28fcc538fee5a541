//! Subject line rewriting
//!
//! Each rule is a pure function from text and context to rewritten text plus
//! whatever it matched, so the rules can be tested on their own and composed
//! in a fixed order: issue links, then user links, then capitalization.

mod issues;
mod mentions;

pub use issues::link_issues;
pub use mentions::link_mentions;

use crate::context::RenderContext;

/// Result of rewriting a subject line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectRewrite {
    /// Rewritten subject
    pub subject: String,
    /// Issue numbers linked, in order of first appearance
    pub issues: Vec<String>,
    /// Usernames linked, in order of first appearance
    pub mentions: Vec<String>,
}

/// Apply issue links, user links and capitalization to a subject line
pub fn rewrite_subject(subject: &str, context: &RenderContext) -> SubjectRewrite {
    let (subject, issues) = link_issues(subject, context);
    let (subject, mentions) = link_mentions(&subject, context);

    SubjectRewrite {
        subject: capitalize(&subject),
        issues,
        mentions,
    }
}

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_order() {
        let context = RenderContext::new("example.com", "o", "r");
        let rewrite = rewrite_subject("add #42 support", &context);

        assert_eq!(rewrite.subject, "Add [#42](example.com/o/r/issues/42) support");
        assert_eq!(rewrite.issues, vec!["42"]);
        assert!(rewrite.mentions.is_empty());
    }

    #[test]
    fn test_rewrite_issue_and_mention() {
        let context = RenderContext::new("https://github.com", "ory", "kratos");
        let rewrite = rewrite_subject("#12 reported by @aeneasr", &context);

        assert_eq!(
            rewrite.subject,
            "[#12](https://github.com/ory/kratos/issues/12) reported by [@aeneasr](https://github.com/aeneasr)"
        );
        assert_eq!(rewrite.mentions, vec!["aeneasr"]);
    }

    #[test]
    fn test_empty_context_fields_treated_as_unset() {
        let context = RenderContext {
            host: Some(String::new()),
            owner: Some("o".to_string()),
            repository: Some(String::new()),
            repo_url: Some("https://x/o/r".to_string()),
        };
        let rewrite = rewrite_subject("fix #1 by @bob", &context);

        assert_eq!(rewrite.subject, "Fix [#1](https://x/o/r/issues/1) by @bob");
        assert_eq!(rewrite.issues, vec!["1"]);
        assert!(rewrite.mentions.is_empty());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("fix bug"), "Fix bug");
        assert_eq!(capitalize("Fix bug"), "Fix bug");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize("[#1](x) done"), "[#1](x) done");
    }

    #[test]
    fn test_empty_subject() {
        let context = RenderContext::new("example.com", "o", "r");
        let rewrite = rewrite_subject("", &context);
        assert_eq!(rewrite.subject, "");
        assert!(rewrite.issues.is_empty());
    }
}
