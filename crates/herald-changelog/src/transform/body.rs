//! Commit body reformatting

use std::sync::LazyLock;

use regex::Regex;

static SIGNED_OFF_BY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^signed-off-by: .*$").expect("Invalid regex"));

static CO_AUTHORED_BY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^co-authored-by: .*$").expect("Invalid regex"));

/// A body prepared for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedBody {
    /// Indented body, or the stripped text when nothing is left to render
    pub text: String,
    /// Whether the body has content worth rendering
    pub has_body: bool,
}

/// Strip the first sign-off and co-author trailers, then indent the body.
///
/// A body with content is indented by four spaces per line and wrapped in
/// newlines so it renders as a code block under the entry.
pub fn format_body(body: &str) -> FormattedBody {
    let stripped = SIGNED_OFF_BY_REGEX.replacen(body, 1, "");
    let stripped = CO_AUTHORED_BY_REGEX.replacen(&stripped, 1, "").into_owned();

    if stripped.trim().is_empty() {
        return FormattedBody {
            text: stripped,
            has_body: false,
        };
    }

    let indented: Vec<String> = stripped
        .split('\n')
        .map(|line| format!("    {}", line))
        .collect();

    FormattedBody {
        text: format!("\n{}\n", indented.join("\n")),
        has_body: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_off_by_removed() {
        let body = format_body("line1\nSigned-off-by: X\nline2");
        assert!(body.has_body);
        assert_eq!(body.text, "\n    line1\n    \n    line2\n");
        assert!(!body.text.contains("Signed-off-by"));
    }

    #[test]
    fn test_only_first_trailer_removed() {
        let body = format_body("text\nsigned-off-by: A <a@x>\nSIGNED-OFF-BY: B <b@x>");
        assert_eq!(body.text, "\n    text\n    \n    SIGNED-OFF-BY: B <b@x>\n");
    }

    #[test]
    fn test_co_authored_by_removed() {
        let body = format_body("Did the thing\n\nCo-authored-by: Jane <jane@x>");
        assert_eq!(body.text, "\n    Did the thing\n    \n    \n");
        assert!(body.has_body);
    }

    #[test]
    fn test_trailer_must_start_line() {
        let body = format_body("see signed-off-by: policy");
        assert_eq!(body.text, "\n    see signed-off-by: policy\n");
    }

    #[test]
    fn test_trailers_only_body_is_empty() {
        let body = format_body("Signed-off-by: X <x@x>\nCo-authored-by: Y <y@y>");
        assert!(!body.has_body);
        assert_eq!(body.text, "\n");
    }

    #[test]
    fn test_blank_body() {
        let body = format_body("  \n");
        assert!(!body.has_body);
        assert_eq!(body.text, "  \n");
    }
}
