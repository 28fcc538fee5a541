//! User mention links

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::context::RenderContext;

/// `@` followed by up to 39 characters of lowercase letters, digits, `-` and
/// `/`; hyphens never lead or repeat.
static MENTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@([a-z0-9](?:-?[a-z0-9/]){0,38})").expect("Invalid regex")
});

/// Replace every `@username` with a link to the user's profile on the host.
///
/// An `@` directly after an ASCII word character (`[A-Za-z0-9_]`) is not a
/// mention, so e-mail addresses stay as they are; any other preceding
/// character, including non-ASCII letters, allows one. Matches containing `/`
/// (paths, scoped package names) are left exactly as written. Returns the
/// rewritten text and the linked usernames. The text is returned unchanged
/// when the context has no host.
pub fn link_mentions(text: &str, context: &RenderContext) -> (String, Vec<String>) {
    let Some(host) = context.link_host() else {
        return (text.to_string(), Vec::new());
    };

    let mut mentions: Vec<String> = Vec::new();
    let linked = MENTION_REGEX.replace_all(text, |caps: &Captures| {
        let start = caps.get(0).map_or(0, |m| m.start());
        let username = &caps[1];
        if follows_word_char(&text[..start]) || username.contains('/') {
            return caps[0].to_string();
        }
        if !mentions.iter().any(|seen| seen == username) {
            mentions.push(username.to_string());
        }
        format!("[@{}]({}/{})", username, host, username)
    });

    (linked.into_owned(), mentions)
}

fn follows_word_char(prefix: &str) -> bool {
    prefix
        .bytes()
        .next_back()
        .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_')
}
