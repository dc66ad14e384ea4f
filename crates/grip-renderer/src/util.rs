//! Shared utility functions for HTML rendering.

use std::borrow::Cow;

/// Escape `&`, `<`, `>` and `"` for HTML text and double-quoted attributes.
///
/// Returns the input unchanged when nothing needs escaping.
///
/// # Examples
///
/// ```
/// use grip_renderer::escape_html;
///
/// assert_eq!(escape_html("a < b"), "a &lt; b");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(s);
    }
    let mut result = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// GitHub-style heading anchor: lowercase, spaces become `-`, punctuation
/// other than `-` and `_` is dropped.
pub(crate) fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.trim().chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if c == ' ' {
            slug.push('-');
        } else if c == '-' || c == '_' {
            slug.push(c);
        }
    }
    slug
}

/// Language name from a fence info string: the first word, cut at `,` or `{`
/// (`rust,ignore`, `go {linenos=true}`).
pub(crate) fn fence_language(info: &str) -> Option<&str> {
    let lang = info
        .split(|c: char| c.is_whitespace() || c == ',' || c == '{')
        .next()
        .unwrap_or_default();
    if lang.is_empty() { None } else { Some(lang) }
}
