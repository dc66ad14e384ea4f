//! Bare URL detection for the autolink extension.

use std::sync::LazyLock;

use regex::Regex;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:https?://|www\.)[^\s<>]+").expect("invalid autolink regex")
});

/// A piece of a text run after URL detection.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Text(&'a str),
    Url { text: &'a str, href: String },
}

/// Split a text run into plain text and URL segments.
///
/// Returns `None` when the text contains no URL so callers can keep the
/// original node untouched.
pub(crate) fn split(text: &str) -> Option<Vec<Segment<'_>>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for found in URL_PATTERN.find_iter(text) {
        let url = trim_trailing(found.as_str());
        if url == "www." || url.ends_with("://") {
            continue;
        }
        if found.start() > last {
            segments.push(Segment::Text(&text[last..found.start()]));
        }
        let href = if url.starts_with("www.") {
            format!("http://{url}")
        } else {
            url.to_owned()
        };
        segments.push(Segment::Url { text: url, href });
        last = found.start() + url.len();
    }

    if segments.is_empty() {
        return None;
    }
    if last < text.len() {
        segments.push(Segment::Text(&text[last..]));
    }
    Some(segments)
}

/// Drop trailing punctuation and unbalanced closing parentheses.
fn trim_trailing(url: &str) -> &str {
    let mut end = url.len();
    loop {
        let candidate = &url[..end];
        match candidate.chars().next_back() {
            Some('.' | ',' | ':' | ';' | '!' | '?' | '\'' | '"' | '*' | '_' | '~') => {
                end -= 1;
            }
            Some(')') => {
                let opens = candidate.matches('(').count();
                let closes = candidate.matches(')').count();
                if closes > opens {
                    end -= 1;
                } else {
                    return candidate;
                }
            }
            _ => return candidate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_url() {
        assert_eq!(split("plain text"), None);
    }

    #[test]
    fn test_url_in_middle() {
        assert_eq!(
            split("see https://example.com for more"),
            Some(vec![
                Segment::Text("see "),
                Segment::Url {
                    text: "https://example.com",
                    href: "https://example.com".to_owned()
                },
                Segment::Text(" for more"),
            ])
        );
    }

    #[test]
    fn test_trailing_punctuation_excluded() {
        assert_eq!(
            split("Visit http://example.com/a."),
            Some(vec![
                Segment::Text("Visit "),
                Segment::Url {
                    text: "http://example.com/a",
                    href: "http://example.com/a".to_owned()
                },
                Segment::Text("."),
            ])
        );
    }

    #[test]
    fn test_balanced_parentheses_kept() {
        assert_eq!(
            trim_trailing("https://en.wikipedia.org/wiki/Rust_(language)"),
            "https://en.wikipedia.org/wiki/Rust_(language)"
        );
        assert_eq!(trim_trailing("https://example.com)"), "https://example.com");
    }

    #[test]
    fn test_www_gets_http_href() {
        assert_eq!(
            split("www.github.com"),
            Some(vec![Segment::Url {
                text: "www.github.com",
                href: "http://www.github.com".to_owned()
            }])
        );
    }

    #[test]
    fn test_bare_scheme_ignored() {
        assert_eq!(split("the https:// prefix"), None);
    }
}
