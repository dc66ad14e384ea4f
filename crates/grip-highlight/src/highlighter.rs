//! Syntax selection, tokenizing and classed HTML formatting.

use std::sync::LazyLock;

use syntect::html::{ClassStyle, line_tokens_to_classed_spans};
use syntect::parsing::{ParseState, ScopeStack, ScopeStackOp, SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::error::HighlightError;

/// Syntax definitions bundled with syntect, loaded once per process.
static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

/// Fence names that syntect does not know under that token.
const ALIASES: &[(&str, &str)] = &[
    ("golang", "go"),
    ("shell", "bash"),
    ("console", "bash"),
    ("zsh", "bash"),
    ("yml", "yaml"),
    ("c++", "cpp"),
    ("objc", "objective-c"),
];

/// Fence names that explicitly ask for no highlighting.
const PLAIN_TEXT_NAMES: &[&str] = &["plaintext", "plain", "text", "txt"];

const PRE_OPEN: &str = r#"<pre class="highlight"><code>"#;
const PRE_CLOSE: &str = "</code></pre>";

/// Source text split into lines with the scope operations of each line.
#[derive(Debug)]
pub struct TokenStream<'t> {
    syntax: String,
    lines: Vec<(&'t str, Vec<(usize, ScopeStackOp)>)>,
}

impl TokenStream<'_> {
    /// Name of the syntax that produced the tokens.
    #[must_use]
    pub fn syntax_name(&self) -> &str {
        &self.syntax
    }

    /// Number of source lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Stateless highlighter over the process-wide syntax set.
#[derive(Debug, Clone, Copy)]
pub struct Highlighter {
    syntaxes: &'static SyntaxSet,
    class_style: ClassStyle,
}

impl Highlighter {
    /// Highlighter emitting space-separated scope classes
    /// (`<span class="source go">`).
    #[must_use]
    pub fn new() -> Self {
        Self {
            syntaxes: &SYNTAXES,
            class_style: ClassStyle::Spaced,
        }
    }

    /// Emit prefixed classes instead (`<span class="hl-source hl-go">`).
    #[must_use]
    pub fn with_class_prefix(mut self, prefix: &'static str) -> Self {
        self.class_style = ClassStyle::SpacedPrefixed { prefix };
        self
    }

    /// Class style used for spans and for [`stylesheet()`](crate::stylesheet()).
    #[must_use]
    pub fn class_style(&self) -> ClassStyle {
        self.class_style
    }

    /// Find a syntax by fence name or file extension, case-insensitively.
    #[must_use]
    pub fn resolve(&self, hint: Option<&str>) -> Option<&'static SyntaxReference> {
        let hint = hint?.trim();
        if hint.is_empty() {
            return None;
        }
        let lower = hint.to_ascii_lowercase();
        if PLAIN_TEXT_NAMES.contains(&lower.as_str()) {
            return Some(self.plain_text());
        }
        let token = ALIASES
            .iter()
            .find(|(alias, _)| *alias == lower)
            .map_or(lower.as_str(), |(_, target)| *target);
        self.syntaxes
            .find_syntax_by_token(token)
            .or_else(|| self.syntaxes.find_syntax_by_name(hint))
    }

    /// Guess a syntax from the first line of the source (shebangs, XML
    /// declarations, modelines).
    ///
    /// The rest of the content is not scored, so an unlabeled snippet without
    /// such a first line yields `None` and [`select`](Self::select) falls back
    /// to plain text.
    #[must_use]
    pub fn infer(&self, text: &str) -> Option<&'static SyntaxReference> {
        let first_line = text.lines().next()?;
        self.syntaxes.find_syntax_by_first_line(first_line)
    }

    #[must_use]
    pub fn plain_text(&self) -> &'static SyntaxReference {
        self.syntaxes.find_syntax_plain_text()
    }

    /// Resolve by hint when one is given, infer from content otherwise, and
    /// fall back to plain text when neither yields a syntax.
    #[must_use]
    pub fn select(&self, hint: Option<&str>, text: &str) -> &'static SyntaxReference {
        let found = match hint {
            Some(hint) => self.resolve(Some(hint)),
            None => self.infer(text),
        };
        found.unwrap_or_else(|| self.plain_text())
    }

    /// Run the syntax definition over every line of `text`.
    pub fn tokenize<'t>(
        &self,
        syntax: &SyntaxReference,
        text: &'t str,
    ) -> Result<TokenStream<'t>, HighlightError> {
        let mut state = ParseState::new(syntax);
        let mut lines = Vec::new();
        for line in LinesWithEndings::from(text) {
            let ops = state.parse_line(line, self.syntaxes)?;
            lines.push((line, ops));
        }
        Ok(TokenStream {
            syntax: syntax.name.clone(),
            lines,
        })
    }

    /// Format tokens as escaped HTML spans inside `<pre><code>`.
    pub fn format(&self, tokens: &TokenStream<'_>) -> Result<String, HighlightError> {
        let capacity = tokens.lines.iter().map(|(line, _)| line.len()).sum::<usize>() * 2;
        let mut html = String::with_capacity(capacity + PRE_OPEN.len() + PRE_CLOSE.len());
        html.push_str(PRE_OPEN);

        let mut stack = ScopeStack::new();
        let mut open_spans: isize = 0;
        for (line, ops) in &tokens.lines {
            let (formatted, delta) =
                line_tokens_to_classed_spans(line, ops, self.class_style, &mut stack)?;
            open_spans += delta;
            html.push_str(&formatted);
        }
        for _ in 0..open_spans {
            html.push_str("</span>");
        }

        html.push_str(PRE_CLOSE);
        Ok(html)
    }

    /// Select a syntax, tokenize and format in one step.
    pub fn highlight(&self, hint: Option<&str>, text: &str) -> Result<String, HighlightError> {
        let syntax = self.select(hint, text);
        let tokens = self.tokenize(syntax, text)?;
        self.format(&tokens)
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    static_assertions::assert_impl_all!(Highlighter: Send, Sync);

    #[test]
    fn test_resolve_by_name_and_extension() {
        let highlighter = Highlighter::new();
        assert_eq!(highlighter.resolve(Some("go")).unwrap().name, "Go");
        assert_eq!(highlighter.resolve(Some("rust")).unwrap().name, "Rust");
        assert_eq!(highlighter.resolve(Some("rs")).unwrap().name, "Rust");
        assert_eq!(highlighter.resolve(Some("Python")).unwrap().name, "Python");
    }

    #[test]
    fn test_resolve_aliases() {
        let highlighter = Highlighter::new();
        assert_eq!(highlighter.resolve(Some("golang")).unwrap().name, "Go");
        assert_eq!(
            highlighter.resolve(Some("plaintext")).unwrap().name,
            "Plain Text"
        );
    }

    #[test]
    fn test_resolve_unknown_or_empty() {
        let highlighter = Highlighter::new();
        assert!(highlighter.resolve(Some("no-such-language")).is_none());
        assert!(highlighter.resolve(Some("  ")).is_none());
        assert!(highlighter.resolve(None).is_none());
    }

    #[test]
    fn test_infer_from_shebang() {
        let highlighter = Highlighter::new();
        let syntax = highlighter.infer("#!/usr/bin/env python\nprint(1)\n");
        assert_eq!(syntax.unwrap().name, "Python");
    }

    #[test]
    fn test_select_falls_back_to_plain_text() {
        let highlighter = Highlighter::new();
        assert_eq!(
            highlighter.select(Some("no-such-language"), "x").name,
            "Plain Text"
        );
        assert_eq!(highlighter.select(None, "just words").name, "Plain Text");
    }

    #[test]
    fn test_select_with_hint_does_not_infer() {
        let highlighter = Highlighter::new();
        let syntax = highlighter.select(Some("no-such-language"), "#!/bin/bash\necho hi\n");
        assert_eq!(syntax.name, "Plain Text");
    }

    #[test]
    fn test_tokenize_keeps_lines() {
        let highlighter = Highlighter::new();
        let syntax = highlighter.select(Some("go"), "");
        let tokens = highlighter
            .tokenize(syntax, "package main\n\nfunc main() {}\n")
            .unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens.syntax_name(), "Go");
    }

    #[test]
    fn test_highlight_go_has_classes() {
        let html = Highlighter::new()
            .highlight(Some("go"), "package main\n")
            .unwrap();
        assert!(html.starts_with(PRE_OPEN));
        assert!(html.ends_with(PRE_CLOSE));
        assert!(html.contains(r#"<span class="source go">"#));
        assert!(html.contains("package"));
        assert!(!html.contains("<pre><code>"));
    }

    #[test]
    fn test_highlight_escapes_html() {
        let html = Highlighter::new()
            .highlight(Some("html"), "<b>&</b>\n")
            .unwrap();
        assert!(html.contains("&lt;"));
        assert!(html.contains("&amp;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_highlight_plain_text_not_empty() {
        let html = Highlighter::new().highlight(None, "hello\n").unwrap();
        assert!(html.contains("hello"));
        assert!(html.contains(r#"class="text plain""#));
    }

    #[test]
    fn test_highlight_empty_source() {
        let html = Highlighter::new().highlight(Some("go"), "").unwrap();
        assert_eq!(html, format!("{PRE_OPEN}{PRE_CLOSE}"));
    }

    #[test]
    fn test_highlight_multiline_spans_balanced() {
        let source = "/* block\n   comment */\nfn main() {\n    let s = \"a\\nb\";\n}\n";
        let html = Highlighter::new().highlight(Some("rust"), source).unwrap();
        assert_eq!(html.matches("<span").count(), html.matches("</span>").count());
        assert!(html.contains("comment"));
        assert!(html.contains(r#"<span class="source rust">"#));
    }

    #[test]
    fn test_infer_ignores_unlabeled_content() {
        let highlighter = Highlighter::new();
        assert!(highlighter.infer("package main\n\nfunc main() {}\n").is_none());
        assert_eq!(
            highlighter.select(None, "package main\n").name,
            "Plain Text"
        );
    }

    #[test]
    fn test_prefixed_classes() {
        let html = Highlighter::new()
            .with_class_prefix("hl-")
            .highlight(Some("go"), "package main\n")
            .unwrap();
        assert!(html.contains(r#"class="hl-source hl-go""#));
    }
}
