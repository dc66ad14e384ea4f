//! Markdown bytes in, HTML bytes out.

use std::io;

use grip_highlight::{DARK_THEME, HighlightError, Highlighter, LIGHT_THEME, stylesheet};
use grip_templates::Templates;
use grip_tree::{Document, Extensions};

use crate::config::{RenderConfig, Theme};
use crate::hooks::GripHooks;
use crate::html::{HtmlRenderer, HtmlWriter};

/// GitHub-flavored markdown renderer.
///
/// Holds only immutable state, so one instance can serve any number of
/// threads.
///
/// # Example
///
/// ```
/// use grip_renderer::{GripRenderer, Theme};
///
/// let renderer = GripRenderer::new(Theme::Light);
/// let html = renderer.md_to_html(b"> [!TIP]\n> Use `cargo doc --open` :books:");
/// let html = String::from_utf8(html).unwrap();
///
/// assert!(html.contains("markdown-alert-tip"));
/// assert!(html.contains("📚"));
/// ```
#[derive(Debug)]
pub struct GripRenderer {
    theme: Theme,
    extensions: Extensions,
    templates: Templates,
    highlighter: Highlighter,
}

impl GripRenderer {
    /// Renderer with all extensions enabled.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            extensions: Extensions::default(),
            templates: Templates::new(),
            highlighter: Highlighter::new(),
        }
    }

    #[must_use]
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.theme).with_extensions(config.extensions)
    }

    #[must_use]
    pub fn with_extensions(mut self, extensions: Extensions) -> Self {
        self.extensions = extensions;
        self
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn extensions(&self) -> Extensions {
        self.extensions
    }

    /// Parse `input` into a document tree. Invalid UTF-8 is replaced with
    /// U+FFFD.
    #[must_use]
    pub fn parse(&self, input: &[u8]) -> Document {
        let markdown = String::from_utf8_lossy(input);
        grip_tree::parse(&markdown, self.extensions)
    }

    /// Render `input` to an HTML fragment.
    #[must_use]
    pub fn md_to_html(&self, input: &[u8]) -> Vec<u8> {
        let mut html = Vec::with_capacity(input.len() * 2);
        self.render_to(input, &mut html);
        html
    }

    /// Render `input` into `sink`. Sink errors are logged, not returned; the
    /// render always runs to completion.
    pub fn render_to(&self, input: &[u8], sink: &mut dyn io::Write) {
        let doc = self.parse(input);
        tracing::debug!(bytes = input.len(), nodes = doc.len(), "Parsed markdown");

        let hooks = GripHooks::new(&self.templates, &self.highlighter, self.theme);
        let mut out = HtmlWriter::new(sink);
        HtmlRenderer::new()
            .with_auto_heading_ids(self.extensions.auto_heading_ids)
            .render(&doc, &hooks, &mut out);

        if out.failed_writes() > 0 {
            tracing::warn!(failed = out.failed_writes(), "Rendered HTML is incomplete");
        }
    }

    /// CSS for highlighted code in this renderer's theme. The `auto` theme
    /// switches to the dark palette under `prefers-color-scheme: dark`.
    pub fn stylesheet(&self) -> Result<String, HighlightError> {
        let class_style = self.highlighter.class_style();
        match self.theme {
            Theme::Light => stylesheet(LIGHT_THEME, class_style),
            Theme::Dark => stylesheet(DARK_THEME, class_style),
            Theme::Auto => {
                let light = stylesheet(LIGHT_THEME, class_style)?;
                let dark = stylesheet(DARK_THEME, class_style)?;
                Ok(format!("{light}\n@media (prefers-color-scheme: dark) {{\n{dark}}}\n"))
            }
        }
    }
}

impl Default for GripRenderer {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    static_assertions::assert_impl_all!(GripRenderer: Send, Sync);

    fn render(theme: Theme, markdown: &str) -> String {
        String::from_utf8(GripRenderer::new(theme).md_to_html(markdown.as_bytes())).unwrap()
    }

    #[test]
    fn test_task_list() {
        assert_eq!(
            render(Theme::Auto, "- [ ] task"),
            r#"<ul><li class="task-list-item"><input type="checkbox" disabled class="task-list-item-checkbox"> task</li></ul>"#
        );
    }

    #[test]
    fn test_alert_note() {
        let html = render(Theme::Auto, "> [!NOTE] hello");
        assert!(html.contains(r#"<div class="markdown-alert markdown-alert-note">"#), "{html}");
        assert!(html.contains("Note</p> hello</div>"), "{html}");
        assert!(!html.contains("[!NOTE]"));
    }

    #[test]
    fn test_blockquote_without_marker() {
        let html = render(Theme::Auto, "> quoted");
        assert_eq!(html, "<blockquote><p>quoted</p></blockquote>");
    }

    #[test]
    fn test_mermaid_uses_theme() {
        let html = render(Theme::Dark, "```mermaid\ngraph TD; A-->B;\n```\n");
        assert!(html.contains(r#"<pre class="mermaid">graph TD; A--&gt;B;"#), "{html}");
        assert!(html.contains(r#"data-theme="dark""#));
        assert!(!html.contains("<code"));
    }

    #[test]
    fn test_go_fence_highlighted() {
        let html = render(Theme::Light, "```go\nfunc main() {}\n```");
        assert!(html.contains("<span class="), "{html}");
        assert!(!html.contains("<pre><code>"));
    }

    #[test]
    fn test_fence_without_info_not_empty() {
        let html = render(Theme::Light, "```\nhello\n```");
        assert!(html.contains("hello"));
    }

    #[test]
    fn test_emoji_every_occurrence() {
        assert_eq!(
            render(Theme::Light, ":tada: one :tada: two :nope:"),
            "<p>🎉 one 🎉 two :nope:</p>"
        );
    }

    #[test]
    fn test_autolink_and_heading_ids() {
        assert_eq!(
            render(Theme::Light, "## Links\n\nSee www.rust-lang.org."),
            r#"<h2 id="links">Links</h2><p>See <a href="http://www.rust-lang.org">www.rust-lang.org</a>.</p>"#
        );
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let renderer = GripRenderer::new(Theme::Auto);
        let input = b"# T\n\n> [!CAUTION]\n> hot :fire:\n\n- [x] done\n\n```rust\nfn f() {}\n```\n";
        assert_eq!(renderer.md_to_html(input), renderer.md_to_html(input));
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let html = GripRenderer::new(Theme::Light).md_to_html(b"bad \xff byte");
        assert_eq!(String::from_utf8(html).unwrap(), "<p>bad \u{fffd} byte</p>");
    }

    #[test]
    fn test_empty_input() {
        assert!(GripRenderer::default().md_to_html(b"").is_empty());
    }

    #[test]
    fn test_from_config_disables_extensions() {
        let config = RenderConfig::from_toml("theme = \"light\"\n[extensions]\ntables = false\n").unwrap();
        let renderer = GripRenderer::from_config(&config);
        assert_eq!(renderer.theme(), Theme::Light);
        let html = String::from_utf8(renderer.md_to_html(b"| a |\n|---|\n| 1 |")).unwrap();
        assert!(!html.contains("<table>"), "{html}");
    }

    #[test]
    fn test_stylesheet_per_theme() {
        let light = GripRenderer::new(Theme::Light).stylesheet().unwrap();
        let auto = GripRenderer::new(Theme::Auto).stylesheet().unwrap();
        assert!(!light.contains("@media"));
        assert!(auto.starts_with(&light));
        assert!(auto.contains("@media (prefers-color-scheme: dark)"));
    }
}
