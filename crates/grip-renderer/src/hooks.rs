//! GitHub-flavored render hooks: alerts, emoji, task lists, highlighted code
//! and mermaid diagrams.

use std::cell::RefCell;
use std::fmt;

use grip_highlight::Highlighter;
use grip_templates::Templates;
use grip_tree::{Document, NodeId, NodeKind};

use crate::alert::AlertKind;
use crate::config::Theme;
use crate::emoji;
use crate::fragment;
use crate::html::{HookDecision, HtmlWriter, RenderHook};
use crate::util::{escape_html, fence_language};

const CHECKBOX: &str = r#"<input type="checkbox" disabled class="task-list-item-checkbox">"#;
const CHECKBOX_CHECKED: &str =
    r#"<input type="checkbox" disabled class="task-list-item-checkbox" checked>"#;

/// Fence info string that selects a diagram instead of code.
const MERMAID: &str = "mermaid";

/// Dispatches nodes to the GitHub-flavored hooks, deferring everything else
/// to the default renderer.
///
/// Holds per-render state, so build one for each document.
pub struct GripHooks<'a> {
    templates: &'a Templates,
    highlighter: &'a Highlighter,
    theme: Theme,
    /// Alert paragraphs whose opening fragment was written and still need
    /// [`fragment::ALERT_CLOSE`].
    open_alerts: RefCell<Vec<NodeId>>,
}

impl<'a> GripHooks<'a> {
    pub fn new(templates: &'a Templates, highlighter: &'a Highlighter, theme: Theme) -> Self {
        Self {
            templates,
            highlighter,
            theme,
            open_alerts: RefCell::new(Vec::new()),
        }
    }

    /// Alert box around the first paragraph of a marked blockquote.
    fn paragraph(&self, out: &mut HtmlWriter<'_>, doc: &Document, node: NodeId, entering: bool) -> HookDecision {
        if !matches!(doc.parent_kind(node), Some(NodeKind::BlockQuote)) {
            return HookDecision::DEFER;
        }
        let Some(NodeKind::Text(literal)) = doc.first_child(node).map(|child| doc.kind(child)) else {
            return HookDecision::DEFER;
        };
        let Some(kind) = AlertKind::classify(literal) else {
            return HookDecision::DEFER;
        };

        if !entering {
            let mut open = self.open_alerts.borrow_mut();
            let Some(pos) = open.iter().rposition(|&id| id == node) else {
                return HookDecision::DEFER;
            };
            open.remove(pos);
            out.write_str(fragment::ALERT_CLOSE);
            return HookDecision::HANDLED;
        }

        // Without the opening fragment the paragraph renders as `<p>`.
        match fragment::alert_open(self.templates, kind) {
            Ok(html) => {
                out.write_str(&html);
                self.open_alerts.borrow_mut().push(node);
                HookDecision::HANDLED
            }
            Err(e) => {
                tracing::warn!(error = %e, alert = %kind, "Failed to render alert");
                HookDecision::DEFER
            }
        }
    }

    fn code_block(&self, out: &mut HtmlWriter<'_>, info: Option<&str>, literal: &str) -> HookDecision {
        if info == Some(MERMAID) {
            let diagram = fragment::mermaid_container(self.templates, literal, self.theme);
            return write_block(out, diagram, "mermaid");
        }

        let hint = info.and_then(fence_language);
        write_block(out, self.highlighter.highlight(hint, literal), hint.unwrap_or_default())
    }
}

impl RenderHook for GripHooks<'_> {
    fn render_node(
        &self,
        out: &mut HtmlWriter<'_>,
        doc: &Document,
        node: NodeId,
        entering: bool,
    ) -> HookDecision {
        match doc.kind(node) {
            // The default `<blockquote>` wraps the alert box. GitHub itself
            // emits the alert `div` with no surrounding `<blockquote>`.
            NodeKind::BlockQuote => HookDecision::DEFER,
            NodeKind::Paragraph { .. } => self.paragraph(out, doc, node, entering),
            NodeKind::Text(literal) => text(out, doc, node, literal),
            NodeKind::ListItem => list_item(out, doc, node, entering),
            NodeKind::CodeBlock { info, literal } => self.code_block(out, info.as_deref(), literal),
            _ => HookDecision::DEFER,
        }
    }
}

/// Write a rendered code block, or log and drop it. Either way the block is
/// handled and the walk goes on with its next sibling.
fn write_block<E: fmt::Display>(
    out: &mut HtmlWriter<'_>,
    html: Result<String, E>,
    language: &str,
) -> HookDecision {
    match html {
        Ok(html) => out.write_str(&html),
        Err(e) => tracing::warn!(error = %e, language, "Failed to render code block"),
    }
    HookDecision::HANDLED
}

/// Escaped text with emoji, minus an alert marker or task-list marker where
/// one applies.
fn text(out: &mut HtmlWriter<'_>, doc: &Document, node: NodeId, literal: &str) -> HookDecision {
    let escaped = escape_html(literal);
    let content = emoji::substitute(&escaped);

    let paragraph = doc
        .parent(node)
        .filter(|&parent| matches!(doc.kind(parent), NodeKind::Paragraph { .. }));
    let Some(paragraph) = paragraph else {
        out.write_str(&content);
        return HookDecision::HANDLED;
    };

    let leading = doc.is_first_child(node);
    match doc.parent_kind(paragraph) {
        Some(NodeKind::BlockQuote) if leading => {
            if let Some((_, rest)) = AlertKind::strip_marker(&content) {
                out.write_str(rest);
                return HookDecision::HANDLED;
            }
        }
        Some(NodeKind::ListItem) if leading && doc.is_first_child(paragraph) => {
            if let Some((checkbox, rest)) = task_marker(&content) {
                out.write_str(checkbox);
                out.write_str(rest);
                return HookDecision::HANDLED;
            }
        }
        _ => {}
    }

    out.write_str(&content);
    HookDecision::HANDLED
}

fn list_item(out: &mut HtmlWriter<'_>, doc: &Document, node: NodeId, entering: bool) -> HookDecision {
    let is_task = doc
        .first_child(node)
        .filter(|&child| matches!(doc.kind(child), NodeKind::Paragraph { .. }))
        .and_then(|paragraph| doc.first_child(paragraph))
        .is_some_and(|first| matches!(doc.kind(first), NodeKind::Text(s) if task_marker(s).is_some()));
    if !is_task {
        return HookDecision::DEFER;
    }
    out.write_str(if entering { r#"<li class="task-list-item">"# } else { "</li>" });
    HookDecision::HANDLED
}

/// Checkbox markup and the text after a leading `[ ]` or `[x]`.
fn task_marker(text: &str) -> Option<(&'static str, &str)> {
    if let Some(rest) = text.strip_prefix("[ ]") {
        Some((CHECKBOX, rest))
    } else {
        text.strip_prefix("[x]").map(|rest| (CHECKBOX_CHECKED, rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::HtmlRenderer;
    use grip_highlight::HighlightError;
    use grip_tree::{Extensions, parse};
    use pretty_assertions::assert_eq;

    fn render(markdown: &str) -> String {
        render_with(&Templates::new(), markdown)
    }

    fn render_with(templates: &Templates, markdown: &str) -> String {
        let highlighter = Highlighter::new();
        let hooks = GripHooks::new(templates, &highlighter, Theme::Light);
        let doc = parse(markdown, Extensions::default());
        let mut buf = Vec::new();
        HtmlRenderer::new().render(&doc, &hooks, &mut HtmlWriter::new(&mut buf));
        String::from_utf8(buf).unwrap()
    }

    fn alert_open(kind: AlertKind) -> String {
        fragment::alert_open(&Templates::new(), kind).unwrap()
    }

    #[test]
    fn test_task_marker() {
        assert_eq!(task_marker("[ ] todo"), Some((CHECKBOX, " todo")));
        assert_eq!(task_marker("[x] done"), Some((CHECKBOX_CHECKED, " done")));
        assert_eq!(task_marker("[X] upper"), None);
        assert_eq!(task_marker("[] nope"), None);
    }

    #[test]
    fn test_task_list() {
        assert_eq!(
            render("- [ ] task"),
            r#"<ul><li class="task-list-item"><input type="checkbox" disabled class="task-list-item-checkbox"> task</li></ul>"#
        );
        assert_eq!(
            render("- [x] done\n- plain"),
            concat!(
                r#"<ul><li class="task-list-item"><input type="checkbox" disabled class="task-list-item-checkbox" checked> done</li>"#,
                "<li>plain</li></ul>"
            )
        );
    }

    #[test]
    fn test_task_marker_mid_item_is_text() {
        assert_eq!(render("- see [ ] here"), "<ul><li>see [ ] here</li></ul>");
    }

    #[test]
    fn test_alert_note() {
        let html = render("> [!NOTE] hello");
        assert_eq!(
            html,
            format!("<blockquote>{} hello</div></blockquote>", alert_open(AlertKind::Note))
        );
    }

    #[test]
    fn test_alert_marker_case_insensitive() {
        let html = render("> [!warning]\n> careful");
        assert_eq!(
            html,
            format!(
                "<blockquote>{}\ncareful</div></blockquote>",
                alert_open(AlertKind::Warning)
            )
        );
    }

    #[test]
    fn test_plain_blockquote() {
        assert_eq!(render("> just a quote"), "<blockquote><p>just a quote</p></blockquote>");
    }

    #[test]
    fn test_alert_only_wraps_marked_paragraph() {
        let html = render("> [!TIP] first\n>\n> second");
        assert_eq!(
            html,
            format!(
                "<blockquote>{} first</div><p>second</p></blockquote>",
                alert_open(AlertKind::Tip)
            )
        );
    }

    #[test]
    fn test_nested_alerts_close_in_order() {
        let html = render("> [!NOTE] outer\n>\n> > [!TIP] inner");
        assert_eq!(
            html,
            format!(
                "<blockquote>{} outer</div><blockquote>{} inner</div></blockquote></blockquote>",
                alert_open(AlertKind::Note),
                alert_open(AlertKind::Tip)
            )
        );
    }

    #[test]
    fn test_alert_without_template_renders_paragraph() {
        let templates = Templates::with_loader(|_| Ok(None));
        assert_eq!(
            render_with(&templates, "> [!NOTE] hello\n\nafter"),
            "<blockquote><p> hello</p></blockquote><p>after</p>"
        );
    }

    #[test]
    fn test_broken_alert_template_renders_paragraph() {
        let templates = Templates::with_loader(|_| Ok(Some("{% if %}".to_owned())));
        let html = render_with(&templates, "> [!WARNING] careful\n>\n> more");
        assert_eq!(html, "<blockquote><p> careful</p><p>more</p></blockquote>");
        assert!(!html.contains("</div>"));
    }

    #[test]
    fn test_mermaid_without_template_is_dropped() {
        let templates = Templates::with_loader(|_| Ok(None));
        let html = render_with(
            &templates,
            "```mermaid\nA-->B\n```\n\n```go\npackage main\n```\n\nafter",
        );
        assert!(!html.contains("A--"), "{html}");
        assert!(html.starts_with(r#"<pre class="highlight"><code>"#), "{html}");
        assert!(html.ends_with("<p>after</p>"), "{html}");
    }

    #[test]
    fn test_failed_code_block_is_dropped() {
        let mut buf = Vec::new();
        let mut out = HtmlWriter::new(&mut buf);
        let failed: Result<String, _> = Err(HighlightError::UnknownTheme("nope".to_owned()));
        let rendered: Result<String, HighlightError> = Ok("<pre>ok</pre>".to_owned());
        assert_eq!(write_block(&mut out, failed, "rust"), HookDecision::HANDLED);
        assert_eq!(write_block(&mut out, rendered, "rust"), HookDecision::HANDLED);
        assert_eq!(buf, b"<pre>ok</pre>");
    }

    #[test]
    fn test_alert_marker_in_list_item_is_text() {
        assert_eq!(render("- [!NOTE] item"), "<ul><li>[!NOTE] item</li></ul>");
    }

    #[test]
    fn test_task_list_inside_blockquote() {
        assert_eq!(
            render("> - [ ] quoted task"),
            format!(
                r#"<blockquote><ul><li class="task-list-item">{CHECKBOX} quoted task</li></ul></blockquote>"#
            )
        );
    }

    #[test]
    fn test_text_escaped_before_emoji() {
        assert_eq!(render("a < b && :smile:"), "<p>a &lt; b &amp;&amp; 😄</p>");
    }

    #[test]
    fn test_emoji_in_heading_and_link() {
        assert_eq!(
            render("# Ship :rocket:\n\n[go :fire:](https://example.com)"),
            r#"<h1 id="ship-rocket">Ship 🚀</h1><p><a href="https://example.com">go 🔥</a></p>"#
        );
    }

    #[test]
    fn test_mermaid_block() {
        let html = render("```mermaid\ngraph TD; A-->B;\n```");
        assert!(html.contains("graph TD; A--&gt;B;"), "{html}");
        assert!(html.contains(r#"data-theme="light""#));
        assert!(!html.contains("<pre><code"));
        assert!(!html.contains(r#"class="highlight""#));
    }

    #[test]
    fn test_mermaid_requires_exact_info() {
        let html = render("```mermaid title\ngraph TD;\n```");
        assert!(!html.contains("mermaid-container"));
        assert!(html.starts_with(r#"<pre class="highlight"><code>"#));
    }

    #[test]
    fn test_go_code_highlighted() {
        let html = render("```go\npackage main\n```");
        assert!(html.contains(r#"<span class="source go">"#), "{html}");
        assert!(!html.contains("<pre><code>"));
    }

    #[test]
    fn test_code_without_info_still_rendered() {
        let html = render("```\nplain words\n```");
        assert!(html.contains("plain words"));
        assert!(html.starts_with(r#"<pre class="highlight"><code>"#));
    }
}
