//! Default HTML renderer over a [`Document`] with pluggable render hooks.
//!
//! [`HtmlRenderer::render`] walks the tree depth-first. Every node is offered
//! to a [`RenderHook`] first; when the hook does not handle it, the default
//! emission for the node kind runs instead. Container nodes are visited twice,
//! once entering and once exiting.

use std::collections::HashMap;
use std::fmt::{self, Write as _};
use std::io;

use grip_tree::{Alignment, Document, NodeId, NodeKind};

use crate::util::{escape_html, fence_language, slugify};

/// How the walk proceeds after a node has been rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStatus {
    /// Continue with the children, then the next node.
    GoToNext,
    /// Do not visit the children (or the exit) of this node.
    SkipChildren,
    /// Stop the walk.
    Terminate,
}

/// Result of offering a node to a [`RenderHook`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookDecision {
    pub status: WalkStatus,
    /// `true` suppresses the default emission for this visit.
    pub handled: bool,
}

impl HookDecision {
    /// Let the default renderer emit the node.
    pub const DEFER: Self = Self {
        status: WalkStatus::GoToNext,
        handled: false,
    };

    /// Output was emitted by the hook; continue the walk.
    pub const HANDLED: Self = Self {
        status: WalkStatus::GoToNext,
        handled: true,
    };
}

/// Intercepts node rendering.
pub trait RenderHook {
    /// Called on entering every node and on exiting every container node.
    fn render_node(
        &self,
        out: &mut HtmlWriter<'_>,
        doc: &Document,
        node: NodeId,
        entering: bool,
    ) -> HookDecision;
}

/// Hook that defers every node.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl RenderHook for NoHooks {
    fn render_node(&self, _: &mut HtmlWriter<'_>, _: &Document, _: NodeId, _: bool) -> HookDecision {
        HookDecision::DEFER
    }
}

/// Output sink for rendered HTML.
///
/// Write errors are logged and counted, never returned, so a failing sink
/// cannot abort a render half-way through a hook.
pub struct HtmlWriter<'w> {
    sink: &'w mut dyn io::Write,
    failed_writes: usize,
}

impl<'w> HtmlWriter<'w> {
    pub fn new(sink: &'w mut dyn io::Write) -> Self {
        Self {
            sink,
            failed_writes: 0,
        }
    }

    /// Write `s` verbatim.
    pub fn write_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        if let Err(e) = self.sink.write_all(s.as_bytes()) {
            self.failed_writes += 1;
            tracing::warn!(error = %e, bytes = s.len(), "Failed to write rendered HTML");
        }
    }

    /// Write `s` HTML-escaped.
    pub fn write_escaped(&mut self, s: &str) {
        self.write_str(&escape_html(s));
    }

    /// Number of writes the sink rejected so far.
    #[must_use]
    pub fn failed_writes(&self) -> usize {
        self.failed_writes
    }
}

impl fmt::Write for HtmlWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        HtmlWriter::write_str(self, s);
        Ok(())
    }
}

/// Per-render mutable state of the default emission.
#[derive(Default)]
struct RenderState {
    /// Reserved heading IDs, each with the next suffix to try.
    heading_ids: HashMap<String, usize>,
}

impl RenderState {
    /// Reserve `base`, or the first free `base-1`, `base-2`, ... when `base`
    /// is taken.
    fn unique_id(&mut self, base: String) -> String {
        let Some(&next) = self.heading_ids.get(&base) else {
            self.heading_ids.insert(base.clone(), 1);
            return base;
        };
        let mut n = next;
        let id = loop {
            let candidate = format!("{base}-{n}");
            n += 1;
            if !self.heading_ids.contains_key(&candidate) {
                break candidate;
            }
        };
        self.heading_ids.insert(base, n);
        self.heading_ids.insert(id.clone(), 1);
        id
    }
}

/// Renders a [`Document`] to HTML, consulting a [`RenderHook`] per node.
#[derive(Debug, Clone, Copy)]
pub struct HtmlRenderer {
    auto_heading_ids: bool,
}

impl HtmlRenderer {
    /// Renderer with heading auto-IDs enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            auto_heading_ids: true,
        }
    }

    /// Give headings without an explicit `{#id}` a slug ID.
    #[must_use]
    pub fn with_auto_heading_ids(mut self, enabled: bool) -> Self {
        self.auto_heading_ids = enabled;
        self
    }

    /// Walk `doc` and write its HTML to `out`.
    pub fn render<H: RenderHook + ?Sized>(&self, doc: &Document, hook: &H, out: &mut HtmlWriter<'_>) {
        let mut state = RenderState::default();
        let mut stack = vec![(doc.root(), true)];

        while let Some((node, entering)) = stack.pop() {
            let decision = hook.render_node(out, doc, node, entering);
            let status = if decision.handled {
                decision.status
            } else {
                self.render_default(&mut state, out, doc, node, entering)
            };

            match status {
                WalkStatus::Terminate => return,
                WalkStatus::SkipChildren => {}
                WalkStatus::GoToNext => {
                    if entering && doc.kind(node).is_container() {
                        stack.push((node, false));
                        stack.extend(doc.children(node).iter().rev().map(|&child| (child, true)));
                    }
                }
            }
        }
    }

    #[allow(clippy::too_many_lines)]
    fn render_default(
        &self,
        state: &mut RenderState,
        out: &mut HtmlWriter<'_>,
        doc: &Document,
        node: NodeId,
        entering: bool,
    ) -> WalkStatus {
        match doc.kind(node) {
            NodeKind::Document | NodeKind::Metadata(_) => {}
            NodeKind::BlockQuote => out.write_str(if entering { "<blockquote>" } else { "</blockquote>" }),
            NodeKind::Paragraph { tight } => {
                if !tight {
                    out.write_str(if entering { "<p>" } else { "</p>" });
                }
            }
            NodeKind::Heading { level, id, classes } => {
                if entering {
                    let id = match id {
                        Some(id) => Some(state.unique_id(id.clone())),
                        None if self.auto_heading_ids => {
                            Some(state.unique_id(slugify(&doc.text_content(node))))
                        }
                        None => None,
                    };
                    let _ = write!(out, "<h{level}");
                    if let Some(id) = id.filter(|id| !id.is_empty()) {
                        let _ = write!(out, r#" id="{}""#, escape_html(&id));
                    }
                    if !classes.is_empty() {
                        let _ = write!(out, r#" class="{}""#, escape_html(&classes.join(" ")));
                    }
                    out.write_str(">");
                } else {
                    let _ = write!(out, "</h{level}>");
                }
            }
            NodeKind::List { start } => match (start, entering) {
                (None, true) => out.write_str("<ul>"),
                (None, false) => out.write_str("</ul>"),
                (Some(1), true) => out.write_str("<ol>"),
                (Some(n), true) => {
                    let _ = write!(out, r#"<ol start="{n}">"#);
                }
                (Some(_), false) => out.write_str("</ol>"),
            },
            NodeKind::ListItem => out.write_str(if entering { "<li>" } else { "</li>" }),
            NodeKind::CodeBlock { info, literal } => {
                match info.as_deref().and_then(fence_language) {
                    Some(lang) => {
                        let _ = write!(
                            out,
                            r#"<pre><code class="language-{}">{}</code></pre>"#,
                            escape_html(lang),
                            escape_html(literal)
                        );
                    }
                    None => {
                        let _ = write!(out, "<pre><code>{}</code></pre>", escape_html(literal));
                    }
                }
            }
            NodeKind::HtmlBlock(html) | NodeKind::Html(html) => out.write_str(html),
            NodeKind::Rule => out.write_str("<hr>"),
            NodeKind::Table => out.write_str(if entering { "<table>" } else { "</tbody></table>" }),
            NodeKind::TableHead => {
                out.write_str(if entering { "<thead><tr>" } else { "</tr></thead><tbody>" });
            }
            NodeKind::TableRow => out.write_str(if entering { "<tr>" } else { "</tr>" }),
            NodeKind::TableCell { header, alignment } => {
                let tag = if *header { "th" } else { "td" };
                if entering {
                    let _ = write!(out, "<{tag}{}>", alignment_style(*alignment));
                } else {
                    let _ = write!(out, "</{tag}>");
                }
            }
            NodeKind::Emphasis => out.write_str(if entering { "<em>" } else { "</em>" }),
            NodeKind::Strong => out.write_str(if entering { "<strong>" } else { "</strong>" }),
            NodeKind::Strikethrough => out.write_str(if entering { "<del>" } else { "</del>" }),
            NodeKind::Superscript => out.write_str(if entering { "<sup>" } else { "</sup>" }),
            NodeKind::Subscript => out.write_str(if entering { "<sub>" } else { "</sub>" }),
            NodeKind::Link { url, title } => {
                if entering {
                    let _ = write!(out, r#"<a href="{}""#, escape_html(url));
                    if !title.is_empty() {
                        let _ = write!(out, r#" title="{}""#, escape_html(title));
                    }
                    out.write_str(">");
                } else {
                    out.write_str("</a>");
                }
            }
            NodeKind::Image { url, title } => {
                let _ = write!(
                    out,
                    r#"<img src="{}" alt="{}""#,
                    escape_html(url),
                    escape_html(&doc.text_content(node))
                );
                if !title.is_empty() {
                    let _ = write!(out, r#" title="{}""#, escape_html(title));
                }
                out.write_str(">");
                // Alt text already consumed the children.
                return WalkStatus::SkipChildren;
            }
            NodeKind::Text(text) => out.write_escaped(text),
            NodeKind::Code(code) => {
                let _ = write!(out, "<code>{}</code>", escape_html(code));
            }
            NodeKind::SoftBreak => out.write_str("\n"),
            NodeKind::HardBreak => out.write_str("<br>"),
            NodeKind::Math { display, literal } => {
                if *display {
                    let _ = write!(out, r#"<span class="math display">\[{}\]</span>"#, escape_html(literal));
                } else {
                    let _ = write!(out, r#"<span class="math inline">\({}\)</span>"#, escape_html(literal));
                }
            }
            NodeKind::FootnoteDefinition(label) => {
                if entering {
                    let label = escape_html(label);
                    let _ = write!(
                        out,
                        r#"<div class="footnote-definition" id="{label}"><sup class="footnote-definition-label">{label}</sup>"#
                    );
                } else {
                    out.write_str("</div>");
                }
            }
            NodeKind::FootnoteReference(label) => {
                let label = escape_html(label);
                let _ = write!(
                    out,
                    r##"<sup class="footnote-reference"><a href="#{label}">{label}</a></sup>"##
                );
            }
            NodeKind::DefinitionList => out.write_str(if entering { "<dl>" } else { "</dl>" }),
            NodeKind::DefinitionTitle => out.write_str(if entering { "<dt>" } else { "</dt>" }),
            NodeKind::DefinitionDetails => out.write_str(if entering { "<dd>" } else { "</dd>" }),
            NodeKind::TaskListMarker(checked) => {
                out.write_str(if *checked {
                    r#"<input type="checkbox" disabled checked>"#
                } else {
                    r#"<input type="checkbox" disabled>"#
                });
            }
        }
        WalkStatus::GoToNext
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn alignment_style(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::None => "",
        Alignment::Left => r#" style="text-align: left""#,
        Alignment::Center => r#" style="text-align: center""#,
        Alignment::Right => r#" style="text-align: right""#,
    }
}
