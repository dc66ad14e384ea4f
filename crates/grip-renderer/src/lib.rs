//! GitHub-flavored markdown to HTML.
//!
//! Markdown is parsed into a [`grip_tree::Document`] and written out by
//! [`HtmlRenderer`]. Before the default emission of each node the renderer
//! consults [`GripHooks`], which adds the GitHub-specific output:
//!
//! - Alerts: `> [!NOTE]`, `> [!TIP]`, `> [!IMPORTANT]`, `> [!WARNING]`,
//!   `> [!CAUTION]` and `> [!BLOCKQUOTE]` render as titled boxes
//! - Emoji shortcodes such as `:tada:`
//! - Task lists: `- [ ]` and `- [x]` render as disabled checkboxes
//! - Fenced code is highlighted with CSS classes; see
//!   [`GripRenderer::stylesheet`]
//! - `mermaid` fences render as client-side diagrams
//!
//! # Example
//!
//! ```
//! use grip_renderer::{GripRenderer, Theme};
//!
//! let renderer = GripRenderer::new(Theme::Dark);
//! let html = renderer.md_to_html(b"- [x] ship it :rocket:");
//!
//! assert_eq!(
//!     String::from_utf8(html).unwrap(),
//!     r#"<ul><li class="task-list-item"><input type="checkbox" disabled class="task-list-item-checkbox" checked> ship it 🚀</li></ul>"#
//! );
//! ```
//!
//! # Custom hooks
//!
//! Any [`RenderHook`] can drive [`HtmlRenderer`] directly:
//!
//! ```
//! use grip_renderer::{HookDecision, HtmlRenderer, HtmlWriter, RenderHook};
//! use grip_tree::{Document, Extensions, NodeId, NodeKind};
//!
//! struct NoImages;
//!
//! impl RenderHook for NoImages {
//!     fn render_node(&self, _: &mut HtmlWriter<'_>, doc: &Document, node: NodeId, _: bool) -> HookDecision {
//!         match doc.kind(node) {
//!             NodeKind::Image { .. } => HookDecision {
//!                 status: grip_renderer::WalkStatus::SkipChildren,
//!                 handled: true,
//!             },
//!             _ => HookDecision::DEFER,
//!         }
//!     }
//! }
//!
//! let doc = grip_tree::parse("![logo](logo.png) text", Extensions::default());
//! let mut html = Vec::new();
//! HtmlRenderer::new().render(&doc, &NoImages, &mut HtmlWriter::new(&mut html));
//! assert_eq!(html, b"<p> text</p>");
//! ```

mod alert;
mod config;
pub mod emoji;
mod fragment;
mod hooks;
mod html;
mod renderer;
mod util;

pub use alert::AlertKind;
pub use config::{ConfigError, RenderConfig, Theme};
pub use fragment::{ALERT_CLOSE, alert_open, mermaid_container};
pub use hooks::GripHooks;
pub use html::{HookDecision, HtmlRenderer, HtmlWriter, NoHooks, RenderHook, WalkStatus};
pub use renderer::GripRenderer;
pub use util::escape_html;
