//! Class-annotated syntax highlighting for fenced code blocks.
//!
//! Wraps `syntect` behind the small surface a markdown renderer needs:
//!
//! - [`Highlighter::resolve`] / [`Highlighter::infer`]: pick a syntax by
//!   language hint or by content
//! - [`Highlighter::select`]: the resolution chain used for code blocks,
//!   always ending at plain text
//! - [`Highlighter::tokenize`] / [`Highlighter::format`]: scope the source and
//!   format it as HTML whose spans carry CSS classes
//! - [`stylesheet()`]: CSS for those classes from a bundled theme
//!
//! # Example
//!
//! ```
//! use grip_highlight::Highlighter;
//!
//! let html = Highlighter::new()
//!     .highlight(Some("rust"), "fn main() {}\n")
//!     .unwrap();
//! assert!(html.starts_with(r#"<pre class="highlight"><code>"#));
//! assert!(html.contains(r#"class="source rust""#));
//! ```

mod error;
mod highlighter;
mod stylesheet;

pub use error::HighlightError;
pub use highlighter::{Highlighter, TokenStream};
pub use stylesheet::{DARK_THEME, LIGHT_THEME, stylesheet};
