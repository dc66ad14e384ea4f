//! Arena document tree for markdown.
//!
//! `pulldown-cmark` produces a flat event stream. Render hooks need to ask
//! structural questions ("is this text the first child of a paragraph inside
//! a list item?"), so this crate folds the events into an ordered, rooted
//! tree with parent back-edges.
//!
//! # Architecture
//!
//! - [`Document`]: arena of [`Node`]s addressed by [`NodeId`]. Children are
//!   owned forward edges, parents are plain indices.
//! - [`parse`]: builds a document from markdown text using the enabled
//!   [`Extensions`].
//! - Tight list items get an implicit `Paragraph { tight: true }` wrapper so
//!   inline content always sits under a paragraph.
//!
//! # Example
//!
//! ```
//! use grip_tree::{Extensions, NodeKind, parse};
//!
//! let doc = parse("- [ ] task", Extensions::default());
//! let list = doc.first_child(doc.root()).unwrap();
//! let item = doc.first_child(list).unwrap();
//! let paragraph = doc.first_child(item).unwrap();
//! assert!(matches!(doc.kind(paragraph), NodeKind::Paragraph { tight: true }));
//! assert_eq!(doc.literal(doc.first_child(paragraph).unwrap()), Some("[ ] task"));
//! ```

mod autolink;
mod builder;
mod document;
mod extensions;
mod node;

pub use builder::parse;
pub use document::{Descendants, Document};
pub use extensions::Extensions;
pub use node::{Alignment, Node, NodeId, NodeKind};
