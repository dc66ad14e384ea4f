//! Node types stored in the document arena.

pub use pulldown_cmark::Alignment;

/// Index of a node inside its [`Document`](crate::Document).
///
/// Only meaningful for the document that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in arena order (document order).
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Kind of a node together with its kind-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Document,
    BlockQuote,
    /// `tight` paragraphs are the implicit wrappers of tight list items and
    /// render without `<p>` tags.
    Paragraph {
        tight: bool,
    },
    Heading {
        level: u8,
        /// Explicit `{#id}` attribute.
        id: Option<String>,
        classes: Vec<String>,
    },
    /// `start` is `Some` for ordered lists.
    List {
        start: Option<u64>,
    },
    ListItem,
    /// Fenced or indented code. `info` is `None` for indented blocks and
    /// fences without an info string.
    CodeBlock {
        info: Option<String>,
        literal: String,
    },
    HtmlBlock(String),
    Rule,
    Table,
    TableHead,
    TableRow,
    TableCell {
        header: bool,
        alignment: Alignment,
    },
    Emphasis,
    Strong,
    Strikethrough,
    Superscript,
    Subscript,
    Link {
        url: String,
        title: String,
    },
    Image {
        url: String,
        title: String,
    },
    Text(String),
    Code(String),
    Html(String),
    SoftBreak,
    HardBreak,
    Math {
        display: bool,
        literal: String,
    },
    FootnoteDefinition(String),
    FootnoteReference(String),
    DefinitionList,
    DefinitionTitle,
    DefinitionDetails,
    TaskListMarker(bool),
    Metadata(String),
}

impl NodeKind {
    /// Whether the node is visited twice (entering and exiting) by a walk.
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::Document
                | Self::BlockQuote
                | Self::Paragraph { .. }
                | Self::Heading { .. }
                | Self::List { .. }
                | Self::ListItem
                | Self::Table
                | Self::TableHead
                | Self::TableRow
                | Self::TableCell { .. }
                | Self::Emphasis
                | Self::Strong
                | Self::Strikethrough
                | Self::Superscript
                | Self::Subscript
                | Self::Link { .. }
                | Self::Image { .. }
                | Self::FootnoteDefinition(_)
                | Self::DefinitionList
                | Self::DefinitionTitle
                | Self::DefinitionDetails
        )
    }

    /// Whether the node starts a block in the CommonMark sense.
    #[must_use]
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            Self::Document
                | Self::BlockQuote
                | Self::Paragraph { .. }
                | Self::Heading { .. }
                | Self::List { .. }
                | Self::ListItem
                | Self::CodeBlock { .. }
                | Self::HtmlBlock(_)
                | Self::Rule
                | Self::Table
                | Self::TableHead
                | Self::TableRow
                | Self::TableCell { .. }
                | Self::FootnoteDefinition(_)
                | Self::DefinitionList
                | Self::DefinitionTitle
                | Self::DefinitionDetails
                | Self::Metadata(_)
        )
    }

    /// Raw literal payload of leaf nodes.
    #[must_use]
    pub fn literal(&self) -> Option<&str> {
        match self {
            Self::Text(s)
            | Self::Code(s)
            | Self::Html(s)
            | Self::HtmlBlock(s)
            | Self::Metadata(s)
            | Self::CodeBlock { literal: s, .. }
            | Self::Math { literal: s, .. } => Some(s),
            _ => None,
        }
    }
}

/// A node in the document arena.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    #[must_use]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_kinds() {
        assert!(NodeKind::BlockQuote.is_container());
        assert!(NodeKind::Paragraph { tight: true }.is_container());
        assert!(!NodeKind::Text("a".to_owned()).is_container());
        assert!(
            !NodeKind::CodeBlock {
                info: None,
                literal: String::new()
            }
            .is_container()
        );
    }

    #[test]
    fn test_block_kinds() {
        assert!(NodeKind::Rule.is_block());
        assert!(!NodeKind::Emphasis.is_block());
        assert!(!NodeKind::SoftBreak.is_block());
    }

    #[test]
    fn test_literal_payload() {
        let code = NodeKind::CodeBlock {
            info: Some("go".to_owned()),
            literal: "package main\n".to_owned(),
        };
        assert_eq!(code.literal(), Some("package main\n"));
        assert_eq!(NodeKind::Text("hi".to_owned()).literal(), Some("hi"));
        assert_eq!(NodeKind::Strong.literal(), None);
    }
}
