//! Arena-backed document tree.

use crate::node::{Node, NodeId, NodeKind};

/// Ordered, rooted tree of markdown nodes.
///
/// Nodes are stored in creation order, which is also document order. The
/// root is always [`NodeKind::Document`] at index zero.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Create a document containing only the root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Append a new node as the last child of `parent`.
    pub(crate) fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub(crate) fn kind_mut(&mut self, id: NodeId) -> &mut NodeKind {
        &mut self.nodes[id.0].kind
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A document always holds its root, so this is true only for a tree
    /// without any content below the root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes[0].children.is_empty()
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[must_use]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].children.first().copied()
    }

    /// Kind of the parent node, `None` for the root.
    #[must_use]
    pub fn parent_kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.parent(id).map(|parent| self.kind(parent))
    }

    /// Whether `id` is the first child of its parent.
    #[must_use]
    pub fn is_first_child(&self, id: NodeId) -> bool {
        self.parent(id)
            .and_then(|parent| self.first_child(parent))
            .is_some_and(|first| first == id)
    }

    /// Raw literal payload (text, code, HTML, math).
    #[must_use]
    pub fn literal(&self, id: NodeId) -> Option<&str> {
        self.kind(id).literal()
    }

    /// Info string of a code block.
    #[must_use]
    pub fn info(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::CodeBlock { info, .. } => info.as_deref(),
            _ => None,
        }
    }

    /// Concatenated plain text of all descendants (text, inline code and
    /// math), used for heading IDs and image alt text.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut text = String::new();
        for node in self.descendants(id) {
            match self.kind(node) {
                NodeKind::Text(s) | NodeKind::Code(s) => text.push_str(s),
                NodeKind::Math { literal, .. } => text.push_str(literal),
                NodeKind::SoftBreak | NodeKind::HardBreak => text.push(' '),
                _ => {}
            }
        }
        text
    }

    /// Pre-order iterator over `id` and everything below it.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            doc: self,
            stack: vec![id],
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-order traversal returned by [`Document::descendants`].
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.doc.children(id).iter().rev().copied());
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let root = doc.root();
        let paragraph = doc.append(root, NodeKind::Paragraph { tight: false });
        let first = doc.append(paragraph, NodeKind::Text("Hello ".to_owned()));
        let strong = doc.append(paragraph, NodeKind::Strong);
        doc.append(strong, NodeKind::Text("world".to_owned()));
        (doc, paragraph, first, strong)
    }

    #[test]
    fn test_new_document_has_root_only() {
        let doc = Document::new();
        assert_eq!(doc.len(), 1);
        assert!(doc.is_empty());
        assert_eq!(doc.kind(doc.root()), &NodeKind::Document);
        assert_eq!(doc.parent(doc.root()), None);
    }

    #[test]
    fn test_parent_and_children() {
        let (doc, paragraph, first, strong) = sample();
        assert_eq!(doc.parent(first), Some(paragraph));
        assert_eq!(doc.children(paragraph), &[first, strong]);
        assert_eq!(doc.first_child(paragraph), Some(first));
        assert!(doc.is_first_child(first));
        assert!(!doc.is_first_child(strong));
        assert!(!doc.is_first_child(doc.root()));
    }

    #[test]
    fn test_parent_kind() {
        let (doc, paragraph, first, _) = sample();
        assert_eq!(
            doc.parent_kind(first),
            Some(&NodeKind::Paragraph { tight: false })
        );
        assert_eq!(doc.parent_kind(paragraph), Some(&NodeKind::Document));
    }

    #[test]
    fn test_text_content() {
        let (doc, paragraph, _, _) = sample();
        assert_eq!(doc.text_content(paragraph), "Hello world");
    }

    #[test]
    fn test_descendants_preorder() {
        let (doc, paragraph, first, strong) = sample();
        let order: Vec<NodeId> = doc.descendants(paragraph).collect();
        assert_eq!(order.len(), 4);
        assert_eq!(&order[..3], &[paragraph, first, strong]);
    }

    #[test]
    fn test_info_only_for_code_blocks() {
        let mut doc = Document::new();
        let root = doc.root();
        let code = doc.append(
            root,
            NodeKind::CodeBlock {
                info: Some("mermaid".to_owned()),
                literal: "graph TD;".to_owned(),
            },
        );
        assert_eq!(doc.info(code), Some("mermaid"));
        assert_eq!(doc.literal(code), Some("graph TD;"));
        assert_eq!(doc.info(root), None);
    }
}
