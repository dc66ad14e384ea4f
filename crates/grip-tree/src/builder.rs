//! Folds the `pulldown-cmark` event stream into a [`Document`].

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Parser, Tag, TagEnd, TextMergeStream};

use crate::autolink::{self, Segment};
use crate::document::Document;
use crate::extensions::Extensions;
use crate::node::{Alignment, NodeId, NodeKind};

/// Parse markdown into a document tree.
///
/// Adjacent text events are merged first, so a run such as `[x] done` always
/// arrives as a single [`NodeKind::Text`] node.
#[must_use]
pub fn parse(markdown: &str, extensions: Extensions) -> Document {
    let parser = Parser::new_ext(markdown, extensions.parser_options());
    let mut builder = TreeBuilder::new(extensions.autolink);
    for event in TextMergeStream::new(parser) {
        builder.event(event);
    }
    builder.finish()
}

struct TreeBuilder {
    doc: Document,
    stack: Vec<NodeId>,
    autolink: bool,
    link_depth: usize,
    table_alignments: Vec<Alignment>,
    in_table_head: bool,
    cell_index: usize,
}

impl TreeBuilder {
    fn new(autolink: bool) -> Self {
        let doc = Document::new();
        let root = doc.root();
        Self {
            doc,
            stack: vec![root],
            autolink,
            link_depth: 0,
            table_alignments: Vec::new(),
            in_table_head: false,
            cell_index: 0,
        }
    }

    fn finish(self) -> Document {
        self.doc
    }

    fn current(&self) -> NodeId {
        // The root is never popped.
        self.stack.last().copied().unwrap_or_else(|| self.doc.root())
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline(NodeKind::Code(code.into_string())),
            Event::InlineMath(math) => self.inline(NodeKind::Math {
                display: false,
                literal: math.into_string(),
            }),
            Event::DisplayMath(math) => self.inline(NodeKind::Math {
                display: true,
                literal: math.into_string(),
            }),
            Event::Html(html) => self.html(&html),
            Event::InlineHtml(html) => self.inline(NodeKind::Html(html.into_string())),
            Event::SoftBreak => self.inline(NodeKind::SoftBreak),
            Event::HardBreak => self.inline(NodeKind::HardBreak),
            Event::Rule => {
                self.close_tight_paragraph();
                let parent = self.current();
                self.doc.append(parent, NodeKind::Rule);
            }
            Event::FootnoteReference(label) => {
                self.inline(NodeKind::FootnoteReference(label.into_string()));
            }
            Event::TaskListMarker(checked) => self.inline(NodeKind::TaskListMarker(checked)),
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        let kind = self.tag_kind(tag);
        if kind.is_block() {
            self.close_tight_paragraph();
        } else {
            self.open_tight_paragraph();
        }
        if matches!(kind, NodeKind::Link { .. } | NodeKind::Image { .. }) {
            self.link_depth += 1;
        }
        let parent = self.current();
        let id = self.doc.append(parent, kind);
        self.stack.push(id);
    }

    fn end(&mut self, tag: TagEnd) {
        self.close_tight_paragraph();
        match tag {
            TagEnd::Link | TagEnd::Image => {
                self.link_depth = self.link_depth.saturating_sub(1);
            }
            TagEnd::TableHead => self.in_table_head = false,
            _ => {}
        }
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    fn tag_kind(&mut self, tag: Tag<'_>) -> NodeKind {
        match tag {
            Tag::Paragraph => NodeKind::Paragraph { tight: false },
            Tag::Heading {
                level, id, classes, ..
            } => NodeKind::Heading {
                level: heading_level_to_num(level),
                id: id.map(|id| id.into_string()),
                classes: classes.into_iter().map(|c| c.into_string()).collect(),
            },
            Tag::BlockQuote(_) => NodeKind::BlockQuote,
            Tag::CodeBlock(kind) => {
                let info = match kind {
                    CodeBlockKind::Fenced(info) if !info.trim().is_empty() => {
                        Some(info.trim().to_owned())
                    }
                    _ => None,
                };
                NodeKind::CodeBlock {
                    info,
                    literal: String::new(),
                }
            }
            Tag::HtmlBlock => NodeKind::HtmlBlock(String::new()),
            Tag::List(start) => NodeKind::List { start },
            Tag::Item => NodeKind::ListItem,
            Tag::FootnoteDefinition(label) => NodeKind::FootnoteDefinition(label.into_string()),
            Tag::DefinitionList => NodeKind::DefinitionList,
            Tag::DefinitionListTitle => NodeKind::DefinitionTitle,
            Tag::DefinitionListDefinition => NodeKind::DefinitionDetails,
            Tag::Table(alignments) => {
                self.table_alignments = alignments;
                NodeKind::Table
            }
            Tag::TableHead => {
                self.in_table_head = true;
                self.cell_index = 0;
                NodeKind::TableHead
            }
            Tag::TableRow => {
                self.cell_index = 0;
                NodeKind::TableRow
            }
            Tag::TableCell => {
                let alignment = self
                    .table_alignments
                    .get(self.cell_index)
                    .copied()
                    .unwrap_or(Alignment::None);
                self.cell_index += 1;
                NodeKind::TableCell {
                    header: self.in_table_head,
                    alignment,
                }
            }
            Tag::Emphasis => NodeKind::Emphasis,
            Tag::Strong => NodeKind::Strong,
            Tag::Strikethrough => NodeKind::Strikethrough,
            Tag::Superscript => NodeKind::Superscript,
            Tag::Subscript => NodeKind::Subscript,
            Tag::Link {
                dest_url, title, ..
            } => NodeKind::Link {
                url: dest_url.into_string(),
                title: title.into_string(),
            },
            Tag::Image {
                dest_url, title, ..
            } => NodeKind::Image {
                url: dest_url.into_string(),
                title: title.into_string(),
            },
            Tag::MetadataBlock(_) => NodeKind::Metadata(String::new()),
        }
    }

    fn text(&mut self, text: &str) {
        let current = self.current();
        match self.doc.kind_mut(current) {
            NodeKind::CodeBlock { literal, .. } | NodeKind::Metadata(literal) => {
                literal.push_str(text);
                return;
            }
            _ => {}
        }

        let segments = if self.autolink && self.link_depth == 0 {
            autolink::split(text)
        } else {
            None
        };
        let Some(segments) = segments else {
            self.inline(NodeKind::Text(text.to_owned()));
            return;
        };

        self.open_tight_paragraph();
        let parent = self.current();
        for segment in segments {
            match segment {
                Segment::Text(text) => {
                    self.doc.append(parent, NodeKind::Text(text.to_owned()));
                }
                Segment::Url { text, href } => {
                    let link = self.doc.append(
                        parent,
                        NodeKind::Link {
                            url: href,
                            title: String::new(),
                        },
                    );
                    self.doc.append(link, NodeKind::Text(text.to_owned()));
                }
            }
        }
    }

    fn html(&mut self, html: &str) {
        let current = self.current();
        if let NodeKind::HtmlBlock(literal) = self.doc.kind_mut(current) {
            literal.push_str(html);
        } else {
            self.inline(NodeKind::Html(html.to_owned()));
        }
    }

    fn inline(&mut self, kind: NodeKind) {
        self.open_tight_paragraph();
        let parent = self.current();
        self.doc.append(parent, kind);
    }

    /// Tight list items carry inline content without paragraph events.
    fn open_tight_paragraph(&mut self) {
        let current = self.current();
        if matches!(self.doc.kind(current), NodeKind::ListItem) {
            let paragraph = self
                .doc
                .append(current, NodeKind::Paragraph { tight: true });
            self.stack.push(paragraph);
        }
    }

    fn close_tight_paragraph(&mut self) {
        let current = self.current();
        if matches!(self.doc.kind(current), NodeKind::Paragraph { tight: true }) {
            self.stack.pop();
        }
    }
}

fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(doc: &Document, id: NodeId) -> Vec<NodeKind> {
        doc.children(id)
            .iter()
            .map(|&child| doc.kind(child).clone())
            .collect()
    }

    fn only_child(doc: &Document, id: NodeId) -> NodeId {
        assert_eq!(doc.children(id).len(), 1, "{:?}", kinds(doc, id));
        doc.children(id)[0]
    }

    #[test]
    fn test_paragraph_with_text() {
        let doc = parse("Hello, world!", Extensions::default());
        let paragraph = only_child(&doc, doc.root());
        assert_eq!(doc.kind(paragraph), &NodeKind::Paragraph { tight: false });
        assert_eq!(
            kinds(&doc, paragraph),
            vec![NodeKind::Text("Hello, world!".to_owned())]
        );
    }

    #[test]
    fn test_tight_list_item_gets_implicit_paragraph() {
        let doc = parse("- [ ] task\n- [x] done", Extensions::default());
        let list = only_child(&doc, doc.root());
        assert_eq!(doc.kind(list), &NodeKind::List { start: None });
        let items = doc.children(list);
        assert_eq!(items.len(), 2);

        let paragraph = only_child(&doc, items[0]);
        assert_eq!(doc.kind(paragraph), &NodeKind::Paragraph { tight: true });
        assert_eq!(
            kinds(&doc, paragraph),
            vec![NodeKind::Text("[ ] task".to_owned())]
        );

        let paragraph = only_child(&doc, items[1]);
        assert_eq!(
            kinds(&doc, paragraph),
            vec![NodeKind::Text("[x] done".to_owned())]
        );
    }

    #[test]
    fn test_loose_list_item_keeps_real_paragraph() {
        let doc = parse("- one\n\n- two", Extensions::default());
        let list = only_child(&doc, doc.root());
        let paragraph = only_child(&doc, doc.children(list)[0]);
        assert_eq!(doc.kind(paragraph), &NodeKind::Paragraph { tight: false });
    }

    #[test]
    fn test_nested_list_closes_implicit_paragraph() {
        let doc = parse("- outer\n  - inner", Extensions::default());
        let list = only_child(&doc, doc.root());
        let item = only_child(&doc, list);
        let children = kinds(&doc, item);
        assert_eq!(children.len(), 2);
        assert_eq!(children[0], NodeKind::Paragraph { tight: true });
        assert_eq!(children[1], NodeKind::List { start: None });
    }

    #[test]
    fn test_ordered_list_start() {
        let doc = parse("3. three\n4. four", Extensions::default());
        let list = only_child(&doc, doc.root());
        assert_eq!(doc.kind(list), &NodeKind::List { start: Some(3) });
    }

    #[test]
    fn test_alert_marker_stays_in_text() {
        let doc = parse("> [!NOTE]\n> hello", Extensions::default());
        let quote = only_child(&doc, doc.root());
        assert_eq!(doc.kind(quote), &NodeKind::BlockQuote);
        let paragraph = only_child(&doc, quote);
        assert_eq!(
            kinds(&doc, paragraph),
            vec![
                NodeKind::Text("[!NOTE]".to_owned()),
                NodeKind::SoftBreak,
                NodeKind::Text("hello".to_owned()),
            ]
        );
    }

    #[test]
    fn test_fenced_code_block() {
        let doc = parse("```go\npackage main\n```", Extensions::default());
        let code = only_child(&doc, doc.root());
        assert_eq!(
            doc.kind(code),
            &NodeKind::CodeBlock {
                info: Some("go".to_owned()),
                literal: "package main\n".to_owned(),
            }
        );
    }

    #[test]
    fn test_fence_without_info_and_indented_code() {
        let doc = parse("```\nplain\n```\n\n    indented\n", Extensions::default());
        let children = doc.children(doc.root());
        assert_eq!(children.len(), 2);
        assert_eq!(doc.info(children[0]), None);
        assert_eq!(doc.literal(children[0]), Some("plain\n"));
        assert_eq!(doc.info(children[1]), None);
        assert_eq!(doc.literal(children[1]), Some("indented\n"));
    }

    #[test]
    fn test_html_block_literal() {
        let doc = parse("<div>\nraw\n</div>\n", Extensions::default());
        let block = only_child(&doc, doc.root());
        assert_eq!(
            doc.kind(block),
            &NodeKind::HtmlBlock("<div>\nraw\n</div>\n".to_owned())
        );
    }

    #[test]
    fn test_table_cells_carry_alignment() {
        let doc = parse("| a | b |\n|:--|--:|\n| 1 | 2 |", Extensions::default());
        let table = only_child(&doc, doc.root());
        let sections = kinds(&doc, table);
        assert_eq!(sections, vec![NodeKind::TableHead, NodeKind::TableRow]);

        let head = doc.children(table)[0];
        assert_eq!(
            kinds(&doc, head),
            vec![
                NodeKind::TableCell {
                    header: true,
                    alignment: Alignment::Left
                },
                NodeKind::TableCell {
                    header: true,
                    alignment: Alignment::Right
                },
            ]
        );
        let row = doc.children(table)[1];
        assert_eq!(
            doc.kind(doc.children(row)[1]),
            &NodeKind::TableCell {
                header: false,
                alignment: Alignment::Right
            }
        );
    }

    #[test]
    fn test_tables_disabled() {
        let doc = parse("| a |\n|---|\n| 1 |", Extensions::none());
        let paragraph = only_child(&doc, doc.root());
        assert_eq!(doc.kind(paragraph), &NodeKind::Paragraph { tight: false });
    }

    #[test]
    fn test_bare_url_becomes_link() {
        let doc = parse("see https://example.com now", Extensions::default());
        let paragraph = only_child(&doc, doc.root());
        let children = doc.children(paragraph);
        assert_eq!(children.len(), 3);
        assert_eq!(
            doc.kind(children[1]),
            &NodeKind::Link {
                url: "https://example.com".to_owned(),
                title: String::new()
            }
        );
        assert_eq!(doc.text_content(children[1]), "https://example.com");
    }

    #[test]
    fn test_url_inside_link_not_split() {
        let doc = parse("[https://a.example](https://b.example)", Extensions::default());
        let paragraph = only_child(&doc, doc.root());
        let link = only_child(&doc, paragraph);
        assert_eq!(
            kinds(&doc, link),
            vec![NodeKind::Text("https://a.example".to_owned())]
        );
    }

    #[test]
    fn test_autolink_disabled() {
        let doc = parse("see https://example.com", Extensions::none());
        let paragraph = only_child(&doc, doc.root());
        assert_eq!(
            kinds(&doc, paragraph),
            vec![NodeKind::Text("see https://example.com".to_owned())]
        );
    }

    #[test]
    fn test_heading_attributes() {
        let doc = parse("## Title {#custom .wide}", Extensions::default());
        let heading = only_child(&doc, doc.root());
        assert_eq!(
            doc.kind(heading),
            &NodeKind::Heading {
                level: 2,
                id: Some("custom".to_owned()),
                classes: vec!["wide".to_owned()],
            }
        );
    }

    #[test]
    fn test_math() {
        let doc = parse("$a^2$", Extensions::default());
        let paragraph = only_child(&doc, doc.root());
        assert_eq!(
            kinds(&doc, paragraph),
            vec![NodeKind::Math {
                display: false,
                literal: "a^2".to_owned()
            }]
        );
    }

    #[test]
    fn test_parents_are_consistent() {
        let doc = parse(
            "# T\n\n> [!TIP]\n> - [x] a\n\n```rust\nfn main() {}\n```\n",
            Extensions::default(),
        );
        for id in doc.descendants(doc.root()) {
            for &child in doc.children(id) {
                assert_eq!(doc.parent(child), Some(id));
            }
        }
    }
}
