//! AST traits - Common interfaces for uniform node access
//!
//! This module defines the visitor contract and the trait every node kind implements.

use super::elements::{
    BlockQuote, Code, Document, Emphasis, Heading, Html, Image, Link, List, ListItem, Node,
    Paragraph, Simple, Strike, SuperNode, Text, Verbatim,
};

/// Visitor trait for traversing the AST
///
/// One handler per concrete node kind. `accept` on a node calls exactly the handler for its own
/// kind and nothing else, so a visitor that wants the children has to ask for them, usually via
/// [visit_children]. That leaves traversal order (pre-order, post-order, skipping subtrees) to
/// the visitor.
///
/// Default implementations are empty, so you only need to override the methods you care about.
///
/// # Example
///
/// ```ignore
/// struct Headings(Vec<u8>);
///
/// impl Visitor for Headings {
///     fn visit_document(&mut self, document: &Document) {
///         visit_children(self, document.children());
///     }
///     fn visit_heading(&mut self, heading: &Heading) {
///         self.0.push(heading.level);
///     }
/// }
/// ```
pub trait Visitor {
    // Composites
    fn visit_document(&mut self, _document: &Document) {}
    fn visit_super_node(&mut self, _node: &SuperNode) {}
    fn visit_heading(&mut self, _heading: &Heading) {}
    fn visit_paragraph(&mut self, _paragraph: &Paragraph) {}
    fn visit_block_quote(&mut self, _block_quote: &BlockQuote) {}
    fn visit_list(&mut self, _list: &List) {}
    fn visit_list_item(&mut self, _list_item: &ListItem) {}
    fn visit_emphasis(&mut self, _emphasis: &Emphasis) {}
    fn visit_strike(&mut self, _strike: &Strike) {}
    fn visit_link(&mut self, _link: &Link) {}
    fn visit_image(&mut self, _image: &Image) {}

    // Leaf nodes
    fn visit_text(&mut self, _text: &Text) {}
    fn visit_code(&mut self, _code: &Code) {}
    fn visit_verbatim(&mut self, _verbatim: &Verbatim) {}
    fn visit_html(&mut self, _html: &Html) {}
    fn visit_simple(&mut self, _simple: &Simple) {}
}

/// Helper function to visit all children of a node, in document order
pub fn visit_children(visitor: &mut dyn Visitor, children: &[Node]) {
    for child in children {
        child.accept(visitor);
    }
}

/// Common interface for all AST nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;

    /// Children in document order. Leaves have none.
    fn children(&self) -> &[Node] {
        &[]
    }

    /// Hand this node to the visitor's handler for its kind
    fn accept(&self, visitor: &mut dyn Visitor);
}

/// Keep the first `max_chars` characters, marking a cut with `...`
pub(crate) fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let mut truncated = text.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("short", 10), "short");
        assert_eq!(truncate_label("a longer label", 8), "a longer...");
        assert_eq!(truncate_label("abc", 3), "abc");
        assert_eq!(truncate_label("ééééé", 2), "éé...");
    }

    #[test]
    fn test_visitor_traversal() {
        // Document > Paragraph > Text
        let document = Document::new(vec![Node::Paragraph(Paragraph::new(vec![Node::Text(
            Text::new("Hello, World!"),
        )]))]);

        struct CountingVisitor {
            documents: usize,
            paragraphs: usize,
            texts: usize,
        }

        impl Visitor for CountingVisitor {
            fn visit_document(&mut self, document: &Document) {
                self.documents += 1;
                visit_children(self, document.children());
            }
            fn visit_paragraph(&mut self, paragraph: &Paragraph) {
                self.paragraphs += 1;
                visit_children(self, paragraph.children());
            }
            fn visit_text(&mut self, _: &Text) {
                self.texts += 1;
            }
        }

        let mut visitor = CountingVisitor {
            documents: 0,
            paragraphs: 0,
            texts: 0,
        };

        document.accept(&mut visitor);
        assert_eq!(visitor.documents, 1);
        assert_eq!(visitor.paragraphs, 1);
        assert_eq!(visitor.texts, 1);
    }

    #[test]
    fn test_visitor_without_recursion_stops_at_root() {
        let document = Document::new(vec![Node::Text(Text::new("ignored"))]);

        #[derive(Default)]
        struct Shallow {
            texts: usize,
        }
        impl Visitor for Shallow {
            fn visit_text(&mut self, _: &Text) {
                self.texts += 1;
            }
        }

        let mut visitor = Shallow::default();
        document.accept(&mut visitor);
        assert_eq!(visitor.texts, 0);
    }
}
