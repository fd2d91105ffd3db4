//! Node counting visitor
//!
//! Walks the whole tree and tallies nodes per kind. The driver logs these counts after building
//! a tree, and tests use it to check traversal.

use super::elements::{
    BlockQuote, Code, Document, Emphasis, Heading, Html, Image, Link, List, ListItem, Paragraph,
    Simple, Strike, SuperNode, Text, Verbatim,
};
use super::traits::{visit_children, AstNode, Visitor};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NodeCounter {
    counts: BTreeMap<&'static str, usize>,
}

impl NodeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every node in `document`, the document itself included
    pub fn count(document: &Document) -> Self {
        let mut counter = Self::new();
        document.accept(&mut counter);
        counter
    }

    pub fn get(&self, node_type: &str) -> usize {
        self.counts.get(node_type).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Counts keyed by node type, sorted by name
    pub fn counts(&self) -> &BTreeMap<&'static str, usize> {
        &self.counts
    }

    fn tally(&mut self, node: &dyn AstNode) {
        *self.counts.entry(node.node_type()).or_insert(0) += 1;
        visit_children(self, node.children());
    }
}

impl Visitor for NodeCounter {
    fn visit_document(&mut self, document: &Document) {
        self.tally(document);
    }
    fn visit_super_node(&mut self, node: &SuperNode) {
        self.tally(node);
    }
    fn visit_heading(&mut self, heading: &Heading) {
        self.tally(heading);
    }
    fn visit_paragraph(&mut self, paragraph: &Paragraph) {
        self.tally(paragraph);
    }
    fn visit_block_quote(&mut self, block_quote: &BlockQuote) {
        self.tally(block_quote);
    }
    fn visit_list(&mut self, list: &List) {
        self.tally(list);
    }
    fn visit_list_item(&mut self, list_item: &ListItem) {
        self.tally(list_item);
    }
    fn visit_emphasis(&mut self, emphasis: &Emphasis) {
        self.tally(emphasis);
    }
    fn visit_strike(&mut self, strike: &Strike) {
        self.tally(strike);
    }
    fn visit_link(&mut self, link: &Link) {
        self.tally(link);
    }
    fn visit_image(&mut self, image: &Image) {
        self.tally(image);
    }
    fn visit_text(&mut self, text: &Text) {
        self.tally(text);
    }
    fn visit_code(&mut self, code: &Code) {
        self.tally(code);
    }
    fn visit_verbatim(&mut self, verbatim: &Verbatim) {
        self.tally(verbatim);
    }
    fn visit_html(&mut self, html: &Html) {
        self.tally(html);
    }
    fn visit_simple(&mut self, simple: &Simple) {
        self.tally(simple);
    }
}

#[cfg(test)]
mod tests {
    use super::super::elements::Node;
    use super::*;

    #[test]
    fn test_counts_every_node() {
        let doc = Document::new(vec![
            Node::Heading(Heading::new(1, vec![Node::Text(Text::new("Title"))])),
            Node::Paragraph(Paragraph::new(vec![
                Node::Text(Text::new("a ")),
                Node::Code(Code::new("b")),
            ])),
            Node::SuperNode(SuperNode::new()),
        ]);

        let counter = NodeCounter::count(&doc);
        assert_eq!(counter.get("Document"), 1);
        assert_eq!(counter.get("Heading"), 1);
        assert_eq!(counter.get("Paragraph"), 1);
        assert_eq!(counter.get("Text"), 2);
        assert_eq!(counter.get("Code"), 1);
        assert_eq!(counter.get("SuperNode"), 1);
        assert_eq!(counter.get("List"), 0);
        assert_eq!(counter.total(), 7);
    }
}
