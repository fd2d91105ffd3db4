//! Paragraph element
//!
//! A block of inline content: text, code spans, emphasis, links and the breaks between source
//! lines.

use super::super::traits::{truncate_label, AstNode, Visitor};
use super::node::Node;
use super::super_node::SuperNode;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paragraph {
    #[serde(flatten)]
    pub content: SuperNode,
}

impl Paragraph {
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            content: SuperNode::from(children),
        }
    }

    pub fn text(&self) -> String {
        self.content.iter().map(Node::plain_text).collect()
    }
}

impl AstNode for Paragraph {
    fn node_type(&self) -> &'static str {
        "Paragraph"
    }

    fn display_label(&self) -> String {
        truncate_label(&self.text(), 50)
    }

    fn children(&self) -> &[Node] {
        &self.content.children
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_paragraph(self);
    }
}
