//! Heading element
//!
//! An ATX (`# Title`) or setext heading. Level runs from 1 to 6, the inline content is held in
//! the embedded [SuperNode].

use super::super::traits::{truncate_label, AstNode, Visitor};
use super::node::Node;
use super::super_node::SuperNode;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    pub level: u8,
    #[serde(flatten)]
    pub content: SuperNode,
}

impl Heading {
    pub fn new(level: u8, children: Vec<Node>) -> Self {
        Self {
            level,
            content: SuperNode::from(children),
        }
    }

    pub fn text(&self) -> String {
        self.content.iter().map(Node::plain_text).collect()
    }
}

impl AstNode for Heading {
    fn node_type(&self) -> &'static str {
        "Heading"
    }

    fn display_label(&self) -> String {
        format!("h{} {}", self.level, truncate_label(&self.text(), 50))
    }

    fn children(&self) -> &[Node] {
        &self.content.children
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_heading(self);
    }
}

#[cfg(test)]
mod tests {
    use super::super::text::Text;
    use super::*;

    #[test]
    fn test_heading_label() {
        let heading = Heading::new(2, vec![Node::Text(Text::new("Install"))]);
        assert_eq!(heading.display_label(), "h2 Install");
        assert_eq!(heading.text(), "Install");
    }
}
