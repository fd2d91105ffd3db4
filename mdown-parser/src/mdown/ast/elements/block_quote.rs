//! Block quote element

use super::super::traits::{AstNode, Visitor};
use super::node::Node;
use super::super_node::SuperNode;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockQuote {
    #[serde(flatten)]
    pub content: SuperNode,
}

impl BlockQuote {
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            content: SuperNode::from(children),
        }
    }
}

impl AstNode for BlockQuote {
    fn node_type(&self) -> &'static str {
        "BlockQuote"
    }

    fn display_label(&self) -> String {
        format!("{} blocks", self.content.len())
    }

    fn children(&self) -> &[Node] {
        &self.content.children
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_block_quote(self);
    }
}
