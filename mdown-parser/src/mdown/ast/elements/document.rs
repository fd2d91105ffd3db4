//! Document element
//!
//! The root of a parsed document. All block content hangs off `root`, a plain [SuperNode], so
//! visitors walk the document with the same `children()` interface as every other composite.
//!
//! Dropping the document tears down the whole tree, nodes are never shared between documents.

use super::super::traits::{AstNode, Visitor};
use super::node::Node;
use super::super_node::SuperNode;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub root: SuperNode,
}

impl Document {
    pub fn new(content: Vec<Node>) -> Self {
        Self {
            root: SuperNode::from(content),
        }
    }

    /// Every node below the root, depth first, in document order
    pub fn iter_nodes(&self) -> impl Iterator<Item = &Node> {
        let mut stack: Vec<&Node> = self.root.children.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children().iter().rev());
            Some(node)
        })
    }
}

impl AstNode for Document {
    fn node_type(&self) -> &'static str {
        "Document"
    }

    fn display_label(&self) -> String {
        format!("Document ({} blocks)", self.root.len())
    }

    fn children(&self) -> &[Node] {
        &self.root.children
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_document(self);
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Document({} blocks)", self.root.len())
    }
}
