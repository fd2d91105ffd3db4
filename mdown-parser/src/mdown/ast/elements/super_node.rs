//! SuperNode element
//!
//! The generic composite: an ordered list of child nodes of any kind. Every typed composite
//! (headings, paragraphs, lists, links, ...) embeds one to hold its children, and content the
//! typed kinds do not cover (tables, footnote definitions, description lists) is kept as a bare
//! `SuperNode` so nothing is dropped from the tree.
//!
//! A SuperNode owns its children exclusively and children hold no reference back to it. Order is
//! document order and is preserved as appended.

use super::super::traits::{AstNode, Visitor};
use super::node::Node;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SuperNode {
    pub children: Vec<Node>,
}

impl SuperNode {
    /// Create an empty node
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node holding a single child
    pub fn with_child(child: Node) -> Self {
        let mut node = Self::new();
        node.push(child);
        node
    }

    /// Create a node from children in document order
    pub fn from_children(children: impl IntoIterator<Item = Node>) -> Self {
        let mut node = Self::new();
        for child in children {
            node.push(child);
        }
        node
    }

    /// Append a child after the existing ones
    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.children.iter()
    }
}

impl AstNode for SuperNode {
    fn node_type(&self) -> &'static str {
        "SuperNode"
    }

    fn display_label(&self) -> String {
        format!("{} items", self.children.len())
    }

    fn children(&self) -> &[Node] {
        &self.children
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        // The visitor decides whether to descend
        visitor.visit_super_node(self);
    }
}

impl From<Vec<Node>> for SuperNode {
    fn from(children: Vec<Node>) -> Self {
        Self::from_children(children)
    }
}

impl From<Node> for SuperNode {
    fn from(child: Node) -> Self {
        Self::with_child(child)
    }
}

impl FromIterator<Node> for SuperNode {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self::from_children(iter)
    }
}

impl<'a> IntoIterator for &'a SuperNode {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

impl fmt::Display for SuperNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SuperNode({} items)", self.children.len())
    }
}

#[cfg(test)]
mod tests {
    use super::super::text::Text;
    use super::*;

    fn text(value: &str) -> Node {
        Node::Text(Text::new(value))
    }

    #[test]
    fn test_empty() {
        let node = SuperNode::new();
        assert_eq!(node.len(), 0);
        assert!(node.is_empty());
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_with_child() {
        let node = SuperNode::with_child(text("only"));
        assert_eq!(node.children(), &[text("only")]);
    }

    #[test]
    fn test_from_children_keeps_order() {
        let node = SuperNode::from_children(vec![text("a"), text("b"), text("c")]);
        let labels: Vec<_> = node.iter().map(|child| child.display_label()).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_constructors_match_push() {
        let mut pushed = SuperNode::new();
        pushed.push(text("a"));
        pushed.push(text("b"));

        assert_eq!(SuperNode::from(vec![text("a"), text("b")]), pushed);
        assert_eq!(
            vec![text("a"), text("b")].into_iter().collect::<SuperNode>(),
            pushed
        );

        let mut single = SuperNode::new();
        single.push(text("a"));
        assert_eq!(SuperNode::from(text("a")), single);
    }

    #[test]
    fn test_display() {
        let node = SuperNode::from_children(vec![text("a")]);
        assert_eq!(node.to_string(), "SuperNode(1 items)");
        assert_eq!(node.display_label(), "1 items");
    }
}
