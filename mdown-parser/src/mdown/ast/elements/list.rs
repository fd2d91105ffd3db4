//! List and list item elements
//!
//! A list holds only [ListItem] children. Items hold blocks. Task list items carry a `checked`
//! state, plain items leave it empty.

use super::super::traits::{AstNode, Visitor};
use super::node::Node;
use super::super_node::SuperNode;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct List {
    pub ordered: bool,
    #[serde(flatten)]
    pub items: SuperNode,
}

impl List {
    pub fn new(ordered: bool, items: Vec<ListItem>) -> Self {
        Self {
            ordered,
            items: items.into_iter().map(Node::ListItem).collect(),
        }
    }
}

impl AstNode for List {
    fn node_type(&self) -> &'static str {
        "List"
    }

    fn display_label(&self) -> String {
        let kind = if self.ordered { "ordered" } else { "bullet" };
        format!("{} items ({})", self.items.len(), kind)
    }

    fn children(&self) -> &[Node] {
        &self.items.children
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_list(self);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(flatten)]
    pub content: SuperNode,
}

impl ListItem {
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            checked: None,
            content: SuperNode::from(children),
        }
    }

    pub fn task(checked: bool, children: Vec<Node>) -> Self {
        Self {
            checked: Some(checked),
            content: SuperNode::from(children),
        }
    }
}

impl AstNode for ListItem {
    fn node_type(&self) -> &'static str {
        "ListItem"
    }

    fn display_label(&self) -> String {
        let text: String = self.content.iter().map(Node::plain_text).collect();
        match self.checked {
            Some(true) => format!("[x] {}", text),
            Some(false) => format!("[ ] {}", text),
            None => text,
        }
    }

    fn children(&self) -> &[Node] {
        &self.content.children
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_list_item(self);
    }
}

#[cfg(test)]
mod tests {
    use super::super::text::Text;
    use super::*;

    #[test]
    fn test_list_children_are_items() {
        let list = List::new(
            true,
            vec![
                ListItem::new(vec![Node::Text(Text::new("one"))]),
                ListItem::task(true, vec![Node::Text(Text::new("two"))]),
            ],
        );
        assert_eq!(list.children().len(), 2);
        assert!(list
            .children()
            .iter()
            .all(|child| matches!(child, Node::ListItem(_))));
        assert_eq!(list.display_label(), "2 items (ordered)");
        assert_eq!(list.children()[1].display_label(), "[x] two");
    }
}
