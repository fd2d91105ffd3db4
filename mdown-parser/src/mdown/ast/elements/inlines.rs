//! Inline composites
//!
//! Emphasis, strikethrough, links and images. Each wraps inline children: for links that is the
//! anchor text, for images the alt text.

use super::super::traits::{AstNode, Visitor};
use super::node::Node;
use super::super_node::SuperNode;
use serde::Serialize;

/// `*em*` or, when `strong`, `**strong**`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Emphasis {
    pub strong: bool,
    #[serde(flatten)]
    pub content: SuperNode,
}

impl Emphasis {
    pub fn new(strong: bool, children: Vec<Node>) -> Self {
        Self {
            strong,
            content: SuperNode::from(children),
        }
    }
}

impl AstNode for Emphasis {
    fn node_type(&self) -> &'static str {
        if self.strong {
            "Strong"
        } else {
            "Emphasis"
        }
    }

    fn display_label(&self) -> String {
        self.content.iter().map(Node::plain_text).collect()
    }

    fn children(&self) -> &[Node] {
        &self.content.children
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_emphasis(self);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Strike {
    #[serde(flatten)]
    pub content: SuperNode,
}

impl Strike {
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            content: SuperNode::from(children),
        }
    }
}

impl AstNode for Strike {
    fn node_type(&self) -> &'static str {
        "Strike"
    }

    fn display_label(&self) -> String {
        self.content.iter().map(Node::plain_text).collect()
    }

    fn children(&self) -> &[Node] {
        &self.content.children
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_strike(self);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(flatten)]
    pub content: SuperNode,
}

impl Link {
    pub fn new(url: impl Into<String>, title: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            content: SuperNode::from(children),
        }
    }
}

impl AstNode for Link {
    fn node_type(&self) -> &'static str {
        "Link"
    }

    fn display_label(&self) -> String {
        self.url.clone()
    }

    fn children(&self) -> &[Node] {
        &self.content.children
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_link(self);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(flatten)]
    pub alt: SuperNode,
}

impl Image {
    pub fn new(url: impl Into<String>, title: impl Into<String>, alt: Vec<Node>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            alt: SuperNode::from(alt),
        }
    }
}

impl AstNode for Image {
    fn node_type(&self) -> &'static str {
        "Image"
    }

    fn display_label(&self) -> String {
        self.url.clone()
    }

    fn children(&self) -> &[Node] {
        &self.alt.children
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_image(self);
    }
}
