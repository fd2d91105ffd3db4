//! Simple element
//!
//! Leaves without content of their own: hard and soft line breaks and horizontal rules.

use super::super::traits::{AstNode, Visitor};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimpleKind {
    LineBreak,
    SoftBreak,
    HorizontalRule,
}

impl SimpleKind {
    pub fn is_break(&self) -> bool {
        matches!(self, SimpleKind::LineBreak | SimpleKind::SoftBreak)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Simple {
    pub kind: SimpleKind,
}

impl Simple {
    pub fn new(kind: SimpleKind) -> Self {
        Self { kind }
    }
}

impl AstNode for Simple {
    fn node_type(&self) -> &'static str {
        "Simple"
    }

    fn display_label(&self) -> String {
        match self.kind {
            SimpleKind::LineBreak => "line break",
            SimpleKind::SoftBreak => "soft break",
            SimpleKind::HorizontalRule => "horizontal rule",
        }
        .to_string()
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_simple(self);
    }
}
