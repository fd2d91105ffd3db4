//! Text leaves
//!
//! [Text] is a run of literal characters, [Code] an inline code span. Both are leaves.

use super::super::traits::{truncate_label, AstNode, Visitor};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl AstNode for Text {
    fn node_type(&self) -> &'static str {
        "Text"
    }

    fn display_label(&self) -> String {
        truncate_label(&self.text, 50)
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_text(self);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Code {
    pub text: String,
}

impl Code {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl AstNode for Code {
    fn node_type(&self) -> &'static str {
        "Code"
    }

    fn display_label(&self) -> String {
        truncate_label(&self.text, 50)
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_code(self);
    }
}
