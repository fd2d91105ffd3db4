//! Raw HTML element
//!
//! Raw HTML passed through from the source, either a whole block or an inline tag.

use super::super::traits::{truncate_label, AstNode, Visitor};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Html {
    pub literal: String,
    pub block: bool,
}

impl Html {
    pub fn block(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
            block: true,
        }
    }

    pub fn inline(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
            block: false,
        }
    }
}

impl AstNode for Html {
    fn node_type(&self) -> &'static str {
        "Html"
    }

    fn display_label(&self) -> String {
        truncate_label(self.literal.trim(), 50)
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_html(self);
    }
}
