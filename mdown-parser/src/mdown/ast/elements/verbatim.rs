//! Verbatim element
//!
//! A fenced or indented code block. `info` is the fence's info string (usually the language),
//! empty for indented blocks. The text is kept exactly as written.

use super::super::traits::{AstNode, Visitor};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verbatim {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub info: String,
    pub text: String,
}

impl Verbatim {
    pub fn new(info: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            info: info.into(),
            text: text.into(),
        }
    }

    /// First word of the info string
    pub fn language(&self) -> Option<&str> {
        self.info.split_whitespace().next()
    }
}

impl AstNode for Verbatim {
    fn node_type(&self) -> &'static str {
        "Verbatim"
    }

    fn display_label(&self) -> String {
        let lines = self.text.lines().count();
        match self.language() {
            Some(language) => format!("{} ({} lines)", language, lines),
            None => format!("{} lines", lines),
        }
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_verbatim(self);
    }
}
