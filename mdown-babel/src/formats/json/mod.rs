//! JSON format
//!
//! The document tree serialized with serde. Every node is an object tagged with its kind in
//! `type`, composites list their children under `children`.

use crate::error::FormatError;
use crate::format::Format;
use mdown_parser::mdown::ast::{Document, NodeCounter};
use tracing::debug;

#[derive(Default)]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Document tree as pretty-printed JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        debug!(total = NodeCounter::count(doc).total(), "json nodes");
        let mut output = serde_json::to_string_pretty(doc)?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdown_parser::mdown::extensions::Extensions;

    #[test]
    fn test_convert() {
        let output = JsonFormat.convert("*hi*\n", Extensions::empty()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        let paragraph = &value["root"]["children"][0];
        assert_eq!(paragraph["type"], "Paragraph");
        assert_eq!(paragraph["children"][0]["type"], "Emphasis");
        assert_eq!(paragraph["children"][0]["strong"], false);
        assert_eq!(paragraph["children"][0]["children"][0]["text"], "hi");
    }
}
