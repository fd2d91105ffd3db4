//! Treeviz format
//!
//! One line per node of the parsed document, drawn with box connectors. Meant for inspecting
//! what the engine made of a document and for diffing two extension selections. See
//! [mdown_parser::mdown::formats::treeviz] for the layout.

use crate::error::FormatError;
use crate::format::Format;
use mdown_parser::mdown::ast::{Document, NodeCounter};
use mdown_parser::mdown::formats::to_treeviz_str;
use tracing::debug;

#[derive(Default)]
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Document tree, one node per line"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let counter = NodeCounter::count(doc);
        debug!(total = counter.total(), counts = ?counter.counts(), "treeviz nodes");
        Ok(to_treeviz_str(doc))
    }
}
