//! HTML format implementation
//!
//! Strategy: Markdown → comrak AST → comrak's HTML renderer (one-way only)
//!
//! HTML output is the engine contract of the tool, so it bypasses the document tree entirely and
//! lets comrak render its own tree. The extension mask is honored through the comrak options, and
//! raw HTML whose bit is cleared is gone from the tree before rendering.
//!
//! The output is an HTML fragment, no `<html>` or `<body>` wrapper is added.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::markdown::{comrak_options, parse_comrak};
use comrak::{format_html, Arena};
use mdown_parser::mdown::extensions::Extensions;
use tracing::debug;

/// HTML fragment output
#[derive(Default)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment rendered by comrak"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn convert(&self, source: &str, extensions: Extensions) -> Result<String, FormatError> {
        let arena = Arena::new();
        let root = parse_comrak(&arena, source, extensions);

        let mut buffer = Vec::with_capacity(source.len() * 2);
        format_html(root, &comrak_options(extensions), &mut buffer)?;
        debug!(bytes = buffer.len(), "rendered html");

        Ok(String::from_utf8(buffer)?)
    }
}
