//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for turning Markdown source into output text.

use crate::error::FormatError;
use crate::formats::markdown;
use mdown_parser::mdown::ast::Document;
use mdown_parser::mdown::extensions::Extensions;

/// Trait for output formats
///
/// Every format takes Markdown source plus the resolved extension mask and produces text. The
/// default [Format::convert] parses the source into a [Document] and hands it to
/// [Format::serialize], so formats that work on the document tree only implement the latter.
/// Formats that render straight from the engine's own tree (html) override `convert` instead.
///
/// # Examples
///
/// ```ignore
/// struct Outline;
///
/// impl Format for Outline {
///     fn name(&self) -> &str {
///         "outline"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
///         Ok(format!("{} blocks", doc.root.len()))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "treeviz")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions this format writes, preferred first
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Extension used when the output path is derived from the input path
    fn file_extension(&self) -> &str {
        self.file_extensions()
            .first()
            .copied()
            .unwrap_or_else(|| self.name())
    }

    /// Whether this format can serialize a parsed [Document]
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Serialize a Document into output text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _doc: &Document) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Convert Markdown source into this format's output
    fn convert(&self, source: &str, extensions: Extensions) -> Result<String, FormatError> {
        let doc = markdown::parse_markdown(source, extensions);
        self.serialize(&doc)
    }
}
