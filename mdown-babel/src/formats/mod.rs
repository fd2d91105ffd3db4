//! Format implementations
//!
//! `markdown` is the input side shared by every format: it drives the engine and adapts its tree.
//! The rest are the output formats registered by default.

pub mod html;
pub mod json;
pub mod markdown;
pub mod treeviz;

pub use html::HtmlFormat;
pub use json::JsonFormat;
pub use treeviz::TreevizFormat;
