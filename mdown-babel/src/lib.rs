//! Output formats for mdown
//!
//!     This crate turns Markdown source plus a resolved extension mask into output text. It
//!     provides a uniform interface over every output format so the command line only has to
//!     pick one by name.
//!
//! Architecture
//!
//!     - Format trait: uniform interface for all formats, see [format]
//!     - FormatRegistry: centralized discovery and selection of formats
//!     - Format implementations: html, treeviz and json
//!
//!     This is a pure lib, it powers mdown-cli but is shell agnostic: no code here should suppose
//!     a shell environment, be it printing to stdout, env vars or file paths.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── markdown            # comrak driver and comrak AST → document tree
//!     │   ├── html
//!     │   ├── treeviz
//!     │   └── json
//!     └── lib.rs
//!
//! Implementation Principles
//!
//!     We offload as much as possible to specialized crates. comrak owns Markdown parsing and
//!     HTML rendering, the scope here is adapting the extension mask onto comrak's options and
//!     comrak's AST onto the document tree. We never write a Markdown parser or HTML serializer
//!     ourselves.

pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;
