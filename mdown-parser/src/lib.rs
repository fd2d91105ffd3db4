//! # mdown-parser
//!
//! Core types for converting Markdown to HTML.
//!
//! File Layout
//!
//!     src/mdown
//!       ├── extensions   Named extension bits and the ordered directive resolver
//!       ├── ast          Document tree: SuperNode composite, typed kinds, Visitor
//!       └── formats      Visitor-based text renderings of the tree (treeviz)
//!
//! Nothing here parses Markdown. The grammar lives in the engine wrapped by mdown-babel, which
//! builds [Document](mdown::ast::Document) trees from its output and hands the resolved
//! [Extensions](mdown::extensions::Extensions) mask to it.

pub mod mdown;
