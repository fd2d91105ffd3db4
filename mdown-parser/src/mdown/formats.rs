//! Text renderings of the AST used for inspection and debugging

pub mod treeviz;

pub use treeviz::{to_treeviz_str, TreevizVisitor};
