//! AST definitions for parsed Markdown documents
//!
//!     The tree is a composite: [SuperNode](elements::SuperNode) is the generic container and
//!     every other composite kind embeds one. Children are owned exclusively by their parent and
//!     kept in document order; there are no back references.
//!
//!     See the [elements] module for the kinds and what each holds.
//!
//! Visiting
//!
//!     Behavior is dispatched over the tree with the [Visitor](traits::Visitor) trait. Every
//!     node's `accept` calls the handler for its own kind, passing itself, and does nothing else.
//!     Composites are not expanded: a visitor that wants to descend calls
//!     [visit_children](traits::visit_children) from its handler. This keeps traversal strategy
//!     out of the tree, so a renderer can walk in order while a search can stop early or skip a
//!     subtree.
//!
//! Building
//!
//!     Trees are built by the Markdown front end (mdown-babel) from the parser's output, mutated
//!     only by appending children while they are assembled, and read-only afterwards.

pub mod counter;
pub mod elements;
pub mod traits;

pub use counter::NodeCounter;
pub use elements::{
    BlockQuote, Code, Document, Emphasis, Heading, Html, Image, Link, List, ListItem, Node,
    Paragraph, Simple, SimpleKind, Strike, SuperNode, Text, Verbatim,
};
pub use traits::{visit_children, AstNode, Visitor};
