//! Node
//!
//! `Node` is the common wrapper for every element that can appear in document content. It lets
//! tooling operate uniformly on mixed structures, and it is the closed set of kinds a [Visitor]
//! has handlers for.

use super::super::traits::{AstNode, Visitor};
use super::block_quote::BlockQuote;
use super::heading::Heading;
use super::html::Html;
use super::inlines::{Emphasis, Image, Link, Strike};
use super::list::{List, ListItem};
use super::paragraph::Paragraph;
use super::simple::Simple;
use super::super_node::SuperNode;
use super::text::{Code, Text};
use super::verbatim::Verbatim;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    SuperNode(SuperNode),
    Heading(Heading),
    Paragraph(Paragraph),
    BlockQuote(BlockQuote),
    List(List),
    ListItem(ListItem),
    Emphasis(Emphasis),
    Strike(Strike),
    Link(Link),
    Image(Image),
    Text(Text),
    Code(Code),
    Verbatim(Verbatim),
    Html(Html),
    Simple(Simple),
}

impl Node {
    fn as_ast_node(&self) -> &dyn AstNode {
        match self {
            Node::SuperNode(n) => n,
            Node::Heading(n) => n,
            Node::Paragraph(n) => n,
            Node::BlockQuote(n) => n,
            Node::List(n) => n,
            Node::ListItem(n) => n,
            Node::Emphasis(n) => n,
            Node::Strike(n) => n,
            Node::Link(n) => n,
            Node::Image(n) => n,
            Node::Text(n) => n,
            Node::Code(n) => n,
            Node::Verbatim(n) => n,
            Node::Html(n) => n,
            Node::Simple(n) => n,
        }
    }

    /// Whether this node can hold children
    pub fn is_composite(&self) -> bool {
        !matches!(
            self,
            Node::Text(_) | Node::Code(_) | Node::Verbatim(_) | Node::Html(_) | Node::Simple(_)
        )
    }

    /// Plain text of this node and its descendants, concatenated in document order
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&text.text),
            Node::Code(code) => out.push_str(&code.text),
            Node::Verbatim(verbatim) => out.push_str(&verbatim.text),
            Node::Simple(simple) if simple.kind.is_break() => out.push(' '),
            _ => {
                for child in self.children() {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        self.as_ast_node().node_type()
    }

    fn display_label(&self) -> String {
        self.as_ast_node().display_label()
    }

    fn children(&self) -> &[Node] {
        self.as_ast_node().children()
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        self.as_ast_node().accept(visitor)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.node_type(), self.display_label())
    }
}
