//! Markdown parsing (Markdown → document tree)
//!
//! Pipeline: Markdown string → comrak AST → HTML suppression → mdown Document

use super::options::comrak_options;
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena};
use mdown_parser::mdown::ast::{
    BlockQuote, Code, Document, Emphasis, Heading, Html, Image, Link, List, ListItem, Node,
    Paragraph, Simple, SimpleKind, Strike, SuperNode, Text, Verbatim,
};
use mdown_parser::mdown::extensions::Extensions;
use tracing::debug;

/// Parse `source` into comrak's tree with `extensions` applied
///
/// Raw HTML whose pass-through bit is cleared is already detached from the returned root.
pub fn parse_comrak<'a>(
    arena: &'a Arena<AstNode<'a>>,
    source: &str,
    extensions: Extensions,
) -> &'a AstNode<'a> {
    let options = comrak_options(extensions);
    let root = parse_document(arena, source, &options);
    suppress_html(root, extensions);
    root
}

/// Parse Markdown string to a document tree
pub fn parse_markdown(source: &str, extensions: Extensions) -> Document {
    let arena = Arena::new();
    let root = parse_comrak(&arena, source, extensions);
    Document::new(convert_children(root))
}

fn suppress_html<'a>(root: &'a AstNode<'a>, extensions: Extensions) {
    let blocks = !extensions.contains(Extensions::HTML_BLOCKS);
    let inline = !extensions.contains(Extensions::INLINE_HTML);
    if !blocks && !inline {
        return;
    }

    let suppressed: Vec<_> = root
        .descendants()
        .filter(|node| match node.data.borrow().value {
            NodeValue::HtmlBlock(_) => blocks,
            NodeValue::HtmlInline(_) => inline,
            _ => false,
        })
        .collect();

    if !suppressed.is_empty() {
        debug!(count = suppressed.len(), "suppressing raw html");
    }
    for node in suppressed {
        node.detach();
    }
}

fn convert_children<'a>(node: &'a AstNode<'a>) -> Vec<Node> {
    node.children().map(convert_node).collect()
}

/// Convert one comrak node and its subtree
fn convert_node<'a>(node: &'a AstNode<'a>) -> Node {
    let node_data = node.data.borrow();

    match &node_data.value {
        NodeValue::BlockQuote | NodeValue::MultilineBlockQuote(_) => {
            Node::BlockQuote(BlockQuote::new(convert_children(node)))
        }

        NodeValue::List(list) => {
            let ordered = matches!(list.list_type, ListType::Ordered);
            let items = convert_children(node)
                .into_iter()
                .map(|child| match child {
                    Node::ListItem(item) => item,
                    other => ListItem::new(vec![other]),
                })
                .collect();
            Node::List(List::new(ordered, items))
        }

        NodeValue::Item(_) => Node::ListItem(ListItem::new(convert_children(node))),

        NodeValue::TaskItem(symbol) => {
            Node::ListItem(ListItem::task(symbol.is_some(), convert_children(node)))
        }

        NodeValue::CodeBlock(code_block) => Node::Verbatim(Verbatim::new(
            code_block.info.clone(),
            code_block.literal.clone(),
        )),

        NodeValue::HtmlBlock(html) => Node::Html(Html::block(html.literal.clone())),

        NodeValue::Paragraph => Node::Paragraph(Paragraph::new(convert_children(node))),

        NodeValue::Heading(heading) => {
            Node::Heading(Heading::new(heading.level, convert_children(node)))
        }

        NodeValue::ThematicBreak => Node::Simple(Simple::new(SimpleKind::HorizontalRule)),

        NodeValue::Text(text) => Node::Text(Text::new(text.clone())),

        NodeValue::SoftBreak => Node::Simple(Simple::new(SimpleKind::SoftBreak)),

        NodeValue::LineBreak => Node::Simple(Simple::new(SimpleKind::LineBreak)),

        NodeValue::Code(code) => Node::Code(Code::new(code.literal.clone())),

        NodeValue::HtmlInline(literal) => Node::Html(Html::inline(literal.clone())),

        NodeValue::Emph => Node::Emphasis(Emphasis::new(false, convert_children(node))),

        NodeValue::Strong => Node::Emphasis(Emphasis::new(true, convert_children(node))),

        NodeValue::Strikethrough => Node::Strike(Strike::new(convert_children(node))),

        NodeValue::Link(link) => Node::Link(Link::new(
            link.url.clone(),
            link.title.clone(),
            convert_children(node),
        )),

        NodeValue::Image(image) => Node::Image(Image::new(
            image.url.clone(),
            image.title.clone(),
            convert_children(node),
        )),

        NodeValue::WikiLink(wiki) => {
            Node::Link(Link::new(wiki.url.clone(), "", convert_children(node)))
        }

        // Tables, footnotes, description lists and the like keep their content only
        _ => Node::SuperNode(SuperNode::from_children(convert_children(node))),
    }
}
