//! Treeviz formatter for AST nodes
//!
//! Treeviz is a visual representation of the AST, one line per node, which makes a parsed
//! document quick to scan. Nesting is drawn with box connectors, two columns per level:
//!
//!   ⧉ Document (2 blocks)
//!   ├─ § h1 Title
//!   │ └─ ◦ Title
//!   └─ ¶ Hello world
//!     ├─ ◦ Hello
//!     ├─ ↵ soft break
//!     └─ 𝐼 world
//!       └─ ◦ world
//!
//! Each line is <prefix><connector> <icon> <label>, with labels truncated to 30 characters.
//!
//! Icons
//!     Document: ⧉
//!     SuperNode: ○
//!     Heading: §
//!     Paragraph: ¶
//!     BlockQuote: ❝
//!     List: ☰
//!     ListItem: •
//!     Emphasis: 𝐼
//!     Strong: 𝐁
//!     Strike: ∼
//!     Link: ⊕
//!     Image: ▣
//!     Text: ◦
//!     Code: ƒ
//!     Verbatim: 𝒱
//!     Html: ‹›
//!     Simple: ↵ for breaks, ― for rules

use crate::mdown::ast::traits::truncate_label;
use crate::mdown::ast::{
    AstNode, BlockQuote, Code, Document, Emphasis, Heading, Html, Image, Link, List, ListItem,
    Node, Paragraph, Simple, SimpleKind, Strike, SuperNode, Text, Verbatim, Visitor,
};

const MAX_LABEL_CHARS: usize = 30;

/// Get the icon for a node type
fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Heading" => "§",
        "Paragraph" => "¶",
        "BlockQuote" => "❝",
        "List" => "☰",
        "ListItem" => "•",
        "Emphasis" => "𝐼",
        "Strong" => "𝐁",
        "Strike" => "∼",
        "Link" => "⊕",
        "Image" => "▣",
        "Text" => "◦",
        "Code" => "ƒ",
        "Verbatim" => "𝒱",
        "Html" => "‹›",
        _ => "○",
    }
}

/// Visitor that renders one line per node
#[derive(Debug, Default)]
pub struct TreevizVisitor {
    output: String,
    prefix: String,
    is_last: bool,
}

impl TreevizVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.output
    }

    fn write_line(&mut self, icon: &str, label: &str) {
        let connector = if self.is_last { "└─" } else { "├─" };
        self.output.push_str(&format!(
            "{}{} {} {}\n",
            self.prefix,
            connector,
            icon,
            truncate_label(label, MAX_LABEL_CHARS)
        ));
    }

    fn node(&mut self, node: &dyn AstNode) {
        self.write_line(get_icon(node.node_type()), &node.display_label());

        let saved = self.prefix.len();
        self.prefix.push_str(if self.is_last { "  " } else { "│ " });
        self.children(node.children());
        self.prefix.truncate(saved);
    }

    fn children(&mut self, children: &[Node]) {
        let count = children.len();
        for (index, child) in children.iter().enumerate() {
            self.is_last = index + 1 == count;
            child.accept(self);
        }
    }
}

impl Visitor for TreevizVisitor {
    fn visit_document(&mut self, document: &Document) {
        self.output.push_str(&format!(
            "{} {}\n",
            get_icon(document.node_type()),
            truncate_label(&document.display_label(), MAX_LABEL_CHARS)
        ));
        self.children(document.children());
    }
    fn visit_super_node(&mut self, node: &SuperNode) {
        self.node(node);
    }
    fn visit_heading(&mut self, heading: &Heading) {
        self.node(heading);
    }
    fn visit_paragraph(&mut self, paragraph: &Paragraph) {
        self.node(paragraph);
    }
    fn visit_block_quote(&mut self, block_quote: &BlockQuote) {
        self.node(block_quote);
    }
    fn visit_list(&mut self, list: &List) {
        self.node(list);
    }
    fn visit_list_item(&mut self, list_item: &ListItem) {
        self.node(list_item);
    }
    fn visit_emphasis(&mut self, emphasis: &Emphasis) {
        self.node(emphasis);
    }
    fn visit_strike(&mut self, strike: &Strike) {
        self.node(strike);
    }
    fn visit_link(&mut self, link: &Link) {
        self.node(link);
    }
    fn visit_image(&mut self, image: &Image) {
        self.node(image);
    }
    fn visit_text(&mut self, text: &Text) {
        self.node(text);
    }
    fn visit_code(&mut self, code: &Code) {
        self.node(code);
    }
    fn visit_verbatim(&mut self, verbatim: &Verbatim) {
        self.node(verbatim);
    }
    fn visit_html(&mut self, html: &Html) {
        self.node(html);
    }
    fn visit_simple(&mut self, simple: &Simple) {
        let icon = match simple.kind {
            SimpleKind::HorizontalRule => "―",
            SimpleKind::LineBreak | SimpleKind::SoftBreak => "↵",
        };
        self.write_line(icon, &simple.display_label());
    }
}

/// Render a document as treeviz text
pub fn to_treeviz_str(document: &Document) -> String {
    let mut visitor = TreevizVisitor::new();
    document.accept(&mut visitor);
    visitor.finish()
}
