//! Element types for the document AST
//!
//!     The tree is made of one generic composite, [SuperNode], plus typed kinds. Typed
//!     composites embed a SuperNode for their children, leaves carry only their own payload.
//!
//!     | Kind        | Children        | Payload                    |
//!     |-------------|-----------------|----------------------------|
//!     | Document    | blocks          |                            |
//!     | SuperNode   | anything        |                            |
//!     | Heading     | inlines         | level                      |
//!     | Paragraph   | inlines         |                            |
//!     | BlockQuote  | blocks          |                            |
//!     | List        | ListItem only   | ordered                    |
//!     | ListItem    | blocks          | checked (task lists)       |
//!     | Emphasis    | inlines         | strong                     |
//!     | Strike      | inlines         |                            |
//!     | Link        | inlines         | url, title                 |
//!     | Image       | inlines (alt)   | url, title                 |
//!     | Text        |                 | text                       |
//!     | Code        |                 | text                       |
//!     | Verbatim    |                 | info, text                 |
//!     | Html        |                 | literal, block             |
//!     | Simple      |                 | line/soft break, rule      |

pub mod block_quote;
pub mod document;
pub mod heading;
pub mod html;
pub mod inlines;
pub mod list;
pub mod node;
pub mod paragraph;
pub mod simple;
pub mod super_node;
pub mod text;
pub mod verbatim;

pub use block_quote::BlockQuote;
pub use document::Document;
pub use heading::Heading;
pub use html::Html;
pub use inlines::{Emphasis, Image, Link, Strike};
pub use list::{List, ListItem};
pub use node::Node;
pub use paragraph::Paragraph;
pub use simple::{Simple, SimpleKind};
pub use super_node::SuperNode;
pub use text::{Code, Text};
pub use verbatim::Verbatim;
