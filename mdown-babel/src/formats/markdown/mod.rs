//! Markdown input
//!
//! Data Model:
//!
//!     comrak's tree is richer than the document tree in a few places, so a few mappings are
//!     needed.
//!     | comrak              | mdown      | Notes                                           |
//!     | Heading             | Heading    | level is kept                                   |
//!     | CodeBlock           | Verbatim   | the info string is kept verbatim                |
//!     | Item / TaskItem     | ListItem   | task items carry their checked state            |
//!     | Emph / Strong       | Emphasis   | `strong` tells them apart                       |
//!     | WikiLink            | Link       | the title is the link content                   |
//!     | SoftBreak / ...     | Simple     | breaks and thematic breaks                      |
//!     | anything else       | SuperNode  | children are kept, the kind is not              |
//!
//! Library
//!
//!     comrak does the parsing. The extension mask is translated onto comrak's option structs in
//!     [options]; raw HTML has no per-kind comrak switch, so when `html_blocks` or `inline_html`
//!     is cleared those nodes are detached from comrak's tree right after parsing, before
//!     anything else sees it.

pub mod options;
pub mod parser;

pub use options::comrak_options;
pub use parser::{parse_comrak, parse_markdown};
