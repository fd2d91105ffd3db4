//! Markdown extensions and their composition
//!
//!     An extension is a named, independently togglable parsing feature. Each one owns a single
//!     bit of an [Extensions] mask, and the name to bit mapping is the fixed table [REGISTRY].
//!     The table is ordered and static: it is built at compile time, never mutated, and safe to
//!     read from anywhere.
//!
//!     Bit values are fixed and sparse. Only extensions the conversion engine can honor are
//!     registered, so some values are left unused.
//!
//! Selecting Extensions
//!
//!     A feature selection starts from a default mask (usually every extension) and is mutated by
//!     an ordered list of [Directive]s, see the [directive] module. Resolution is a pure fold over
//!     that list:
//!
//!         -Eall +Etables +Estrikethrough   ->  tables | strikethrough
//!
//!     Masks print in binary with `{:b}`, which is how the driver logs them.
//!
//!     Names are matched exactly and case-sensitively. The reserved name [ALL_NAME] stands for
//!     every defined bit. Unknown names resolve to the empty set, they do not fail.

pub mod directive;

use bitflags::bitflags;

pub use directive::{resolve, Directive, Sign, DISABLE_MARKER, ENABLE_MARKER};

bitflags! {
    /// A set of enabled extensions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Extensions: u32 {
        /// Typographic dashes and ellipses.
        const SMARTS = 0x0000_0001;
        /// Typographic quotes.
        const QUOTES = 0x0000_0002;
        /// Line breaks inside paragraphs become `<br />`.
        const HARDWRAPS = 0x0000_0008;
        /// Bare URLs and emails become links.
        const AUTOLINKS = 0x0000_0010;
        /// Pipe tables.
        const TABLES = 0x0000_0020;
        /// Definition lists.
        const DEFINITIONS = 0x0000_0040;
        /// `[[target|title]]` links.
        const WIKILINKS = 0x0000_0100;
        /// `~~struck~~` text.
        const STRIKETHROUGH = 0x0000_0200;
        /// Anchors on headings.
        const ANCHORLINKS = 0x0000_0400;
        /// Raw HTML blocks pass through. Cleared, they are dropped from the output.
        const HTML_BLOCKS = 0x0001_0000;
        /// Raw inline HTML passes through. Cleared, it is dropped from the output.
        const INLINE_HTML = 0x0002_0000;
        /// `- [x]` task list items.
        const TASKLISTITEMS = 0x0020_0000;
        /// `[^1]` footnotes.
        const FOOTNOTES = 0x0100_0000;
        /// `^superscript^` text.
        const SUPERSCRIPT = 0x0200_0000;
    }
}

/// Reserved name selecting every defined extension.
pub const ALL_NAME: &str = "all";

/// Name to bit table, in display order.
pub static REGISTRY: &[(&str, Extensions)] = &[
    ("smarts", Extensions::SMARTS),
    ("quotes", Extensions::QUOTES),
    ("hardwraps", Extensions::HARDWRAPS),
    ("autolinks", Extensions::AUTOLINKS),
    ("tables", Extensions::TABLES),
    ("definitions", Extensions::DEFINITIONS),
    ("wikilinks", Extensions::WIKILINKS),
    ("strikethrough", Extensions::STRIKETHROUGH),
    ("anchorlinks", Extensions::ANCHORLINKS),
    ("html_blocks", Extensions::HTML_BLOCKS),
    ("inline_html", Extensions::INLINE_HTML),
    ("tasklistitems", Extensions::TASKLISTITEMS),
    ("footnotes", Extensions::FOOTNOTES),
    ("superscript", Extensions::SUPERSCRIPT),
];

/// Look up the bits for an extension name.
///
/// Exact, case-sensitive match. [ALL_NAME] yields every defined bit, anything else that is not
/// in [REGISTRY] (including the empty string) yields the empty set.
pub fn lookup(name: &str) -> Extensions {
    if name == ALL_NAME {
        return Extensions::all();
    }
    REGISTRY
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|(_, bits)| *bits)
        .unwrap_or_else(Extensions::empty)
}

/// Whether `name` is a registered extension or the reserved [ALL_NAME].
pub fn is_known(name: &str) -> bool {
    name == ALL_NAME || REGISTRY.iter().any(|(registered, _)| *registered == name)
}

/// Registered names in table order, without the reserved [ALL_NAME].
pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(name, _)| *name)
}

impl Extensions {
    /// Names of the registered extensions contained in this set, in table order.
    pub fn enabled_names(&self) -> Vec<&'static str> {
        REGISTRY
            .iter()
            .filter(|(_, bits)| self.contains(*bits))
            .map(|(name, _)| *name)
            .collect()
    }
}

impl Default for Extensions {
    fn default() -> Self {
        Extensions::all()
    }
}

impl From<&str> for Extensions {
    fn from(name: &str) -> Self {
        lookup(name)
    }
}
