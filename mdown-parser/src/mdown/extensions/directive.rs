//! Extension directives
//!
//!     A directive is a signed extension name: `+E<name>` enables it, `-E<name>` disables it.
//!     Markers are recognized purely by prefix, with no separator before the name. A marker with
//!     nothing after it is still a directive, its empty name simply resolves to no bits.
//!
//!     The same token syntax is used on the command line and in configuration files.

use super::{lookup, Extensions};
use std::fmt;
use std::str::FromStr;

/// Prefix of an enabling directive.
pub const ENABLE_MARKER: &str = "+E";
/// Prefix of a disabling directive.
pub const DISABLE_MARKER: &str = "-E";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Enable,
    Disable,
}

impl Sign {
    pub fn marker(&self) -> &'static str {
        match self {
            Sign::Enable => ENABLE_MARKER,
            Sign::Disable => DISABLE_MARKER,
        }
    }
}

/// A single `(sign, name)` instruction applied to a mask.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Directive {
    pub sign: Sign,
    pub name: String,
}

impl Directive {
    pub fn enable(name: impl Into<String>) -> Self {
        Self {
            sign: Sign::Enable,
            name: name.into(),
        }
    }

    pub fn disable(name: impl Into<String>) -> Self {
        Self {
            sign: Sign::Disable,
            name: name.into(),
        }
    }

    /// Parse a raw token. Returns `None` when the token carries neither marker, which makes it a
    /// positional argument rather than a directive.
    pub fn parse(token: &str) -> Option<Self> {
        if let Some(name) = token.strip_prefix(ENABLE_MARKER) {
            Some(Self::enable(name))
        } else {
            token.strip_prefix(DISABLE_MARKER).map(Self::disable)
        }
    }

    /// The bits this directive touches. Zero for unknown names.
    pub fn bits(&self) -> Extensions {
        lookup(&self.name)
    }

    /// Apply this directive to a mask.
    pub fn apply(&self, mask: Extensions) -> Extensions {
        match self.sign {
            Sign::Enable => mask.union(self.bits()),
            // bits outside the registry survive a disable
            Sign::Disable => mask.difference(self.bits()),
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign.marker(), self.name)
    }
}

/// Error returned when a string has no directive marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotADirective(pub String);

impl fmt::Display for NotADirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a directive (expected {}<name> or {}<name>)",
            self.0, ENABLE_MARKER, DISABLE_MARKER
        )
    }
}

impl std::error::Error for NotADirective {}

impl FromStr for Directive {
    type Err = NotADirective;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Directive::parse(s).ok_or_else(|| NotADirective(s.to_string()))
    }
}

/// Resolve a feature selection.
///
/// Starts from `default` and applies `directives` strictly left to right. Later directives win
/// over earlier ones touching the same bits, and unknown names leave the mask unchanged.
pub fn resolve(default: Extensions, directives: &[Directive]) -> Extensions {
    directives
        .iter()
        .fold(default, |mask, directive| directive.apply(mask))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_enable() {
        let directive = Directive::parse("+Etables").unwrap();
        assert_eq!(directive.sign, Sign::Enable);
        assert_eq!(directive.name, "tables");
    }

    #[test]
    fn test_parse_disable() {
        let directive = Directive::parse("-Eall").unwrap();
        assert_eq!(directive, Directive::disable("all"));
    }

    #[test]
    fn test_parse_empty_name() {
        let directive = Directive::parse("+E").unwrap();
        assert_eq!(directive.name, "");
        assert_eq!(directive.bits(), Extensions::empty());
    }

    #[test]
    fn test_parse_rejects_positionals() {
        assert!(Directive::parse("doc.md").is_none());
        assert!(Directive::parse("-e").is_none());
        assert!(Directive::parse("+").is_none());
        assert!(Directive::parse("E+tables").is_none());
        assert!(Directive::parse("").is_none());
    }

    #[test]
    fn test_display_round_trips_token() {
        assert_eq!(Directive::enable("tables").to_string(), "+Etables");
        assert_eq!(Directive::disable("all").to_string(), "-Eall");
    }

    #[test]
    fn test_from_str() {
        let directive: Directive = "-Ehardwraps".parse().unwrap();
        assert_eq!(directive, Directive::disable("hardwraps"));

        let err = "hardwraps".parse::<Directive>().unwrap_err();
        assert_eq!(err, NotADirective("hardwraps".to_string()));
    }

    #[test]
    fn test_resolve_empty_is_identity() {
        let default = Extensions::TABLES | Extensions::SMARTS;
        assert_eq!(resolve(default, &[]), default);
    }

    #[test]
    fn test_resolve_applies_in_order() {
        let enable_last = [Directive::disable("tables"), Directive::enable("tables")];
        let disable_last = [Directive::enable("tables"), Directive::disable("tables")];

        assert!(resolve(Extensions::empty(), &enable_last).contains(Extensions::TABLES));
        assert!(!resolve(Extensions::all(), &disable_last).contains(Extensions::TABLES));
    }

    #[test]
    fn test_resolve_ignores_unknown_names() {
        let default = Extensions::from_bits_retain(0x1);
        assert_eq!(resolve(default, &[Directive::enable("bogus")]), default);
        assert_eq!(resolve(default, &[Directive::disable("bogus")]), default);
    }
}
