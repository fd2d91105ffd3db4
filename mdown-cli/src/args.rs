//! Positional token classification
//!
//! Everything after the options is a flat list of tokens. Directive tokens (`+E<name>`,
//! `-E<name>`) are collected in order, anywhere in the list. The first other token is the input
//! path, the second the output path, anything after that is ignored. Options are parsed before
//! this list, so any other token starting with `-` is a misplaced option and rejected.

use crate::error::DriverError;
use mdown_parser::mdown::extensions::{names, Directive, ALL_NAME, DISABLE_MARKER, ENABLE_MARKER};
use std::path::PathBuf;
use tracing::{debug, warn};

/// What the positional tokens asked for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub directives: Vec<Directive>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub ignored: Vec<String>,
}

impl Invocation {
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, DriverError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut invocation = Self::default();

        for token in tokens {
            let token = token.as_ref();
            debug!(arg = token, "argument");

            if let Some(directive) = Directive::parse(token) {
                invocation.directives.push(directive);
            } else if token.len() > 1 && token.starts_with('-') {
                return Err(DriverError::MisplacedOption(token.to_string()));
            } else if invocation.input.is_none() {
                invocation.input = Some(PathBuf::from(token));
            } else if invocation.output.is_none() {
                invocation.output = Some(PathBuf::from(token));
            } else {
                warn!(arg = token, "ignoring extra argument");
                invocation.ignored.push(token.to_string());
            }
        }

        Ok(invocation)
    }
}

/// Extension section of the help and usage text
pub fn extensions_help() -> String {
    let mut help = format!(
        "Extensions:\n  {}<name> enables an extension, {}<name> disables it. Directives apply left\n  to right, starting from every extension enabled.\n\n",
        ENABLE_MARKER, DISABLE_MARKER
    );
    for name in std::iter::once(ALL_NAME).chain(names()) {
        help.push_str("    ");
        help.push_str(name);
        help.push('\n');
    }
    help
}
