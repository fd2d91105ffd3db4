//! Conversion driver
//!
//!     One run converts one file:
//!
//!         resolve mask → check input → derive output → read → convert → write
//!
//!     The mask starts from every extension enabled. Directives from the configuration file are
//!     applied first, then the ones from the command line, so the command line always has the
//!     last word.
//!
//!     When no output path is given it is the input path with its extension replaced by the
//!     format's extension, in the same directory (`doc.md` → `doc.html`). Parent directories of
//!     the output are created as needed and an existing file is overwritten.

use crate::args::Invocation;
use crate::error::DriverError;
use mdown_babel::FormatRegistry;
use mdown_config::MdownConfig;
use mdown_parser::mdown::extensions::{resolve, Directive, Extensions};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct ConversionDriver {
    registry: FormatRegistry,
    config: MdownConfig,
}

impl ConversionDriver {
    pub fn new(registry: FormatRegistry, config: MdownConfig) -> Self {
        Self { registry, config }
    }

    /// Final mask for a set of command line directives
    pub fn resolve_mask(&self, directives: &[Directive]) -> Extensions {
        let mut all = self.config.extensions.directives();
        all.extend_from_slice(directives);
        resolve(Extensions::all(), &all)
    }

    /// Convert the invocation's input, returning the path written
    pub fn run(&self, invocation: &Invocation, format: &str) -> Result<PathBuf, DriverError> {
        let mask = self.resolve_mask(&invocation.directives);

        let input = invocation.input.as_deref().ok_or(DriverError::MissingInput)?;
        if !input.exists() {
            return Err(DriverError::InputNotFound(input.to_path_buf()));
        }

        let target = self.registry.get(format)?;
        let output = match &invocation.output {
            Some(output) => output.clone(),
            None => output_path(input, target.file_extension()),
        };

        info!(input = %input.display(), output = %output.display(), format, "converting");
        info!("extensions: {:b}", mask);
        debug!(enabled = ?mask.enabled_names(), "extensions enabled");

        let source = read_source(input)?;
        let rendered = target.convert(&source, mask)?;
        write_output(&output, &rendered)?;

        Ok(output)
    }
}

/// Input path with its extension replaced
pub fn output_path(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

/// Read a whole file as lines, each terminated by `\n`
pub fn read_source(path: &Path) -> Result<String, DriverError> {
    let raw = fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalize_lines(&raw))
}

/// Lines end at `\r\n`, a lone `\r` or `\n`
fn normalize_lines(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len() + 1);
    let mut rest = raw;
    while !rest.is_empty() {
        let end = rest.find(|c: char| c == '\r' || c == '\n').unwrap_or(rest.len());
        normalized.push_str(&rest[..end]);
        normalized.push('\n');
        rest = &rest[end..];
        rest = rest
            .strip_prefix("\r\n")
            .or_else(|| rest.strip_prefix('\r'))
            .or_else(|| rest.strip_prefix('\n'))
            .unwrap_or(rest);
    }
    normalized
}

/// Write `contents`, creating parent directories and replacing any existing file
pub fn write_output(path: &Path, contents: &str) -> Result<(), DriverError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| DriverError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| DriverError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(bytes = contents.len(), path = %path.display(), "wrote output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(config_directives: &[&str]) -> ConversionDriver {
        let mut config = mdown_config::load_defaults().unwrap();
        config.extensions.directives = config_directives.iter().map(|d| d.to_string()).collect();
        ConversionDriver::new(FormatRegistry::default(), config)
    }

    #[test]
    fn test_output_path() {
        assert_eq!(output_path(Path::new("doc.md"), "html"), PathBuf::from("doc.html"));
        assert_eq!(
            output_path(Path::new("notes/a.b.md"), "html"),
            PathBuf::from("notes/a.b.html")
        );
        assert_eq!(output_path(Path::new("README"), "json"), PathBuf::from("README.json"));
    }

    #[test]
    fn test_normalize_lines() {
        assert_eq!(normalize_lines("a\r\nb"), "a\nb\n");
        assert_eq!(normalize_lines("a\n\nb\n"), "a\n\nb\n");
        assert_eq!(normalize_lines(""), "");
    }

    #[test]
    fn test_normalize_lone_carriage_returns() {
        assert_eq!(normalize_lines("a\rb\r"), "a\nb\n");
        assert_eq!(normalize_lines("a\r\r\nb"), "a\n\nb\n");
        assert_eq!(normalize_lines("a\n\rb"), "a\n\nb\n");
    }

    #[test]
    fn test_resolve_mask_defaults_to_all() {
        assert_eq!(driver(&[]).resolve_mask(&[]), Extensions::all());
    }

    #[test]
    fn test_command_line_applies_after_config() {
        let driver = driver(&["-Eall", "+Etables"]);
        assert_eq!(driver.resolve_mask(&[]), Extensions::TABLES);
        assert_eq!(
            driver.resolve_mask(&[Directive::disable("tables")]),
            Extensions::empty()
        );
    }

    #[test]
    fn test_missing_input() {
        let err = driver(&[]).run(&Invocation::default(), "html").unwrap_err();
        assert!(matches!(err, DriverError::MissingInput));
    }

    #[test]
    fn test_input_not_found() {
        let invocation = Invocation::from_tokens(["definitely/not/here.md"]).unwrap();
        let err = driver(&[]).run(&invocation, "html").unwrap_err();
        assert!(err.is_usage());
    }
}
