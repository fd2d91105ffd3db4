//! Shared configuration loader for mdown.
//!
//! `defaults/mdown.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MdownConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdown_parser::mdown::extensions::Directive;
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

const DEFAULT_TOML: &str = include_str!("../defaults/mdown.default.toml");

/// Top-level configuration consumed by mdown.
#[derive(Debug, Clone, Deserialize)]
pub struct MdownConfig {
    pub extensions: ExtensionsConfig,
    pub convert: ConvertConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtensionsConfig {
    pub directives: Vec<String>,
}

impl ExtensionsConfig {
    /// Configured directives in order. Entries without a marker are skipped.
    pub fn directives(&self) -> Vec<Directive> {
        self.directives
            .iter()
            .filter_map(|token| match token.parse::<Directive>() {
                Ok(directive) => Some(directive),
                Err(err) => {
                    warn!("ignoring extensions.directives entry: {}", err);
                    None
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, as the command line does for `--format` and `--verbose`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MdownConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdownConfig, ConfigError> {
    Loader::new().build()
}
