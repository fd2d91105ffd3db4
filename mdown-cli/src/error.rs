//! Errors surfaced by the binary

use mdown_babel::FormatError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("no input file given")]
    MissingInput,

    #[error("input file {} does not exist", .0.display())]
    InputNotFound(PathBuf),

    #[error("unexpected option '{0}': options must come before the input path")]
    MisplacedOption(String),

    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl DriverError {
    /// Whether the invocation itself was wrong, in which case usage is shown
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            DriverError::MissingInput
                | DriverError::InputNotFound(_)
                | DriverError::MisplacedOption(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors() {
        assert!(DriverError::MissingInput.is_usage());
        assert!(DriverError::InputNotFound("x.md".into()).is_usage());
        assert!(DriverError::MisplacedOption("-f".into()).is_usage());

        let io = DriverError::Read {
            path: "x.md".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(!io.is_usage());
        assert!(io.to_string().starts_with("could not read x.md"));
    }
}
