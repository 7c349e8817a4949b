//! CLI-specific error types and mappings.
//!
//! This module provides the error type for the CLI adapter and the mapping
//! from core errors to exit codes.

use contentpath_core::{ContentPathError, ErrorKind, PathError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// An operation failed and the host already printed the details.
    #[error("{kind}")]
    Reported { kind: ErrorKind },

    /// Invalid path supplied by the user.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error reading or writing the config file.
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error (locations could not be resolved).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Anything else, e.g. failing to print help.
    #[error("{0}")]
    Internal(String),
}

impl CliError {
    /// Wrap an error the host has already shown to the user.
    pub const fn reported(error: &ContentPathError) -> Self {
        Self::Reported { kind: error.kind() }
    }

    pub const fn is_reported(&self) -> bool {
        matches!(self, Self::Reported { .. })
    }

    /// Map error to an exit code.
    ///
    /// Exit codes follow sysexits.h where one fits:
    /// - 1: General error
    /// - 2: Invalid arguments
    /// - 74: I/O error (`EX_IOERR`)
    /// - 78: Configuration error (`EX_CONFIG`)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Reported { kind } => {
                if kind.is_validation() {
                    2
                } else {
                    74
                }
            }
            Self::Arguments(_) => 2,
            Self::Io(_) => 74,
            Self::Config(_) => 78,
            Self::Internal(_) => 1,
        }
    }
}

impl From<ContentPathError> for CliError {
    fn from(err: ContentPathError) -> Self {
        if err.kind().is_validation() {
            Self::Arguments(err.to_string())
        } else {
            Self::Io(err.to_string())
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reported_validation_error_is_usage() {
        let err = ContentPathError::RelativePathNotAllowed {
            path: "rel".to_string(),
        };
        let cli = CliError::reported(&err);
        assert!(cli.is_reported());
        assert_eq!(cli.exit_code(), 2);
    }

    #[test]
    fn store_errors_are_io() {
        let err = ContentPathError::StoreReadFailed {
            path: "/cfg/contentpath.config.json".into(),
            reason: "corrupt".to_string(),
        };
        assert_eq!(CliError::reported(&err).exit_code(), 74);
        let cli: CliError = err.into();
        assert!(!cli.is_reported());
        assert_eq!(cli.exit_code(), 74);
    }

    #[test]
    fn location_errors_are_config() {
        let cli: CliError = PathError::NoConfigDir.into();
        assert_eq!(cli.exit_code(), 78);
    }
}
