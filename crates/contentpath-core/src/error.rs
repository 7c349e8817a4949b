//! Error types for content path operations.
//!
//! Every failure the subsystem can report is a [`ContentPathError`]. Each
//! variant carries the offending path (or backing file) so a caller can act
//! on it, and maps to a coarse [`ErrorKind`] for programmatic matching.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of a [`ContentPathError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The expanded path contains characters the filesystem rejects.
    InvalidCharacters,
    /// The expanded path is not absolute.
    RelativePathNotAllowed,
    /// The path is syntactically malformed.
    InvalidFormat,
    /// Permission to inspect the path was denied.
    AccessDenied,
    /// The path has a shape this platform does not support.
    NotSupported,
    /// The path or one of its components is too long.
    TooLong,
    /// Reading the configuration store failed.
    StoreReadFailed,
    /// Writing the configuration store failed.
    StoreWriteFailed,
    /// Removing the override from the configuration store failed.
    StoreResetFailed,
}

/// Broad category a host can use to pick presentation for an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidArgument,
    PermissionDenied,
    ReadError,
    WriteError,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidArgument => "InvalidArgument",
            Self::PermissionDenied => "PermissionDenied",
            Self::ReadError => "ReadError",
            Self::WriteError => "WriteError",
        };
        f.write_str(name)
    }
}

impl ErrorKind {
    /// Stable identifier reported alongside the error message.
    pub const fn error_id(self) -> &'static str {
        match self {
            Self::InvalidCharacters => "InvalidPathCharacters",
            Self::RelativePathNotAllowed => "RelativePathNotAllowed",
            Self::InvalidFormat => "InvalidPathFormat",
            Self::AccessDenied => "PathAccessDenied",
            Self::NotSupported => "PathNotSupported",
            Self::TooLong => "PathTooLong",
            Self::StoreReadFailed => "GetContentPathFailed",
            Self::StoreWriteFailed => "SetContentPathFailed",
            Self::StoreResetFailed => "ResetContentPathFailed",
        }
    }

    pub const fn category(self) -> ErrorCategory {
        match self {
            Self::AccessDenied => ErrorCategory::PermissionDenied,
            Self::StoreReadFailed => ErrorCategory::ReadError,
            Self::StoreWriteFailed | Self::StoreResetFailed => ErrorCategory::WriteError,
            Self::InvalidCharacters
            | Self::RelativePathNotAllowed
            | Self::InvalidFormat
            | Self::NotSupported
            | Self::TooLong => ErrorCategory::InvalidArgument,
        }
    }

    /// Whether this kind originates from input validation.
    pub const fn is_validation(self) -> bool {
        !matches!(
            self,
            Self::StoreReadFailed | Self::StoreWriteFailed | Self::StoreResetFailed
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.error_id())
    }
}

/// Errors reported by validation and by the configuration store.
#[derive(Debug, Error)]
pub enum ContentPathError {
    #[error("The path '{path}' contains invalid characters.")]
    InvalidCharacters { path: String },

    #[error("The path '{path}' must be an absolute path.")]
    RelativePathNotAllowed { path: String },

    #[error("The path '{path}' is not in a valid format: {reason}")]
    InvalidFormat { path: String, reason: String },

    #[error("Access to the path '{path}' is denied: {reason}")]
    AccessDenied { path: String, reason: String },

    #[error("The path '{path}' is not supported: {reason}")]
    NotSupported { path: String, reason: String },

    #[error("The path '{path}' is too long: {reason}")]
    TooLong { path: String, reason: String },

    #[error("Failed to read config file {path}: {reason}")]
    StoreReadFailed { path: PathBuf, reason: String },

    #[error("Failed to write config file {path}: {reason}")]
    StoreWriteFailed { path: PathBuf, reason: String },

    #[error("Failed to reset content path in config file {path}: {reason}")]
    StoreResetFailed { path: PathBuf, reason: String },
}

impl ContentPathError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCharacters { .. } => ErrorKind::InvalidCharacters,
            Self::RelativePathNotAllowed { .. } => ErrorKind::RelativePathNotAllowed,
            Self::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            Self::AccessDenied { .. } => ErrorKind::AccessDenied,
            Self::NotSupported { .. } => ErrorKind::NotSupported,
            Self::TooLong { .. } => ErrorKind::TooLong,
            Self::StoreReadFailed { .. } => ErrorKind::StoreReadFailed,
            Self::StoreWriteFailed { .. } => ErrorKind::StoreWriteFailed,
            Self::StoreResetFailed { .. } => ErrorKind::StoreResetFailed,
        }
    }

    /// Relabel a failed write as a failed reset. Other errors pass through.
    pub(crate) fn into_reset_failure(self) -> Self {
        match self {
            Self::StoreWriteFailed { path, reason } => Self::StoreResetFailed { path, reason },
            other => other,
        }
    }

    pub(crate) fn read_failed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::StoreReadFailed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn write_failed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::StoreWriteFailed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let err = ContentPathError::RelativePathNotAllowed {
            path: "rel/path".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::RelativePathNotAllowed);
        assert_eq!(err.to_string(), "The path 'rel/path' must be an absolute path.");
    }

    #[test]
    fn store_errors_are_not_validation() {
        let err = ContentPathError::write_failed("/cfg/file.json", "disk full");
        assert!(!err.kind().is_validation());
        assert_eq!(err.kind().category(), ErrorCategory::WriteError);
        assert_eq!(err.kind().error_id(), "SetContentPathFailed");
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn reset_failure_has_its_own_id() {
        let err = ContentPathError::write_failed("/cfg/file.json", "disk full").into_reset_failure();
        assert_eq!(err.kind(), ErrorKind::StoreResetFailed);
        assert_eq!(err.kind().error_id(), "ResetContentPathFailed");
        assert_eq!(err.kind().category(), ErrorCategory::WriteError);
        assert!(!err.kind().is_validation());

        let read = ContentPathError::read_failed("/cfg/file.json", "denied").into_reset_failure();
        assert_eq!(read.kind(), ErrorKind::StoreReadFailed);
    }

    #[test]
    fn category_display_names() {
        assert_eq!(ErrorCategory::InvalidArgument.to_string(), "InvalidArgument");
        assert_eq!(ErrorKind::StoreReadFailed.category().to_string(), "ReadError");
    }

    #[test]
    fn access_denied_is_permission_category() {
        assert_eq!(
            ErrorKind::AccessDenied.category(),
            ErrorCategory::PermissionDenied
        );
        assert!(ErrorKind::TooLong.is_validation());
    }
}
