//! Location-related error types.
//!
//! These cover failures to locate the platform directories the subsystem is
//! anchored to. They are distinct from [`crate::ContentPathError`], which
//! describes failures of user-facing operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving well-known locations.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the user's home directory.
    #[error("Cannot determine home directory")]
    NoHomeDir,

    /// Could not determine the user configuration directory.
    #[error("Cannot determine user configuration directory")]
    NoConfigDir,

    /// Could not determine the platform data directory.
    #[error("Cannot determine system data directory")]
    NoDataDir,

    /// An override variable pointed at a relative path.
    #[error("{var} must be an absolute path, got {path}")]
    NotAbsolute { var: &'static str, path: PathBuf },
}
