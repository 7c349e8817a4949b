//! Domain types for the content path.
//!
//! These are plain values with no infrastructure dependencies.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Configuration scope an override is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[non_exhaustive]
pub enum ConfigScope {
    /// Settings that apply to the current user only.
    #[default]
    CurrentUser,
}

impl fmt::Display for ConfigScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrentUser => f.write_str("CurrentUser"),
        }
    }
}

/// Where an effective path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentPathSource {
    /// An explicit override stored in the configuration.
    Override,
    /// The platform default, used when no override exists.
    Default,
}

impl fmt::Display for ContentPathSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Override => f.write_str("override"),
            Self::Default => f.write_str("default"),
        }
    }
}

/// The content path a consumer should use, with its origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectivePath {
    pub path: PathBuf,
    pub source: ContentPathSource,
}

impl EffectivePath {
    pub fn overridden(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            source: ContentPathSource::Override,
        }
    }

    pub fn platform_default(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            source: ContentPathSource::Default,
        }
    }
}

/// Result of a `get`: the effective path plus diagnostics for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentPathInfo {
    #[serde(flatten)]
    pub effective: EffectivePath,
    /// Config file backing the scope, shown for diagnostics only.
    pub config_file: PathBuf,
    /// Whether the effective path currently exists as a directory.
    pub exists: bool,
}

impl fmt::Display for ContentPathInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "path = {}", self.effective.path.display())?;
        writeln!(f, "source = {}", self.effective.source)?;
        writeln!(f, "config_file = {}", self.config_file.display())?;
        write!(f, "exists = {}", self.exists)
    }
}

/// How a mutating operation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The change was persisted; carries the new effective path.
    Applied(EffectivePath),
    /// The host declined the confirmation; nothing changed.
    Declined,
}

impl Outcome {
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}
