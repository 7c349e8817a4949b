//! Platform-specific location resolution.
//!
//! Each location honours an environment override first and falls back to
//! the platform directory reported by `dirs`.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Overrides the directory holding the current-user config file.
pub const CONFIG_DIR_ENV: &str = "CONTENTPATH_CONFIG_DIR";

/// Overrides the platform default content directory.
pub const DATA_DIR_ENV: &str = "CONTENTPATH_DATA_DIR";

/// Directory name used under the platform config/data roots.
pub const APP_DIR_NAME: &str = "contentpath";

/// Get the directory holding the current-user configuration file.
///
/// Resolution order:
/// 1. `CONTENTPATH_CONFIG_DIR` environment variable
/// 2. System config directory (e.g., `~/.config/contentpath`)
pub fn user_config_dir() -> Result<PathBuf, PathError> {
    if let Some(path) = env_override(CONFIG_DIR_ENV)? {
        return Ok(path);
    }

    let config_dir = dirs::config_dir().ok_or(PathError::NoConfigDir)?;
    Ok(config_dir.join(APP_DIR_NAME))
}

/// Get the platform default content directory.
///
/// Resolution order:
/// 1. `CONTENTPATH_DATA_DIR` environment variable
/// 2. `Documents/ContentPath` on Windows, the local data directory
///    (e.g., `~/.local/share/contentpath`) elsewhere
///
/// The directory is not created.
pub fn default_content_dir() -> Result<PathBuf, PathError> {
    if let Some(path) = env_override(DATA_DIR_ENV)? {
        return Ok(path);
    }

    #[cfg(windows)]
    {
        let documents = dirs::document_dir().ok_or(PathError::NoDataDir)?;
        Ok(documents.join("ContentPath"))
    }

    #[cfg(not(windows))]
    {
        let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
        Ok(data_dir.join(APP_DIR_NAME))
    }
}

/// The user's home directory, used for `~` expansion.
pub(crate) fn home_dir() -> Result<PathBuf, PathError> {
    dirs::home_dir().ok_or(PathError::NoHomeDir)
}

fn env_override(var: &'static str) -> Result<Option<PathBuf>, PathError> {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => {
            let path = PathBuf::from(value.trim());
            if path.is_absolute() {
                Ok(Some(path))
            } else {
                Err(PathError::NotAbsolute { var, path })
            }
        }
        _ => Ok(None),
    }
}
