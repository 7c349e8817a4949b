//! JSON file implementation of [`ConfigStore`].
//!
//! Each scope maps to one JSON object on disk. The override lives under
//! [`CONTENT_PATH_KEY`]; every other key in the file is preserved.
//!
//! Writes go to a sibling temp file that is synced and then renamed over
//! the target, so a crash mid-write leaves either the old or the new file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::domain::ConfigScope;
use crate::error::ContentPathError;
use crate::paths::{PathError, user_config_dir};
use crate::ports::ConfigStore;

/// File name of the per-scope configuration file.
pub const CONFIG_FILE_NAME: &str = "contentpath.config.json";

/// Key holding the content path override.
pub const CONTENT_PATH_KEY: &str = "UserContentPath";

/// Configuration store backed by a JSON file per scope.
#[derive(Debug, Clone)]
pub struct JsonConfigStore {
    user_dir: PathBuf,
}

impl JsonConfigStore {
    /// Create a store whose current-user file lives in `user_config_dir`.
    ///
    /// Nothing is read or created until the first access.
    pub fn new(user_config_dir: impl Into<PathBuf>) -> Self {
        Self {
            user_dir: user_config_dir.into(),
        }
    }

    /// Create a store at the default location, honouring
    /// `CONTENTPATH_CONFIG_DIR`.
    pub fn from_env() -> Result<Self, PathError> {
        Ok(Self::new(user_config_dir()?))
    }

    fn file_for(&self, scope: ConfigScope) -> PathBuf {
        match scope {
            ConfigScope::CurrentUser => self.user_dir.join(CONFIG_FILE_NAME),
        }
    }
}

impl ConfigStore for JsonConfigStore {
    fn get_override(&self, scope: ConfigScope) -> Result<Option<String>, ContentPathError> {
        let path = self.file_for(scope);
        let document = read_document(&path)?;

        let value = match document.get(CONTENT_PATH_KEY) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.trim().is_empty() => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                return Err(ContentPathError::read_failed(
                    &path,
                    format!("{CONTENT_PATH_KEY} must be a string, found {other}"),
                ));
            }
        };

        tracing::debug!(file = %path.display(), ?value, "read content path override");
        Ok(value)
    }

    fn set_override(
        &self,
        scope: ConfigScope,
        path: Option<&str>,
    ) -> Result<(), ContentPathError> {
        let file = self.file_for(scope);
        let mut document = read_document(&file).map_err(|e| {
            ContentPathError::write_failed(&file, format!("existing file is unusable: {e}"))
        })?;

        let value = path.filter(|p| !p.trim().is_empty());
        match value {
            Some(value) => {
                document.insert(CONTENT_PATH_KEY.to_string(), Value::String(value.to_string()));
            }
            None => {
                if document.remove(CONTENT_PATH_KEY).is_none() {
                    tracing::debug!(file = %file.display(), "no override stored, nothing to remove");
                    return Ok(());
                }
            }
        }

        let mut content = serde_json::to_string_pretty(&Value::Object(document))
            .map_err(|e| ContentPathError::write_failed(&file, e))?;
        content.push('\n');

        atomic_write(&file, &content).map_err(|e| ContentPathError::write_failed(&file, e))?;

        tracing::info!(file = %file.display(), override_path = ?value, "persisted content path");
        Ok(())
    }

    fn backing_file_path(&self, scope: ConfigScope) -> PathBuf {
        self.file_for(scope)
    }
}

fn read_document(path: &Path) -> Result<Map<String, Value>, ContentPathError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
        Err(e) => return Err(ContentPathError::read_failed(path, e)),
    };

    if content.trim().is_empty() {
        return Ok(Map::new());
    }

    match serde_json::from_str(&content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ContentPathError::read_failed(path, "expected a JSON object")),
        Err(e) => Err(ContentPathError::read_failed(path, e)),
    }
}

/// Write `content` to `path` via a synced temp file and a rename.
fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    let written = (|| {
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, path)
    })();

    if written.is_err() {
        if let Err(e) = fs::remove_file(&temp_path) {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!(file = %temp_path.display(), "failed to remove temp file: {e}");
            }
        }
    }
    written
}
