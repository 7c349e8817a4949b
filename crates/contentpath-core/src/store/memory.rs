//! In-process implementation of [`ConfigStore`].
//!
//! Useful for hosts that keep configuration for a single session only and
//! for tests. Nothing touches the filesystem.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use crate::domain::ConfigScope;
use crate::error::ContentPathError;
use crate::ports::ConfigStore;

/// Configuration store held entirely in memory.
#[derive(Debug)]
pub struct MemoryConfigStore {
    values: Mutex<HashMap<ConfigScope, String>>,
    backing_file: PathBuf,
}

impl MemoryConfigStore {
    /// Create an empty store reporting `backing_file` as its location.
    pub fn new(backing_file: impl Into<PathBuf>) -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            backing_file: backing_file.into(),
        }
    }

    /// Create a store with an override already present for `scope`.
    pub fn with_override(
        backing_file: impl Into<PathBuf>,
        scope: ConfigScope,
        path: impl Into<String>,
    ) -> Self {
        let store = Self::new(backing_file);
        store
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(scope, path.into());
        store
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get_override(&self, scope: ConfigScope) -> Result<Option<String>, ContentPathError> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(&scope).cloned())
    }

    fn set_override(
        &self,
        scope: ConfigScope,
        path: Option<&str>,
    ) -> Result<(), ContentPathError> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        match path.filter(|p| !p.trim().is_empty()) {
            Some(path) => {
                values.insert(scope, path.to_string());
            }
            None => {
                values.remove(&scope);
            }
        }
        Ok(())
    }

    fn backing_file_path(&self, _scope: ConfigScope) -> PathBuf {
        self.backing_file.clone()
    }
}
