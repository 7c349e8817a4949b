//! In-process mirror of the effective content path.
//!
//! Consumers that were handed a [`SessionMirror`] always see the last
//! committed path without re-reading the store. Only
//! [`ContentPathService`](super::ContentPathService) writes to it, and only
//! after the store accepted the change.

use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

/// Shared, read-mostly cell holding the effective content path.
///
/// Cloning yields another handle to the same cell. A write swaps the inner
/// `Arc`, so a reader sees either the old or the new path in full.
#[derive(Debug, Clone)]
pub struct SessionMirror {
    cell: Arc<RwLock<Arc<PathBuf>>>,
}

impl SessionMirror {
    pub(crate) fn new(initial: PathBuf) -> Self {
        Self {
            cell: Arc::new(RwLock::new(Arc::new(initial))),
        }
    }

    /// The last committed effective path.
    pub fn read(&self) -> Arc<PathBuf> {
        let guard = self.cell.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    pub(crate) fn write(&self, path: PathBuf) {
        let next = Arc::new(path);
        let mut guard = self.cell.write().unwrap_or_else(PoisonError::into_inner);
        *guard = next;
    }
}
