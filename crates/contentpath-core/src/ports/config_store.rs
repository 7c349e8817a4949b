//! Configuration store trait definition.
//!
//! This port defines the interface for the durable store holding the
//! content path override. Implementations handle file format and location.

use std::path::PathBuf;

use crate::domain::ConfigScope;
use crate::error::ContentPathError;

/// Durable key/value store for the content path override.
///
/// # Design Rules
///
/// - Read failures are `StoreReadFailed`, write failures `StoreWriteFailed`
/// - `set_override` is atomic: readers observe the old or the new value
/// - Values are stored verbatim; a blank value is reported as `None`
pub trait ConfigStore: Send + Sync {
    /// Read the override for `scope`, if one is stored.
    fn get_override(&self, scope: ConfigScope) -> Result<Option<String>, ContentPathError>;

    /// Upsert the override, or remove it entirely when `path` is `None`.
    fn set_override(&self, scope: ConfigScope, path: Option<&str>)
    -> Result<(), ContentPathError>;

    /// File backing `scope`, for display to the user.
    fn backing_file_path(&self, scope: ConfigScope) -> PathBuf;
}
