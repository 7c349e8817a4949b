//! Effective content path resolution.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::{ConfigScope, EffectivePath};
use crate::error::ContentPathError;
use crate::ports::ConfigStore;

/// Computes the effective content path for a scope.
///
/// Resolution order:
/// 1. Override stored in the [`ConfigStore`]
/// 2. Platform default supplied at construction
///
/// Stored overrides were validated when written and are not re-validated.
#[derive(Clone)]
pub struct ContentPathResolver {
    store: Arc<dyn ConfigStore>,
    platform_default: PathBuf,
}

impl ContentPathResolver {
    pub fn new(store: Arc<dyn ConfigStore>, platform_default: impl Into<PathBuf>) -> Self {
        Self {
            store,
            platform_default: platform_default.into(),
        }
    }

    pub fn resolve(&self, scope: ConfigScope) -> Result<EffectivePath, ContentPathError> {
        let resolved = match self.store.get_override(scope)? {
            Some(path) => EffectivePath::overridden(path),
            None => EffectivePath::platform_default(&self.platform_default),
        };
        tracing::debug!(
            %scope,
            path = %resolved.path.display(),
            source = %resolved.source,
            "resolved content path"
        );
        Ok(resolved)
    }

    pub fn platform_default(&self) -> &Path {
        &self.platform_default
    }
}
