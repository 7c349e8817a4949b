//! Content path service - orchestrates get, set and reset.
//!
//! Ordering guarantees for mutations:
//! 1. Validation runs before the host is asked to confirm
//! 2. Confirmation runs before anything is persisted
//! 3. The session mirror changes only after the store accepted the write

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::{ConfigScope, ContentPathInfo, EffectivePath, Outcome};
use crate::error::ContentPathError;
use crate::paths::validate_path;
use crate::ports::{CommandHost, ConfigStore};

use super::resolver::ContentPathResolver;
use super::session_mirror::SessionMirror;

/// Service for content path operations on a single scope.
pub struct ContentPathService {
    store: Arc<dyn ConfigStore>,
    resolver: ContentPathResolver,
    scope: ConfigScope,
    mirror: SessionMirror,
}

impl ContentPathService {
    /// Create a service for the current-user scope.
    ///
    /// Reads the store once to seed the session mirror.
    pub fn new(
        store: Arc<dyn ConfigStore>,
        platform_default: impl Into<PathBuf>,
    ) -> Result<Self, ContentPathError> {
        Self::with_scope(store, platform_default, ConfigScope::CurrentUser)
    }

    /// Create a service for an explicit scope.
    pub fn with_scope(
        store: Arc<dyn ConfigStore>,
        platform_default: impl Into<PathBuf>,
        scope: ConfigScope,
    ) -> Result<Self, ContentPathError> {
        let resolver = ContentPathResolver::new(Arc::clone(&store), platform_default);
        let initial = resolver.resolve(scope)?;
        Ok(Self {
            store,
            resolver,
            scope,
            mirror: SessionMirror::new(initial.path),
        })
    }

    /// Handle to the session mirror for consumers of the effective path.
    pub fn mirror(&self) -> SessionMirror {
        self.mirror.clone()
    }

    pub const fn scope(&self) -> ConfigScope {
        self.scope
    }

    pub fn platform_default(&self) -> &Path {
        self.resolver.platform_default()
    }

    /// Resolve the effective path and report it with its backing file.
    pub fn get(&self, host: &dyn CommandHost) -> Result<ContentPathInfo, ContentPathError> {
        let effective = self
            .resolver
            .resolve(self.scope)
            .inspect_err(|e| host.emit_error(e, None))?;

        let info = ContentPathInfo {
            exists: effective.path.is_dir(),
            effective,
            config_file: self.store.backing_file_path(self.scope),
        };
        host.emit_result(&info);
        Ok(info)
    }

    /// Validate `raw`, confirm, persist it as the override and update the mirror.
    pub fn set(&self, host: &dyn CommandHost, raw: &str) -> Result<Outcome, ContentPathError> {
        let validated = validate_path(raw).inspect_err(|e| host.emit_error(e, Some(raw)))?;
        if let Some(warning) = &validated.warning {
            host.emit_warning(warning);
        }

        let current = self
            .resolver
            .resolve(self.scope)
            .inspect_err(|e| host.emit_error(e, Some(raw)))?;
        let new_path = validated.path;

        let target = self.confirm_target();
        let action = format!(
            "Set UserContentPath from '{}' to '{}'",
            current.path.display(),
            new_path.display()
        );
        if !host.confirm(&target, &action) {
            tracing::debug!(%action, "content path change declined");
            return Ok(Outcome::Declined);
        }

        let serialized = new_path.to_string_lossy();
        self.store
            .set_override(self.scope, Some(&serialized))
            .inspect_err(|e| host.emit_error(e, Some(raw)))?;

        self.mirror.write(new_path.clone());
        tracing::info!(path = %new_path.display(), "content path set");
        host.emit_verbose(&format!(
            "Successfully set content path to '{}'",
            new_path.display()
        ));
        Ok(Outcome::Applied(EffectivePath::overridden(new_path)))
    }

    /// Confirm, remove the override and point the mirror at the platform default.
    pub fn reset(&self, host: &dyn CommandHost) -> Result<Outcome, ContentPathError> {
        let current = self
            .resolver
            .resolve(self.scope)
            .inspect_err(|e| host.emit_error(e, None))?;
        let default_path = self.resolver.platform_default().to_path_buf();

        let target = self.confirm_target();
        let action = format!(
            "Reset UserContentPath from '{}' to platform default '{}'",
            current.path.display(),
            default_path.display()
        );
        if !host.confirm(&target, &action) {
            tracing::debug!(%action, "content path reset declined");
            return Ok(Outcome::Declined);
        }

        self.store
            .set_override(self.scope, None)
            .map_err(ContentPathError::into_reset_failure)
            .inspect_err(|e| host.emit_error(e, None))?;

        self.mirror.write(default_path.clone());
        tracing::info!(path = %default_path.display(), "content path reset to default");
        host.emit_verbose(&format!(
            "Successfully reset content path to default: '{}'",
            default_path.display()
        ));
        Ok(Outcome::Applied(EffectivePath::platform_default(
            default_path,
        )))
    }

    fn confirm_target(&self) -> String {
        format!(
            "Config file: '{}'",
            self.store.backing_file_path(self.scope).display()
        )
    }
}
