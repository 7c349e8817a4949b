//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where the JSON store, the platform
//! default and the service are wired together for the CLI adapter.

use std::path::PathBuf;
use std::sync::Arc;

use contentpath_core::{
    ContentPathService, JsonConfigStore, PathError, default_content_dir, user_config_dir,
};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory holding the per-user config file.
    pub config_dir: PathBuf,
    /// Content directory used when no override is stored.
    pub platform_default: PathBuf,
}

impl CliConfig {
    /// Create config from the environment and platform locations.
    pub fn with_defaults() -> Result<Self, PathError> {
        Ok(Self {
            config_dir: user_config_dir()?,
            platform_default: default_content_dir()?,
        })
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    pub service: ContentPathService,
}

/// Build the CLI context.
///
/// Fails if the existing config file cannot be read.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    tracing::debug!(
        config_dir = %config.config_dir.display(),
        platform_default = %config.platform_default.display(),
        "bootstrapping content path service"
    );
    let store = Arc::new(JsonConfigStore::new(config.config_dir));
    let service = ContentPathService::new(store, config.platform_default)?;
    Ok(CliContext { service })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contentpath_core::store::CONFIG_FILE_NAME;
    use tempfile::tempdir;

    #[test]
    fn bootstrap_seeds_default() {
        let temp = tempdir().unwrap();
        let config = CliConfig {
            config_dir: temp.path().join("cfg"),
            platform_default: temp.path().join("content"),
        };
        let ctx = bootstrap(config).unwrap();
        assert_eq!(*ctx.service.mirror().read(), temp.path().join("content"));
    }

    #[test]
    fn bootstrap_fails_on_corrupt_file() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE_NAME), "{ not json").unwrap();
        let config = CliConfig {
            config_dir: temp.path().to_path_buf(),
            platform_default: temp.path().join("content"),
        };
        let err = bootstrap(config).err().unwrap();
        assert_eq!(err.exit_code(), 74);
    }
}
