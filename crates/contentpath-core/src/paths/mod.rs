//! Path utilities: validation of user input and well-known locations.
//!
//! - Validation and normalization of user-supplied content paths
//! - Environment variable expansion
//! - Platform default content directory and config directory
//!
//! # Design
//!
//! - Pure functions apart from filesystem metadata and environment reads
//! - No interactive/terminal I/O; hosts handle prompts separately
//! - OS-specific logic is kept in `platform`

mod error;
mod expand;
mod platform;
mod validate;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::PathError;

pub use platform::{
    APP_DIR_NAME, CONFIG_DIR_ENV, DATA_DIR_ENV, default_content_dir, user_config_dir,
};

pub use validate::{MAX_COMPONENT_LEN, MAX_PATH_LEN, ValidatedPath, normalize, validate_path};
