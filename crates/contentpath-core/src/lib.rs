//! Core of the content path subsystem.
//!
//! Manages one persisted, user-scoped setting: the directory a host uses as
//! its default content root. The crate keeps three things consistent:
//!
//! - the durable override in a [`ConfigStore`]
//! - the in-process [`SessionMirror`] handed to running consumers
//! - validation and confirmation gating around every change
//!
//! [`ContentPathService`] is the entry point; hosts supply a [`CommandHost`]
//! for prompts and reporting.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod paths;
pub mod ports;
pub mod services;
pub mod store;

pub use domain::{ConfigScope, ContentPathInfo, ContentPathSource, EffectivePath, Outcome};
pub use error::{ContentPathError, ErrorCategory, ErrorKind};
pub use paths::{PathError, ValidatedPath, default_content_dir, user_config_dir, validate_path};
pub use ports::{CommandHost, ConfigStore};
pub use services::{ContentPathResolver, ContentPathService, SessionMirror};
pub use store::{JsonConfigStore, MemoryConfigStore};
