//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the core expects from its collaborators:
//! the durable configuration store and the hosting command layer.
//!
//! # Design Rules
//!
//! - No file format details in any signature
//! - No terminal I/O; hosts own prompting and rendering

pub mod command_host;
pub mod config_store;

pub use command_host::CommandHost;
pub use config_store::ConfigStore;
