//! Command-line adapter for the content path subsystem.
//!
//! The binary is a thin shell over [`contentpath_core::ContentPathService`]:
//! it parses arguments, wires the JSON store in [`bootstrap`] and prints
//! through [`host::ConsoleHost`].
#![deny(unused_crate_dependencies)]

// Used by main.rs only
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod host;
pub mod parser;
pub mod utils;

pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use host::{ConfirmMode, ConsoleHost};
pub use parser::Cli;
