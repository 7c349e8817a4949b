//! Command handlers.
//!
//! Each handler builds a [`ConsoleHost`](crate::host::ConsoleHost) for its
//! flags and delegates to the service in the [`CliContext`](crate::CliContext).

pub mod get;
pub mod set;
