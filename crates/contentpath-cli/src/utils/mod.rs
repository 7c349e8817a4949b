//! Utility modules for the CLI.

pub mod input;

pub use input::{confirm_from, prompt_confirmation};
