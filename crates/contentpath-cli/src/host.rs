//! Console implementation of the service's host callbacks.

use contentpath_core::{CommandHost, ContentPathError, ContentPathInfo};

use crate::utils::prompt_confirmation;

/// How `confirm` answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmMode {
    /// Ask on stdin.
    #[default]
    Prompt,
    /// Answer yes without asking (`--force`).
    Force,
    /// Describe the change and answer no (`--dry-run`).
    WhatIf,
}

/// Host that talks to the terminal.
///
/// Results go to stdout; warnings, errors and verbose messages go to stderr.
#[derive(Debug, Clone, Default)]
pub struct ConsoleHost {
    pub mode: ConfirmMode,
    pub verbose: bool,
    pub json: bool,
}

impl ConsoleHost {
    pub const fn new(mode: ConfirmMode, verbose: bool) -> Self {
        Self {
            mode,
            verbose,
            json: false,
        }
    }

    #[must_use]
    pub const fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

/// The line printed for `--dry-run`.
pub fn what_if_line(target: &str, action: &str) -> String {
    format!("What if: Performing the operation \"{action}\" on target \"{target}\".")
}

/// The line printed for a failed operation.
pub fn error_line(error: &ContentPathError, target: Option<&str>) -> String {
    let kind = error.kind();
    let id = kind.error_id();
    let category = kind.category();
    match target {
        Some(target) => format!("error[{id}]: {error} (category: {category}, target: {target})"),
        None => format!("error[{id}]: {error} (category: {category})"),
    }
}

impl CommandHost for ConsoleHost {
    fn confirm(&self, target: &str, action: &str) -> bool {
        match self.mode {
            ConfirmMode::Force => true,
            ConfirmMode::WhatIf => {
                println!("{}", what_if_line(target, action));
                false
            }
            ConfirmMode::Prompt => {
                println!("Confirm");
                println!("Are you sure you want to perform this action?");
                let prompt = format!("Performing the operation \"{action}\" on target \"{target}\".");
                prompt_confirmation(&prompt).unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "confirmation prompt failed, treating as no");
                    false
                })
            }
        }
    }

    fn emit_result(&self, info: &ContentPathInfo) {
        if self.json {
            match serde_json::to_string_pretty(info) {
                Ok(json) => println!("{json}"),
                Err(e) => tracing::error!(error = %e, "failed to serialize result"),
            }
        } else {
            println!("{info}");
        }
    }

    fn emit_error(&self, error: &ContentPathError, target: Option<&str>) {
        eprintln!("{}", error_line(error, target));
    }

    fn emit_warning(&self, message: &str) {
        eprintln!("WARNING: {message}");
    }

    fn emit_verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("VERBOSE: {message}");
        } else {
            tracing::debug!("{message}");
        }
    }
}
