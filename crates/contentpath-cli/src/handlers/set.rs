//! Set command handler.

use contentpath_core::Outcome;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::host::{ConfirmMode, ConsoleHost};

/// Arguments for the set command.
#[derive(Debug, Clone, Default)]
pub struct SetArgs {
    /// New path; `None` means reset to the platform default.
    pub path: Option<String>,
    pub force: bool,
    pub dry_run: bool,
    pub verbose: bool,
}

impl SetArgs {
    const fn confirm_mode(&self) -> ConfirmMode {
        if self.force {
            ConfirmMode::Force
        } else if self.dry_run {
            ConfirmMode::WhatIf
        } else {
            ConfirmMode::Prompt
        }
    }
}

/// Set or reset the content path.
pub fn execute(ctx: &CliContext, args: &SetArgs) -> Result<(), CliError> {
    let host = ConsoleHost::new(args.confirm_mode(), args.verbose);
    let outcome = match args.path.as_deref() {
        Some(raw) => ctx.service.set(&host, raw),
        None => ctx.service.reset(&host),
    }
    .map_err(|e| CliError::reported(&e))?;

    match outcome {
        Outcome::Applied(effective) => {
            println!(
                "✓ Content path is now {} ({})",
                effective.path.display(),
                effective.source
            );
        }
        Outcome::Declined if args.dry_run => {}
        Outcome::Declined => println!("Content path unchanged."),
    }
    Ok(())
}
