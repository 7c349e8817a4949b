//! Get command handler.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::host::{ConfirmMode, ConsoleHost};

/// Print the effective content path.
pub fn execute(ctx: &CliContext, json: bool, verbose: bool) -> Result<(), CliError> {
    let host = ConsoleHost::new(ConfirmMode::Prompt, verbose).with_json(json);
    ctx.service
        .get(&host)
        .map(|_| ())
        .map_err(|e| CliError::reported(&e))
}
