//! Host callbacks for user interaction.
//!
//! The service never talks to a terminal or GUI directly. Confirmation
//! prompts and all reporting go through a [`CommandHost`] supplied per call.

use crate::domain::ContentPathInfo;
use crate::error::ContentPathError;

/// Callbacks the hosting command layer provides.
///
/// # Implementations
///
/// - `ConsoleHost` in the CLI crate (stdin prompt, stdout/stderr output)
/// - Recording fakes in tests
pub trait CommandHost {
    /// Ask whether `action` may be performed on `target`.
    ///
    /// May block for as long as the host needs. Returning `false` aborts
    /// the operation without side effects.
    fn confirm(&self, target: &str, action: &str) -> bool;

    /// Report the value produced by a query.
    fn emit_result(&self, info: &ContentPathInfo);

    /// Report a failed operation. `target` names the offending input, if any.
    fn emit_error(&self, error: &ContentPathError, target: Option<&str>);

    /// Report a non-fatal problem.
    fn emit_warning(&self, message: &str);

    /// Report progress detail that is only shown on request.
    fn emit_verbose(&self, message: &str) {
        tracing::debug!("{message}");
    }
}
