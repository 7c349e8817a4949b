//! User input utilities for interactive command-line prompts.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Prompts the user for a yes/no confirmation on stdin.
///
/// Accepts 'y', 'yes', 'n', 'no' (case insensitive).
/// Empty input and end of input are treated as 'no'.
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn prompt_confirmation(prompt: &str) -> Result<bool> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    confirm_from(&mut stdin.lock(), &mut stdout, prompt)
}

/// Confirmation loop over arbitrary reader and writer.
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn confirm_from<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<bool> {
    loop {
        write!(output, "{prompt} (y/N): ")?;
        output.flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("Failed to read user input")?;
        if read == 0 {
            writeln!(output)?;
            return Ok(false);
        }

        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" | "" => return Ok(false),
            _ => writeln!(output, "Please enter 'y' for yes or 'n' for no.")?,
        }
    }
}
