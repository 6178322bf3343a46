//! Terminal output formatting.

use anyhow::{bail, Result};
use colored::Colorize;
use scaffold_core::status::is_failure;

/// Print a successful status, or turn a failure status into an error.
pub fn report(status: &str) -> Result<()> {
    if is_failure(status) {
        bail!("{}", status);
    }
    println!("{} {}", "✓".green().bold(), status);
    Ok(())
}

/// Print a step announcement.
pub fn step(message: &str) {
    println!("{} {}", "→".blue().bold(), message);
}
