//! UI helper functions for terminal output formatting.
//!
//! This module provides utility functions for consistent user interface output
//! across CLI commands, including error messages and banners.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Frame `headline` between two rules sized to fit it
pub fn write_banner(out: &mut dyn Write, headline: &str) -> std::io::Result<()> {
    let rule = "=".repeat(headline.chars().count() + 4);
    writeln!(out, "{}", rule)?;
    writeln!(out, "  {}", headline)?;
    writeln!(out, "{}", rule)
}
