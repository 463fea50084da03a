use anyhow::Result;
use std::io::Write;

use crate::repl::help_lines;

/// Print the command overview
pub fn handle(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Available commands:")?;
    for line in help_lines() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
