use anyhow::Result;
use std::io::Write;

use crate::context::Context;

/// Print every note in the vault, in directory order
///
/// An unreadable vault (including an unconfigured one) is an error.
pub fn handle(ctx: &Context, out: &mut dyn Write) -> Result<()> {
    let notes = ctx.vault().list_notes()?;

    writeln!(out, "Notes:")?;
    for name in notes {
        writeln!(out, " - {name}")?;
    }
    Ok(())
}
