use anyhow::Result;
use std::io::Write;

use crate::context::Context;
use crate::output;
use crate::services::launcher;

/// Start the GUI application without waiting for it
pub fn handle(ctx: &Context, out: &mut dyn Write) -> Result<()> {
    launcher::launch(ctx.gateway())?;
    output::success(out, "Obsidian launched!")?;
    Ok(())
}
