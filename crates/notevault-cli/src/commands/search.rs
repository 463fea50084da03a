// crates/notevault-cli/src/commands/search.rs - Note Search Command
//
// Matches the keyword against note file names only, ignoring case. Contents
// are never read.

use anyhow::Result;
use std::io::Write;

use crate::context::Context;

pub fn handle(ctx: &Context, keyword: &str, out: &mut dyn Write) -> Result<()> {
    let matches = ctx.vault().search_notes(keyword)?;

    writeln!(out, "Notes matching \"{keyword}\":")?;
    if matches.is_empty() {
        writeln!(out, "No notes match the search.")?;
    }
    for name in matches {
        writeln!(out, " - {name}")?;
    }
    Ok(())
}
