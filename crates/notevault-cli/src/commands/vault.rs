// crates/notevault-cli/src/commands/vault.rs - Vault Location Commands
//
// `vault` shows where notes are read from; `setvault` moves the session to
// another directory and remembers it for the next run.

use anyhow::Result;
use notevault_core::vault::ensure_directory;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::context::Context;
use crate::output;

/// Print the current vault path verbatim
pub fn show(ctx: &Context, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Vault location: {}", ctx.vault_path())?;
    Ok(())
}

/// Switch to `path`, creating it if nothing exists there
///
/// The path is not otherwise validated. If creating the directory fails the
/// session keeps its current vault; if only saving the config fails the
/// session still switches.
pub fn set(ctx: &mut Context, path: &str, out: &mut dyn Write) -> Result<()> {
    if ensure_directory(Path::new(path))? {
        output::success(out, format_args!("New vault created at: {path}"))?;
    }

    match ctx.set_vault_path(path) {
        Ok(()) => {
            info!(vault = path, "vault path changed");
            output::success(out, format_args!("Vault path updated: {path}"))?;
        }
        Err(e) => output::failure(out, format_args!("Failed to save configuration: {e}"))?,
    }
    Ok(())
}
