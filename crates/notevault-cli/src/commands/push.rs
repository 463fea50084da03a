use anyhow::Result;
use notevault_core::SyncError;
use notevault_core::sync::push_changes;
use std::io::Write;
use std::path::Path;

use crate::context::Context;
use crate::output;

/// Publish the vault to its git remote
///
/// A failed commit is shown as a warning and the push is still attempted.
pub fn handle(ctx: &Context, out: &mut dyn Write) -> Result<()> {
    let result = push_changes(Path::new(ctx.vault_path()), ctx.gateway());

    let commit_skipped = match &result {
        Ok(report) => report.commit_skipped.as_ref(),
        Err(SyncError::Push { commit_skipped, .. }) => commit_skipped.as_ref(),
        Err(SyncError::Stage(_)) => None,
    };
    if let Some(e) = commit_skipped {
        output::warning(out, format_args!("Commit failed (nothing to commit?): {e}"))?;
    }

    result?;
    output::success(out, "Changes pushed to the git remote")?;
    Ok(())
}
