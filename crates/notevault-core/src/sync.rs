// crates/notevault-core/src/sync.rs - Publishing the Vault with Git
//
// The vault directory is expected to be a git working tree with a remote
// already configured. Publishing is three git invocations, each scoped to the
// vault with `-C`:
//
//   git -C <vault> add .
//   git -C <vault> commit -m "Update via CLI"
//   git -C <vault> push
//
// A failed commit usually just means there was nothing new to commit, so it
// is recorded and the push still runs. A failed stage or push ends the
// sequence. Every step is attempted exactly once.

use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::process::{Launch, ProcessError, ProcessGateway};

/// Commit message used for every publish
pub const COMMIT_MESSAGE: &str = "Update via CLI";

const GIT: &str = "git";

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("failed to stage changes: {0}")]
    Stage(#[source] ProcessError),

    /// The commit outcome rides along so it can still be reported
    #[error("failed to push: {source}")]
    Push {
        #[source]
        source: ProcessError,
        commit_skipped: Option<ProcessError>,
    },
}

/// Outcome of a publish that reached the remote
#[derive(Debug)]
pub struct PushReport {
    /// Why the commit step failed, if it did
    pub commit_skipped: Option<ProcessError>,
}

/// Stage, commit and push everything in `vault_dir`
pub fn push_changes(
    vault_dir: &Path,
    gateway: &dyn ProcessGateway,
) -> Result<PushReport, SyncError> {
    let dir = vault_dir.to_string_lossy();
    let git = |args: &[&str]| {
        let mut full = vec!["-C", &*dir];
        full.extend_from_slice(args);
        debug!(args = ?full, "git");
        gateway.run(GIT, &full, Launch::Captured)
    };

    git(&["add", "."]).map_err(SyncError::Stage)?;

    let commit_skipped = match git(&["commit", "-m", COMMIT_MESSAGE]) {
        Ok(()) => None,
        Err(e) => {
            warn!(error = %e, "commit failed, pushing anyway");
            Some(e)
        }
    };

    match git(&["push"]) {
        Ok(()) => Ok(PushReport { commit_skipped }),
        Err(source) => Err(SyncError::Push {
            source,
            commit_skipped,
        }),
    }
}
