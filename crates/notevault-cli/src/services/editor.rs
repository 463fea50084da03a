// crates/notevault-cli/src/services/editor.rs - Editor Integration Service
//
// Notes are edited in a terminal editor that takes over the session until the
// user quits it. The vault directory is only read again afterwards, so
// whatever the editor wrote is on disk before the next command runs.

use anyhow::{Result, anyhow};
use notevault_core::{Launch, ProcessGateway};
use std::env;
use std::path::Path;
use tracing::debug;

/// Editor used when neither variable is set
pub const DEFAULT_EDITOR: &str = "nano";

const EDITOR_TIP: &str = "Tip: set NOTEVAULT_EDITOR or EDITOR to an installed editor";

/// Handles text editor operations
///
/// EDITOR SELECTION HIERARCHY:
/// 1. NOTEVAULT_EDITOR environment variable (notevault-specific)
/// 2. EDITOR environment variable (standard Unix)
/// 3. nano
///
/// The selected value may carry arguments, e.g. `EDITOR="code --wait"`.
pub struct EditorService;

impl EditorService {
    /// Get the editor command line to use for opening notes
    pub fn get_editor_command() -> String {
        Self::select_editor(
            env::var("NOTEVAULT_EDITOR").ok(),
            env::var("EDITOR").ok(),
        )
    }

    fn select_editor(notevault_editor: Option<String>, editor: Option<String>) -> String {
        [notevault_editor, editor]
            .into_iter()
            .flatten()
            .find(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
    }

    /// Open a note in the configured editor and wait for it to exit
    ///
    /// The editor inherits the terminal. Failing to start it and a non-zero
    /// exit are both reported as errors.
    pub fn open_file(gateway: &dyn ProcessGateway, path: &Path) -> Result<()> {
        let command = Self::get_editor_command();
        Self::open_with(gateway, &command, path)
    }

    fn open_with(gateway: &dyn ProcessGateway, command: &str, path: &Path) -> Result<()> {
        let mut parts = command.split_whitespace();
        let program = parts.next().unwrap_or(DEFAULT_EDITOR);
        let path_arg = path.to_string_lossy();
        let args: Vec<&str> = parts.chain(std::iter::once(&*path_arg)).collect();

        debug!(program, ?args, "launching editor");
        gateway
            .run(program, &args, Launch::Attached)
            .map_err(|e| anyhow!("Failed to edit note: {e}\n\n{EDITOR_TIP}"))
    }
}
