// crates/notevault-cli/src/services/launcher.rs - GUI Application Launcher
//
// `open` starts the Obsidian desktop app on the same vault. The launch is
// fire-and-forget: the prompt comes back immediately.

use anyhow::{Result, anyhow};
use notevault_core::{Launch, ProcessGateway};

const MACOS_ARGS: &[&str] = &["-a", "Obsidian"];
const WINDOWS_ARGS: &[&str] = &["/C", "start", "", "obsidian://"];
const XDG_ARGS: &[&str] = &["obsidian://"];

/// Platform command that brings up the GUI application
pub fn launcher_command() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", MACOS_ARGS)
    } else if cfg!(windows) {
        ("cmd", WINDOWS_ARGS)
    } else {
        ("xdg-open", XDG_ARGS)
    }
}

pub fn launch(gateway: &dyn ProcessGateway) -> Result<()> {
    let (program, args) = launcher_command();
    gateway
        .run(program, args, Launch::Detached)
        .map_err(|e| anyhow!("Failed to open Obsidian: {e}"))
}
