// crates/notevault-core/src/process.rs - External Program Boundary
//
// The vault manager leans on three outside programs: a terminal editor, the
// GUI note application and git. All of them go through ProcessGateway so the
// command layer can be exercised without spawning anything.
//
// LAUNCH MODES:
// - Attached: child shares our stdin/stdout/stderr, we block until it exits
//   (the editor owns the terminal while it runs)
// - Detached: child is spawned and left running (GUI application)
// - Captured: we block until it exits but keep its output off the terminal
//   (git, whose chatter would otherwise land in the middle of the prompt)
//
// No timeouts: a hung child blocks the session.

use std::io;
use std::process::{Command, Stdio};
use thiserror::Error;
use tracing::debug;

/// How a child process relates to the current terminal session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launch {
    Attached,
    Detached,
    Captured,
}

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{program}' {}{}", exit_description(.code), stderr_suffix(.stderr))]
    Exit {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

/// Runs external programs on behalf of the session
pub trait ProcessGateway {
    fn run(&self, program: &str, args: &[&str], launch: Launch) -> Result<(), ProcessError>;
}

/// Gateway backed by real child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemGateway;

impl ProcessGateway for SystemGateway {
    fn run(&self, program: &str, args: &[&str], launch: Launch) -> Result<(), ProcessError> {
        debug!(program, ?args, ?launch, "running external program");

        let spawn_error = |source| ProcessError::Spawn {
            program: program.to_string(),
            source,
        };

        let mut command = Command::new(program);
        command.args(args);

        match launch {
            Launch::Attached => {
                let status = command.status().map_err(spawn_error)?;
                if status.success() {
                    Ok(())
                } else {
                    Err(ProcessError::Exit {
                        program: program.to_string(),
                        code: status.code(),
                        stderr: String::new(),
                    })
                }
            }
            Launch::Detached => {
                // Dropping the handle does not kill the child
                command
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn()
                    .map_err(spawn_error)?;
                Ok(())
            }
            Launch::Captured => {
                let output = command.stdin(Stdio::null()).output().map_err(spawn_error)?;
                if output.status.success() {
                    Ok(())
                } else {
                    Err(ProcessError::Exit {
                        program: program.to_string(),
                        code: output.status.code(),
                        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                    })
                }
            }
        }
    }
}
