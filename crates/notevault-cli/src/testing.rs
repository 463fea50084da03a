// Shared fixtures for the in-crate tests

use notevault_core::{ConfigStore, Launch, ProcessError, ProcessGateway};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use tempfile::TempDir;

use crate::context::Context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub program: String,
    pub args: Vec<String>,
    pub launch: Launch,
}

pub type Calls = Rc<RefCell<Vec<Call>>>;

/// Gateway that records invocations instead of spawning anything
///
/// A call fails when its program or any of its arguments equals `fail_on`.
#[derive(Default)]
pub struct RecordingGateway {
    pub calls: Calls,
    pub fail_on: Vec<&'static str>,
}

impl ProcessGateway for RecordingGateway {
    fn run(&self, program: &str, args: &[&str], launch: Launch) -> Result<(), ProcessError> {
        self.calls.borrow_mut().push(Call {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            launch,
        });

        let hit = std::iter::once(program)
            .chain(args.iter().copied())
            .any(|token| self.fail_on.iter().any(|f| *f == token));
        if hit {
            Err(ProcessError::Exit {
                program: program.to_string(),
                code: Some(1),
                stderr: "simulated failure".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

/// Session with its config file in a temp dir and no vault configured
pub fn test_context() -> (TempDir, Context, Calls) {
    failing_context(&[])
}

pub fn failing_context(fail_on: &[&'static str]) -> (TempDir, Context, Calls) {
    let temp = TempDir::new().unwrap();
    let gateway = RecordingGateway {
        fail_on: fail_on.to_vec(),
        ..RecordingGateway::default()
    };
    let calls = Rc::clone(&gateway.calls);
    let store = ConfigStore::new(temp.path().join(".vaultconfig.json"));
    (temp, Context::new(store, Box::new(gateway)), calls)
}

/// Session pointed at an existing, empty vault directory
pub fn vault_context() -> (TempDir, Context, Calls, PathBuf) {
    let (temp, mut ctx, calls) = test_context();
    let vault = temp.path().join("vault");
    std::fs::create_dir(&vault).unwrap();
    ctx.set_vault_path(vault.to_str().unwrap()).unwrap();
    (temp, ctx, calls, vault)
}

/// Captured session output as text
pub fn text(out: &[u8]) -> String {
    String::from_utf8_lossy(out).into_owned()
}
