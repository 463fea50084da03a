//! End-to-end tests for the notevault prompt
//!
//! Each test drives the real binary through stdin with its own config file,
//! so nothing touches the user's home directory.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn notevault(config: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("notevault");
    cmd.arg("--config").arg(config).env_remove("NOTEVAULT_CONFIG");
    cmd
}

fn config_in(temp: &TempDir) -> PathBuf {
    temp.path().join(".vaultconfig.json")
}

mod session {
    use super::*;

    #[test]
    fn first_run_writes_empty_config() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);

        notevault(&config)
            .write_stdin("vault\nquit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("-- Welcome to Obsidian in the terminal. --"))
            .stdout(predicate::str::contains("Vault location: \n"))
            .stdout(predicate::str::contains("Goodbye!"));

        let written = fs::read_to_string(&config).unwrap();
        assert!(written.contains("\"vaultPath\": \"\""));
    }

    #[test]
    fn end_of_input_exits_quietly() {
        let temp = TempDir::new().unwrap();

        notevault(&config_in(&temp))
            .write_stdin("help\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Available commands:"))
            .stdout(predicate::str::contains("Goodbye!").not());
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let temp = TempDir::new().unwrap();

        notevault(&config_in(&temp))
            .write_stdin("list\nbogus\nsearch\nexit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Failed to read vault"))
            .stdout(predicate::str::contains("Unknown command: bogus"))
            .stdout(predicate::str::contains("Usage: search <keyword>"))
            .stdout(predicate::str::contains("Goodbye!"));
    }

    #[test]
    fn corrupt_config_is_reported_and_session_continues() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        fs::write(&config, "{ nope").unwrap();

        notevault(&config)
            .write_stdin("vault\nquit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Failed to load configuration"))
            .stdout(predicate::str::contains("Vault location: \n"));
    }
}

mod vault {
    use super::*;

    #[test]
    fn setvault_persists_across_sessions() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        let vault = temp.path().join("myvault");
        let vault_str = vault.to_str().unwrap();

        notevault(&config)
            .write_stdin(format!("setvault {vault_str}\nquit\n"))
            .assert()
            .success()
            .stdout(predicate::str::contains("New vault created at"))
            .stdout(predicate::str::contains("Vault path updated"));

        assert!(vault.is_dir());
        assert!(fs::read_to_string(&config).unwrap().contains(vault_str));

        notevault(&config)
            .write_stdin("vault\nquit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("Vault location: {vault_str}\n")));
    }

    #[test]
    fn note_lifecycle() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        let vault = temp.path().join("notes");
        fs::create_dir(&vault).unwrap();
        fs::write(vault.join("c.txt"), "").unwrap();
        fs::write(
            &config,
            format!("{{\"vaultPath\": \"{}\"}}", vault.to_str().unwrap()),
        )
        .unwrap();

        notevault(&config)
            .write_stdin("new a\nnew b\nnew a\nwrite ghost\nlist\ndelete b\nsearch B\nquit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Note created"))
            .stdout(predicate::str::contains("Note already exists"))
            .stdout(predicate::str::contains("Note does not exist"))
            .stdout(predicate::str::contains(" - a.md"))
            .stdout(predicate::str::contains(" - c.txt").not())
            .stdout(predicate::str::contains("Note deleted"))
            .stdout(predicate::str::contains("No notes match the search."));

        assert!(vault.join("a.md").exists());
        assert!(!vault.join("b.md").exists());
        assert!(!vault.join("ghost.md").exists());
    }
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_version() {
        cargo_bin_cmd!("notevault")
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
