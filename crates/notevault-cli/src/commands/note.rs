// crates/notevault-cli/src/commands/note.rs - Note Management Commands
//
// new, write and delete. A name refers to `<vault>/<name>.md`; "already
// exists" and "does not exist" are ordinary outcomes reported to the user,
// not errors.

use anyhow::Result;
use notevault_core::VaultError;
use std::io::Write;

use crate::context::Context;
use crate::output;
use crate::services::EditorService;

/// Create an empty note, leaving an existing one untouched
pub fn create(ctx: &Context, name: &str, out: &mut dyn Write) -> Result<()> {
    match ctx.vault().create_note(name) {
        Ok(path) => output::success(out, format_args!("Note created: {}", path.display()))?,
        Err(e @ VaultError::AlreadyExists(_)) => output::warning(out, e)?,
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Open an existing note in the editor and wait until it closes
///
/// Never creates the note.
pub fn edit(ctx: &Context, name: &str, out: &mut dyn Write) -> Result<()> {
    let path = match ctx.vault().require_note(name) {
        Ok(path) => path,
        Err(e @ VaultError::NotFound(_)) => {
            output::warning(out, e)?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    EditorService::open_file(ctx.gateway(), &path)
}

/// Remove an existing note
pub fn delete(ctx: &Context, name: &str, out: &mut dyn Write) -> Result<()> {
    match ctx.vault().delete_note(name) {
        Ok(path) => output::success(out, format_args!("Note deleted: {}", path.display()))?,
        Err(e @ VaultError::NotFound(_)) => output::warning(out, e)?,
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{failing_context, text, vault_context};
    use notevault_core::Launch;
    use std::fs;

    #[test]
    fn test_create_reports_path() {
        let (_temp, ctx, _calls, vault) = vault_context();
        let mut out = Vec::new();

        create(&ctx, "ideas", &mut out).unwrap();

        let expected = vault.join("ideas.md");
        assert!(expected.is_file());
        assert!(text(&out).contains(&format!("Note created: {}", expected.display())));
    }

    #[test]
    fn test_create_twice_reports_existing() {
        let (_temp, ctx, _calls, vault) = vault_context();
        fs::write(vault.join("ideas.md"), "keep").unwrap();
        let mut out = Vec::new();

        create(&ctx, "ideas", &mut out).unwrap();

        assert!(text(&out).contains("Note already exists"));
        assert_eq!(fs::read_to_string(vault.join("ideas.md")).unwrap(), "keep");
    }

    #[test]
    fn test_create_without_vault_is_error() {
        let (temp, mut ctx, _calls) = failing_context(&[]);
        ctx.set_vault_path(temp.path().join("absent").to_str().unwrap())
            .unwrap();
        let mut out = Vec::new();

        assert!(create(&ctx, "ideas", &mut out).is_err());
    }

    #[test]
    fn test_create_when_vault_is_a_file_is_error() {
        let (temp, mut ctx, _calls) = failing_context(&[]);
        let file = temp.path().join("file");
        fs::write(&file, "").unwrap();
        ctx.set_vault_path(file.to_str().unwrap()).unwrap();
        let mut out = Vec::new();

        let err = create(&ctx, "x", &mut out).unwrap_err();

        assert!(err.to_string().contains("Failed to check"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_edit_missing_note_does_not_launch_editor() {
        let (_temp, ctx, calls, vault) = vault_context();
        let mut out = Vec::new();

        edit(&ctx, "ghost", &mut out).unwrap();

        assert!(text(&out).contains("Note does not exist"));
        assert!(calls.borrow().is_empty());
        assert!(!vault.join("ghost.md").exists());
    }

    #[test]
    fn test_edit_runs_editor_attached_on_note() {
        let (_temp, ctx, calls, vault) = vault_context();
        fs::write(vault.join("ideas.md"), "").unwrap();
        let mut out = Vec::new();

        edit(&ctx, "ideas", &mut out).unwrap();

        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].launch, Launch::Attached);
        assert_eq!(
            calls[0].args.last().map(String::as_str),
            vault.join("ideas.md").to_str()
        );
    }

    #[test]
    fn test_delete_then_delete_again() {
        let (_temp, ctx, _calls, vault) = vault_context();
        fs::write(vault.join("ideas.md"), "").unwrap();
        let mut out = Vec::new();

        delete(&ctx, "ideas", &mut out).unwrap();
        assert!(!vault.join("ideas.md").exists());
        assert!(text(&out).contains("Note deleted"));

        let mut out = Vec::new();
        delete(&ctx, "ideas", &mut out).unwrap();
        assert!(text(&out).contains("Note does not exist"));
    }
}
