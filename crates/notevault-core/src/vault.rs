// crates/notevault-core/src/vault.rs - Note Storage
//
// A vault is a single directory holding Markdown notes at its top level.
// A note named `ideas` is the file `<vault>/ideas.md`; nothing else defines
// it. There is no index and no in-memory model: every operation goes straight
// to the filesystem, so whatever an external editor or git just did is always
// what the next command sees.
//
// DESIGN PRINCIPLES:
// - Flat: subdirectories are never entered, and directories are never notes
// - Unvalidated: constructing a Vault never touches the disk
// - Typed failures: callers get a VaultError and choose the wording

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Suffix that makes a file a note
pub const NOTE_EXTENSION: &str = ".md";

#[derive(Error, Debug)]
pub enum VaultError {
    #[error("Note already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Note does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl VaultError {
    fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type VaultResult<T> = Result<T, VaultError>;

/// Note operations scoped to one vault directory
///
/// EXAMPLE USAGE:
/// ```no_run
/// use notevault_core::Vault;
///
/// let vault = Vault::new("/home/me/notes");
/// let path = vault.create_note("ideas")?;
/// for name in vault.search_notes("IDEA")? {
///     println!("{name}");
/// }
/// # Ok::<(), notevault_core::VaultError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Vault {
    path: PathBuf,
}

impl Vault {
    /// Wrap a directory path; the directory is not checked
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Location of the file backing note `name`
    pub fn note_path(&self, name: &str) -> PathBuf {
        self.path.join(format!("{name}{NOTE_EXTENSION}"))
    }

    /// Whether anything exists at the note's path
    ///
    /// Errors other than "not found" (permissions, broken parents) are
    /// surfaced rather than read as absence.
    pub fn note_exists(&self, name: &str) -> VaultResult<bool> {
        let path = self.note_path(name);
        match fs::metadata(&path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(VaultError::io("check", &path, e)),
        }
    }

    /// Create an empty note, refusing to touch an existing one
    pub fn create_note(&self, name: &str) -> VaultResult<PathBuf> {
        let path = self.note_path(name);
        if self.note_exists(name)? {
            return Err(VaultError::AlreadyExists(path));
        }

        // create_new closes the gap between the check and the write
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => VaultError::AlreadyExists(path.clone()),
                _ => VaultError::io("create", &path, e),
            })?;

        debug!(path = %path.display(), "note created");
        Ok(path)
    }

    /// Resolve the path of a note that must already exist
    ///
    /// Used before handing a note to the editor: editing never creates.
    pub fn require_note(&self, name: &str) -> VaultResult<PathBuf> {
        if self.note_exists(name)? {
            Ok(self.note_path(name))
        } else {
            Err(VaultError::NotFound(self.note_path(name)))
        }
    }

    /// Remove an existing note
    pub fn delete_note(&self, name: &str) -> VaultResult<PathBuf> {
        let path = self.require_note(name)?;
        fs::remove_file(&path).map_err(|e| VaultError::io("delete", &path, e))?;

        debug!(path = %path.display(), "note deleted");
        Ok(path)
    }

    /// File names of every note, in directory order
    ///
    /// Fails when the vault itself cannot be read, which includes the
    /// unconfigured (empty) vault path.
    pub fn list_notes(&self) -> VaultResult<Vec<String>> {
        let entries =
            fs::read_dir(&self.path).map_err(|e| VaultError::io("read vault", &self.path, e))?;

        let mut notes = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| VaultError::io("read vault", &self.path, e))?;

            let is_dir = match entry.file_type() {
                Ok(file_type) => file_type.is_dir(),
                Err(e) => {
                    warn!(entry = %entry.path().display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if is_dir {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(NOTE_EXTENSION) {
                notes.push(name);
            }
        }

        Ok(notes)
    }

    /// Notes whose file name contains `keyword`, ignoring case
    ///
    /// The comparison runs on the full file name, so a keyword of `.md`
    /// matches every note.
    pub fn search_notes(&self, keyword: &str) -> VaultResult<Vec<String>> {
        let keyword = keyword.to_lowercase();
        Ok(self
            .list_notes()?
            .into_iter()
            .filter(|name| name.to_lowercase().contains(&keyword))
            .collect())
    }
}

/// Make sure a vault directory exists at `path`
///
/// Returns `true` when the directory (and any missing parents) had to be
/// created. An existing entry is accepted as-is, even if it is a file.
pub fn ensure_directory(path: &Path) -> VaultResult<bool> {
    match fs::metadata(path) {
        Ok(_) => Ok(false),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(path).map_err(|e| VaultError::io("create vault", path, e))?;
            debug!(path = %path.display(), "vault directory created");
            Ok(true)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not inspect vault path, using it as-is");
            Ok(false)
        }
    }
}
