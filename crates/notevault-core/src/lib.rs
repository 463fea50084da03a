// crates/notevault-core/src/lib.rs - Notevault Core Library
//
// The pieces of the note vault that don't care about terminals:
// the persisted configuration, note-level filesystem operations,
// the boundary to external programs and the git publish sequence.
//
// The CLI crate owns all user-facing wording. Everything here returns
// typed errors so callers decide how to present them.

pub mod config;
pub mod process;
pub mod sync;
pub mod vault;

pub use config::{Config, ConfigError, ConfigStore};
pub use process::{Launch, ProcessError, ProcessGateway, SystemGateway};
pub use sync::{PushReport, SyncError};
pub use vault::{Vault, VaultError};
