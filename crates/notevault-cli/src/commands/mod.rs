// crates/notevault-cli/src/commands/mod.rs - Command Handler Modules
//
// One module per command family. Handlers take the session context and the
// output stream, report outcomes to the user themselves and return an error
// only for failures the dispatcher should print as such.
//
// MODULE ORGANIZATION:
// - note: new / write / delete
// - list, search: enumerating the vault
// - vault: vault / setvault
// - push: git publish
// - open: GUI application
// - help: command overview

pub mod help;
pub mod list;
pub mod note;
pub mod open;
pub mod push;
pub mod search;
pub mod vault;
