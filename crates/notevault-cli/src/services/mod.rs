// crates/notevault-cli/src/services/mod.rs - Service layer modules
pub mod editor;
pub mod launcher;

pub use editor::EditorService;
