// crates/stamp-cli/src/services/mod.rs - Service layer modules
pub mod notebook;

pub use notebook::NotebookService;
