//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The `WorkspaceStore` holds the shared state; the `Workbench` adds the
//! template catalog, content generator and the open editor on top of it.

pub mod editor;
pub mod handlers;
mod store;
mod workbench;

pub use editor::{AutoSaveSettings, EditorController, EditorState};
pub use store::{WorkspaceSnapshot, WorkspaceStore};
pub use workbench::{GenerationOutcome, Workbench};
