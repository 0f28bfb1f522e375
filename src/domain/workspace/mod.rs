//! Session workspace: the document collection and the active view.

mod errors;
mod sample;
mod view_state;
#[allow(clippy::module_inception)]
mod workspace;

pub use errors::WorkspaceError;
pub use sample::sample_documents;
pub use view_state::ViewState;
pub use workspace::Workspace;
