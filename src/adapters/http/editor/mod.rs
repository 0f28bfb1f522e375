//! Editor HTTP adapter module.
//!
//! Field edits go to the open editor's draft; the draft reaches the
//! collection through auto-save, an explicit save, or continuing to preview.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::editor_router;
