//! Workspace HTTP adapter module.
//!
//! View navigation and document selection.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::workspace_router;
