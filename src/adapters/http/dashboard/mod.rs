//! Dashboard HTTP adapter module.
//!
//! Provides REST API endpoints for the document dashboard.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::dashboard_router;
