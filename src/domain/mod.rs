//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `document` - The academic document aggregate, sections and progress
//! - `template` - Curated templates and the static catalog
//! - `workspace` - Session state: collection, selection and active view
//! - `dashboard` - Filtering and aggregate counts
//! - `editor` - Local draft and AI-assist bookkeeping
//! - `preview` - Print layout and status control

pub mod dashboard;
pub mod document;
pub mod editor;
pub mod foundation;
pub mod preview;
pub mod template;
pub mod workspace;
