//! HTTP DTOs for dashboard endpoints.
//!
//! The domain overview is already shaped for serialization, so it is
//! re-exported directly.

pub use crate::domain::dashboard::{DashboardOverview, DashboardStats, DocumentRow};

use serde::{Deserialize, Serialize};

use crate::domain::workspace::ViewState;

/// Query parameters for `GET /api/dashboard`.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    #[serde(default)]
    pub search: String,
    /// Type key, or "all"/empty for every type.
    #[serde(default, rename = "type")]
    pub doc_type: String,
}

/// Response for `POST /api/dashboard/create`.
#[derive(Debug, Clone, Serialize)]
pub struct NavigationResponse {
    pub view: ViewState,
}
