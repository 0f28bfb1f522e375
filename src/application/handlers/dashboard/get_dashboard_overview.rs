//! GetDashboardOverviewHandler - Query handler for the document dashboard.
//!
//! Returns collection-wide stats plus the rows matching the search term
//! and type filter.

use crate::application::WorkspaceStore;
use crate::domain::dashboard::{DashboardOverview, DocumentFilter};

/// Query to get the dashboard overview.
#[derive(Debug, Clone, Default)]
pub struct GetDashboardOverviewQuery {
    pub filter: DocumentFilter,
}

/// Result of successful dashboard overview query.
pub type GetDashboardOverviewResult = DashboardOverview;

/// Handler for retrieving the dashboard overview.
pub struct GetDashboardOverviewHandler {
    store: WorkspaceStore,
}

impl GetDashboardOverviewHandler {
    pub fn new(store: WorkspaceStore) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetDashboardOverviewQuery) -> GetDashboardOverviewResult {
        self.store
            .read(|workspace| DashboardOverview::build(workspace.documents(), query.filter))
            .await
    }
}
