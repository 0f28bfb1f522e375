pub mod filter;
pub mod overview;


pub use filter::{DocumentFilter, TypeFilter};
pub use overview::{DashboardOverview, DashboardStats, DocumentRow, EMPTY_STATE_MESSAGE};
