mod state;
pub mod summary;

pub use state::{ActiveView, DashboardState, SharedDashboard};
pub use summary::DashboardSummary;
