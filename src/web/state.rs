use std::sync::Arc;

use crate::dashboard::SharedDashboard;

use super::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub dashboard: SharedDashboard,
}
