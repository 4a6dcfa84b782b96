pub mod alerts;
pub mod drones;
pub mod error;
pub mod missions;
pub mod waypoints;

#[cfg(test)]
pub(crate) fn test_state() -> super::state::AppState {
    use std::sync::Arc;

    super::state::AppState {
        config: Arc::new(super::config::Config::default()),
        dashboard: crate::dashboard::DashboardState::new(Some(7)).shared(),
    }
}
