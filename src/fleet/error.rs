use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("drone not found: {0}")]
    DroneNotFound(String),
    #[error("waypoint not found: {0}")]
    WaypointNotFound(String),
    #[error("alert not found: {0}")]
    AlertNotFound(String),
}
