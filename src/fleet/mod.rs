pub mod alert;
pub mod drone;
mod error;
pub mod fixtures;
pub mod mission;
pub mod waypoint;

pub use alert::{Alert, AlertKind};
pub use drone::{Drone, DroneStatus, Position};
pub use error::FleetError;
pub use mission::{Mission, OperationStatus};
pub use waypoint::{RouteLeg, Waypoint, WaypointDraft, WaypointKind};
