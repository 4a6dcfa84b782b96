use utoipa::OpenApi;

use super::api::drones::{DroneDetailResponse, Selection};
use super::api::error::ErrorResponse;
use crate::dashboard::summary::{AlertSummary, FleetSummary, MissionProgress};
use crate::dashboard::DashboardSummary;
use crate::fleet::mission::{MissionKind, MissionPriority, MissionState};
use crate::fleet::{
    Alert, AlertKind, Drone, DroneStatus, Mission, OperationStatus, Position, RouteLeg, Waypoint,
    WaypointDraft, WaypointKind,
};
use crate::telemetry::{FixType, GpsQuality, GpsStatus, TelemetryReadout};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::drones::list_drones,
        super::api::drones::get_drone,
        super::api::drones::get_selection,
        super::api::drones::put_selection,
        super::api::drones::summary,
        super::api::drones::gps_status,
        super::api::waypoints::list_waypoints,
        super::api::waypoints::add_waypoint,
        super::api::waypoints::delete_waypoint,
        super::api::waypoints::route,
        super::api::alerts::list_alerts,
        super::api::alerts::acknowledge_alert,
        super::api::alerts::dismiss_alert,
        super::api::missions::list_missions,
        super::api::missions::operation_status,
        super::api::missions::toggle_operation,
    ),
    components(
        schemas(
            Drone,
            DroneStatus,
            Position,
            DroneDetailResponse,
            Selection,
            TelemetryReadout,
            GpsQuality,
            GpsStatus,
            FixType,
            Waypoint,
            WaypointDraft,
            WaypointKind,
            RouteLeg,
            Alert,
            AlertKind,
            Mission,
            MissionKind,
            MissionPriority,
            MissionState,
            OperationStatus,
            DashboardSummary,
            FleetSummary,
            AlertSummary,
            MissionProgress,
            ErrorResponse,
        )
    ),
    info(
        title = "Drone Fleet Dashboard API",
        description = "Simulated fleet telemetry, waypoint planning and alert handling",
        version = "0.1.0"
    ),
    tags(
        (name = "fleet", description = "Drone telemetry and selection"),
        (name = "waypoints", description = "Route planning"),
        (name = "alerts", description = "Alert feed"),
        (name = "missions", description = "Missions and operation control")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/drones",
            "/api/drones/{id}",
            "/api/selection",
            "/api/summary",
            "/api/gps",
            "/api/waypoints",
            "/api/waypoints/{id}",
            "/api/waypoints/route",
            "/api/alerts",
            "/api/alerts/{id}/acknowledge",
            "/api/alerts/{id}",
            "/api/missions",
            "/api/operation",
            "/api/operation/toggle",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
