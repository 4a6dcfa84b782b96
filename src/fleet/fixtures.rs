//! Sample data the dashboard starts from.

use chrono::{DateTime, Duration, Utc};

use super::alert::{Alert, AlertKind};
use super::drone::{Drone, DroneStatus, Position};
use super::mission::{Mission, MissionKind, MissionPriority, MissionState};
use super::waypoint::{Waypoint, WaypointKind};

fn drone(
    id: &str,
    name: &str,
    status: DroneStatus,
    (lat, lng, alt): (f64, f64, f64),
    (battery, signal): (f64, f64),
    mission: Option<&str>,
    formation: &str,
) -> Drone {
    Drone {
        id: id.to_string(),
        name: name.to_string(),
        status,
        position: Position { lat, lng, alt },
        battery,
        signal,
        mission: mission.map(String::from),
        formation: Some(formation.to_string()),
    }
}

pub fn drones() -> Vec<Drone> {
    vec![
        drone(
            "DR-001",
            "Alpha Leader",
            DroneStatus::Active,
            (37.7749, -122.4194, 150.0),
            (87.0, 95.0),
            Some("Search Pattern Alpha"),
            "diamond",
        ),
        drone(
            "DR-002",
            "Beta Wing",
            DroneStatus::Active,
            (37.7739, -122.4184, 145.0),
            (92.0, 88.0),
            Some("Search Pattern Alpha"),
            "diamond",
        ),
        drone(
            "DR-003",
            "Gamma Scout",
            DroneStatus::Active,
            (37.7759, -122.4174, 155.0),
            (76.0, 91.0),
            Some("Perimeter Sweep"),
            "line",
        ),
        drone(
            "DR-004",
            "Delta Support",
            DroneStatus::Standby,
            (37.7729, -122.4204, 0.0),
            (100.0, 100.0),
            None,
            "standby",
        ),
        drone(
            "DR-005",
            "Echo Reserve",
            DroneStatus::Maintenance,
            (37.7719, -122.4214, 0.0),
            (45.0, 0.0),
            None,
            "maintenance",
        ),
    ]
}

fn wp(
    id: &str,
    name: &str,
    (lat, lng, alt): (f64, f64, f64),
    kind: WaypointKind,
    order: u32,
) -> Waypoint {
    Waypoint {
        id: id.to_string(),
        name: name.to_string(),
        lat,
        lng,
        alt,
        kind,
        order,
    }
}

pub fn waypoints() -> Vec<Waypoint> {
    vec![
        wp(
            "WP-001",
            "Search Zone Alpha",
            (37.7749, -122.4194, 150.0),
            WaypointKind::Target,
            1,
        ),
        wp(
            "WP-002",
            "Checkpoint Bravo",
            (37.7759, -122.4184, 145.0),
            WaypointKind::Checkpoint,
            2,
        ),
        wp(
            "WP-003",
            "Home Base",
            (37.7739, -122.4204, 0.0),
            WaypointKind::Home,
            0,
        ),
    ]
}

/// Alert timestamps are relative to `now` so the feed always looks fresh.
pub fn alerts(now: DateTime<Utc>) -> Vec<Alert> {
    let alert = |id: &str,
                 kind: AlertKind,
                 title: &str,
                 message: &str,
                 ago: Duration,
                 acknowledged: bool,
                 source: &str| Alert {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        timestamp: now - ago,
        acknowledged,
        source: source.to_string(),
    };
    vec![
        alert(
            "ALT-001",
            AlertKind::Warning,
            "Low Battery Warning",
            "DR-005 battery level at 45%. Return to base recommended.",
            Duration::minutes(5),
            false,
            "DR-005",
        ),
        alert(
            "ALT-002",
            AlertKind::Info,
            "Formation Update",
            "Swarm formation changed to diamond pattern for optimal coverage.",
            Duration::minutes(10),
            true,
            "System",
        ),
        alert(
            "ALT-003",
            AlertKind::Success,
            "Mission Checkpoint",
            "Search Pattern Alpha completed successfully. 68% coverage achieved.",
            Duration::minutes(15),
            true,
            "Mission Control",
        ),
        alert(
            "ALT-004",
            AlertKind::Critical,
            "Communication Lost",
            "Lost contact with DR-005. Last known position logged.",
            Duration::minutes(2),
            false,
            "DR-005",
        ),
    ]
}

pub fn missions() -> Vec<Mission> {
    vec![
        Mission {
            id: "SAR-001".into(),
            name: "Search & Rescue Alpha".into(),
            kind: MissionKind::Search,
            priority: MissionPriority::High,
            status: MissionState::Active,
            progress: 68,
            assigned_drones: 3,
            estimated_time: "45 min".into(),
        },
        Mission {
            id: "MAP-002".into(),
            name: "Terrain Mapping".into(),
            kind: MissionKind::Mapping,
            priority: MissionPriority::Medium,
            status: MissionState::Planned,
            progress: 0,
            assigned_drones: 2,
            estimated_time: "2.5 hrs".into(),
        },
        Mission {
            id: "SUR-003".into(),
            name: "Perimeter Survey".into(),
            kind: MissionKind::Surveillance,
            priority: MissionPriority::Low,
            status: MissionState::Completed,
            progress: 100,
            assigned_drones: 1,
            estimated_time: "Completed".into(),
        },
    ]
}
