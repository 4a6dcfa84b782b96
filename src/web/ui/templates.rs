use askama::Template;
use askama_web::WebTemplate;
use chrono::{DateTime, Utc};

use crate::dashboard::DashboardState;
use crate::fleet::alert::format_age;
use crate::fleet::waypoint::{route_legs, sorted_by_order};
use crate::fleet::{Alert, Drone, Mission, Waypoint, WaypointKind};
use crate::telemetry::{format_coordinate, Axis, GpsStatus, TelemetryReadout};

pub struct DroneCard {
    pub id: String,
    pub name: String,
    pub status: String,
    pub status_class: &'static str,
    pub battery: String,
    pub battery_level: String,
    pub signal: String,
    pub signal_level: String,
    pub altitude: String,
    pub mission: String,
    pub battery_warning: bool,
    pub selected: bool,
}

impl DroneCard {
    fn new(drone: &Drone, selected: Option<&str>) -> Self {
        Self {
            id: drone.id.clone(),
            name: drone.name.clone(),
            status: drone.status.to_string(),
            status_class: drone.status.css_class(),
            battery: format!("{:.0}%", drone.battery),
            battery_level: drone.battery_level().to_string(),
            signal: format!("{:.0}%", drone.signal),
            signal_level: drone.signal_level().to_string(),
            altitude: format!("{:.0} m", drone.position.alt),
            mission: drone.mission.clone().unwrap_or_else(|| "Unassigned".into()),
            battery_warning: drone.needs_battery_warning(),
            selected: selected == Some(drone.id.as_str()),
        }
    }
}

pub struct ReadoutRow {
    pub label: &'static str,
    pub value: String,
}

/// Detail panel for the selected drone.
pub struct SelectedPanel {
    pub id: String,
    pub name: String,
    pub status: String,
    pub latitude: String,
    pub longitude: String,
    pub rows: Vec<ReadoutRow>,
}

impl SelectedPanel {
    fn new(drone: &Drone, readout: &TelemetryReadout) -> Self {
        let row = |label: &'static str, value: String| ReadoutRow { label, value };
        Self {
            id: drone.id.clone(),
            name: drone.name.clone(),
            status: drone.status.to_string(),
            latitude: format_coordinate(drone.position.lat, Axis::Latitude),
            longitude: format_coordinate(drone.position.lng, Axis::Longitude),
            rows: vec![
                row("Altitude", format!("{:.1} m", drone.position.alt)),
                row("Battery", format!("{:.1}%", drone.battery)),
                row("Signal", format!("{:.1}%", drone.signal)),
                row("Speed", format!("{:.1} m/s", readout.speed_m_s)),
                row("Heading", format!("{:.0}°", readout.heading_deg)),
                row("Vertical speed", format!("{} m/s", readout.vertical_speed())),
                row("Ground speed", format!("{:.1} m/s", readout.ground_speed_m_s)),
                row("Flight time", readout.flight_time()),
                row("Temperature", format!("{:.1} °C", readout.temperature_c)),
                row("Wind", format!("{:.1} m/s", readout.wind_speed_m_s)),
                row("Vibration", format!("{:.2} g", readout.vibration)),
                row(
                    "GPS",
                    format!(
                        "{} (±{:.1} m, {} sats, HDOP {:.1})",
                        readout.gps_quality,
                        readout.gps_accuracy_m,
                        readout.satellite_count,
                        readout.hdop
                    ),
                ),
            ],
        }
    }
}

pub struct WaypointRow {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub order: u32,
    pub position: String,
    pub altitude: String,
}

impl From<&Waypoint> for WaypointRow {
    fn from(wp: &Waypoint) -> Self {
        Self {
            id: wp.id.clone(),
            name: wp.name.clone(),
            kind: wp.kind.to_string(),
            order: wp.order,
            position: format!("{:.4}, {:.4}", wp.lat, wp.lng),
            altitude: format!("{:.0} m", wp.alt),
        }
    }
}

pub struct GpsPanel {
    pub accuracy: String,
    pub satellites: u32,
    pub fix: &'static str,
    pub last_update: String,
}

impl From<&GpsStatus> for GpsPanel {
    fn from(gps: &GpsStatus) -> Self {
        Self {
            accuracy: format!("±{:.1} m", gps.accuracy_m),
            satellites: gps.satellite_count,
            fix: gps.fix_type.label(),
            last_update: gps.last_update.format("%H:%M:%S").to_string(),
        }
    }
}

pub struct MissionCard {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub priority: String,
    pub status: String,
    pub progress: u8,
    pub assigned_drones: u32,
    pub estimated_time: String,
}

impl From<&Mission> for MissionCard {
    fn from(m: &Mission) -> Self {
        Self {
            id: m.id.clone(),
            name: m.name.clone(),
            kind: m.kind.to_string(),
            priority: m.priority.to_string(),
            status: m.status.to_string(),
            progress: m.progress_percent(),
            assigned_drones: m.assigned_drones,
            estimated_time: m.estimated_time.clone(),
        }
    }
}

pub struct AlertCard {
    pub id: String,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub source: String,
    pub age: String,
    pub acknowledged: bool,
}

impl AlertCard {
    fn new(alert: &Alert, now: DateTime<Utc>) -> Self {
        Self {
            id: alert.id.clone(),
            kind: alert.kind.to_string(),
            title: alert.title.clone(),
            message: alert.message.clone(),
            source: alert.source.clone(),
            age: format_age(alert.timestamp, now),
            acknowledged: alert.acknowledged,
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub refresh_secs: u64,
    pub operation: String,
    pub operation_running: bool,
    pub sound_enabled: bool,
    pub system_health: u8,
    pub active_drones: usize,
    pub total_drones: usize,
    pub gps_connected: usize,
    pub unacknowledged_alerts: usize,
    pub critical_alerts: usize,
    pub warning_alerts: usize,
    pub gps_view: bool,
    pub drones: Vec<DroneCard>,
    pub selected: Option<SelectedPanel>,
    pub waypoints: Vec<WaypointRow>,
    pub route: Vec<String>,
    pub waypoint_kinds: Vec<String>,
    pub gps: GpsPanel,
    pub missions: Vec<MissionCard>,
    pub alerts: Vec<AlertCard>,
}

impl DashboardTemplate {
    /// Takes `&mut` because the detail panel draws a fresh readout.
    pub fn from_state(state: &mut DashboardState, refresh_secs: u64, now: DateTime<Utc>) -> Self {
        let summary = state.summary();
        let selected_id = state.selected_drone.clone();
        let selected = match state.selected().cloned() {
            Some(drone) => {
                let readout = state.sample_readout();
                Some(SelectedPanel::new(&drone, &readout))
            }
            None => None,
        };

        Self {
            refresh_secs,
            operation: summary.operation.to_string(),
            operation_running: summary.operation == crate::fleet::OperationStatus::Active,
            sound_enabled: state.sound_enabled,
            system_health: summary.system_health,
            active_drones: summary.fleet.active,
            total_drones: summary.fleet.total,
            gps_connected: summary.fleet.gps_connected,
            unacknowledged_alerts: summary.alerts.unacknowledged,
            critical_alerts: summary.alerts.critical,
            warning_alerts: summary.alerts.warning,
            gps_view: state.view == crate::dashboard::ActiveView::Gps,
            drones: state
                .drones
                .iter()
                .map(|d| DroneCard::new(d, selected_id.as_deref()))
                .collect(),
            selected,
            waypoints: sorted_by_order(&state.waypoints)
                .iter()
                .map(WaypointRow::from)
                .collect(),
            route: route_legs(&state.waypoints)
                .into_iter()
                .map(|leg| format!("{} → {}", leg.from, leg.to))
                .collect(),
            waypoint_kinds: [
                WaypointKind::Checkpoint,
                WaypointKind::Target,
                WaypointKind::Home,
                WaypointKind::Landing,
            ]
            .iter()
            .map(|k| k.to_string())
            .collect(),
            gps: GpsPanel::from(&state.gps),
            missions: state.missions.iter().map(MissionCard::from).collect(),
            alerts: state
                .alerts
                .iter()
                .map(|a| AlertCard::new(a, now))
                .collect(),
        }
    }
}
