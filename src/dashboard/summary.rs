use serde::Serialize;
use utoipa::ToSchema;

use crate::fleet::{
    mission::MissionState, Alert, AlertKind, Drone, Mission, OperationStatus,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FleetSummary {
    pub active: usize,
    pub total: usize,
    pub gps_connected: usize,
}

pub fn fleet_summary(drones: &[Drone]) -> FleetSummary {
    FleetSummary {
        active: drones.iter().filter(|d| d.status.is_active()).count(),
        total: drones.len(),
        gps_connected: drones.iter().filter(|d| d.is_gps_connected()).count(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AlertSummary {
    pub total: usize,
    pub unacknowledged: usize,
    pub critical: usize,
    pub warning: usize,
    pub info: usize,
    pub success: usize,
}

pub fn alert_summary(alerts: &[Alert]) -> AlertSummary {
    let count = |kind: AlertKind| alerts.iter().filter(|a| a.kind == kind).count();
    AlertSummary {
        total: alerts.len(),
        unacknowledged: alerts.iter().filter(|a| !a.acknowledged).count(),
        critical: count(AlertKind::Critical),
        warning: count(AlertKind::Warning),
        info: count(AlertKind::Info),
        success: count(AlertKind::Success),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MissionProgress {
    pub id: String,
    pub name: String,
    pub status: MissionState,
    pub progress_percent: u8,
}

pub fn mission_progress(missions: &[Mission]) -> Vec<MissionProgress> {
    missions
        .iter()
        .map(|m| MissionProgress {
            id: m.id.clone(),
            name: m.name.clone(),
            status: m.status,
            progress_percent: m.progress_percent(),
        })
        .collect()
}

/// Everything the dashboard header and side panels count.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DashboardSummary {
    pub fleet: FleetSummary,
    pub alerts: AlertSummary,
    pub missions: Vec<MissionProgress>,
    pub operation: OperationStatus,
    pub system_health: u8,
    pub telemetry_ticks: u64,
}
