use chrono::{DateTime, Utc};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum_macros::Display;
use tokio::sync::Mutex;
use utoipa::ToSchema;

use crate::fleet::{
    alert, fixtures, waypoint, Alert, Drone, FleetError, Mission, OperationStatus, Waypoint,
    WaypointDraft,
};
use crate::telemetry::{advance_gps_status, advance_telemetry, GpsStatus, TelemetryReadout};

use super::summary::{alert_summary, fleet_summary, mission_progress, DashboardSummary};

const SYSTEM_HEALTH: u8 = 98;

pub type SharedDashboard = Arc<Mutex<DashboardState>>;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ActiveView {
    #[default]
    Map,
    Gps,
}

/// All mutable dashboard state in one place. Every update replaces whole
/// collections, so a reader holding the lock always sees a consistent tick.
#[derive(Debug)]
pub struct DashboardState {
    pub drones: Vec<Drone>,
    pub waypoints: Vec<Waypoint>,
    pub alerts: Vec<Alert>,
    pub missions: Vec<Mission>,
    pub selected_drone: Option<String>,
    pub operation: OperationStatus,
    pub view: ActiveView,
    pub system_health: u8,
    pub gps: GpsStatus,
    pub sound_enabled: bool,
    telemetry_ticks: u64,
    gps_ticks: u64,
    rng: Rng,
}

impl DashboardState {
    /// Fixture-backed state. A seed makes every random draw replayable.
    pub fn new(seed: Option<u64>) -> Self {
        let now = Utc::now();
        let rng = match seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };
        Self {
            drones: fixtures::drones(),
            waypoints: fixtures::waypoints(),
            alerts: fixtures::alerts(now),
            missions: fixtures::missions(),
            selected_drone: None,
            operation: OperationStatus::default(),
            view: ActiveView::default(),
            system_health: SYSTEM_HEALTH,
            gps: GpsStatus::new(now),
            sound_enabled: true,
            telemetry_ticks: 0,
            gps_ticks: 0,
            rng,
        }
    }

    pub fn shared(self) -> SharedDashboard {
        Arc::new(Mutex::new(self))
    }

    pub fn telemetry_ticks(&self) -> u64 {
        self.telemetry_ticks
    }

    pub fn gps_ticks(&self) -> u64 {
        self.gps_ticks
    }

    pub fn apply_telemetry_tick(&mut self) {
        self.drones = advance_telemetry(&self.drones, &mut self.rng);
        self.telemetry_ticks += 1;
    }

    pub fn apply_gps_tick(&mut self, now: DateTime<Utc>) {
        self.gps = advance_gps_status(&self.gps, &mut self.rng, now);
        self.gps_ticks += 1;
    }

    pub fn drone(&self, id: &str) -> Result<&Drone, FleetError> {
        self.drones
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| FleetError::DroneNotFound(id.to_string()))
    }

    /// `None` clears the selection. Unknown ids leave it unchanged.
    pub fn select_drone(&mut self, id: Option<&str>) -> Result<(), FleetError> {
        match id {
            Some(id) => {
                self.drone(id)?;
                self.selected_drone = Some(id.to_string());
            }
            None => self.selected_drone = None,
        }
        Ok(())
    }

    pub fn selected(&self) -> Option<&Drone> {
        self.selected_drone
            .as_deref()
            .and_then(|id| self.drones.iter().find(|d| d.id == id))
    }

    pub fn sample_readout(&mut self) -> TelemetryReadout {
        TelemetryReadout::sample(&mut self.rng)
    }

    /// Returns whether the draft produced a new waypoint.
    pub fn add_waypoint(&mut self, draft: &WaypointDraft) -> bool {
        let next = waypoint::add_waypoint(&self.waypoints, draft);
        let added = next.len() > self.waypoints.len();
        self.waypoints = next;
        added
    }

    pub fn remove_waypoint(&mut self, id: &str) -> Result<(), FleetError> {
        self.waypoints = waypoint::remove_waypoint(&self.waypoints, id)?;
        Ok(())
    }

    pub fn acknowledge_alert(&mut self, id: &str) -> Result<(), FleetError> {
        self.alerts = alert::acknowledge(&self.alerts, id)?;
        Ok(())
    }

    pub fn dismiss_alert(&mut self, id: &str) -> Result<(), FleetError> {
        self.alerts = alert::dismiss(&self.alerts, id)?;
        Ok(())
    }

    pub fn toggle_operation(&mut self) -> OperationStatus {
        self.operation = self.operation.toggled();
        self.operation
    }

    pub fn set_view(&mut self, view: ActiveView) {
        self.view = view;
    }

    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }

    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary {
            fleet: fleet_summary(&self.drones),
            alerts: alert_summary(&self.alerts),
            missions: mission_progress(&self.missions),
            operation: self.operation,
            system_health: self.system_health,
            telemetry_ticks: self.telemetry_ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::WaypointKind;

    #[test]
    fn starts_from_fixtures() {
        let state = DashboardState::new(Some(0));
        assert_eq!(state.drones.len(), 5);
        assert_eq!(state.waypoints.len(), 3);
        assert_eq!(state.alerts.len(), 4);
        assert_eq!(state.missions.len(), 3);
        assert_eq!(state.selected_drone, None);
        assert_eq!(state.operation, OperationStatus::Active);
        assert_eq!(state.view, ActiveView::Map);
        assert_eq!(state.system_health, 98);
    }

    #[test]
    fn selection_follows_drone_through_ticks() {
        let mut state = DashboardState::new(Some(0));
        state.select_drone(Some("DR-002")).unwrap();
        state.apply_telemetry_tick();
        assert_eq!(state.selected().unwrap().id, "DR-002");

        state.select_drone(None).unwrap();
        assert!(state.selected().is_none());
    }

    #[test]
    fn unknown_selection_is_rejected_and_keeps_previous() {
        let mut state = DashboardState::new(Some(0));
        state.select_drone(Some("DR-001")).unwrap();
        let err = state.select_drone(Some("DR-404")).unwrap_err();
        assert!(matches!(err, FleetError::DroneNotFound(_)));
        assert_eq!(state.selected_drone.as_deref(), Some("DR-001"));
    }

    #[test]
    fn seeded_states_replay_identically() {
        let mut a = DashboardState::new(Some(99));
        let mut b = DashboardState::new(Some(99));
        for _ in 0..10 {
            a.apply_telemetry_tick();
            b.apply_telemetry_tick();
        }
        assert_eq!(a.drones, b.drones);
        assert_eq!(a.telemetry_ticks(), 10);
    }

    #[test]
    fn waypoint_add_reports_noop() {
        let mut state = DashboardState::new(Some(0));
        assert!(!state.add_waypoint(&WaypointDraft::default()));
        assert_eq!(state.waypoints.len(), 3);

        let draft = WaypointDraft {
            name: "Zone X".into(),
            lat: "10.0".into(),
            lng: "20.0".into(),
            alt: "50".into(),
            kind: WaypointKind::Target,
        };
        assert!(state.add_waypoint(&draft));
        assert_eq!(state.waypoints.len(), 4);
        assert_eq!(state.waypoints[3].order, 4);
    }

    #[test]
    fn summary_reads_do_not_mutate() {
        let state = DashboardState::new(Some(0));
        let first = state.summary();
        let second = state.summary();
        assert_eq!(first, second);
        assert_eq!(first.alerts.unacknowledged, 2);
        assert_eq!(first.fleet.active, 3);
    }

    #[test]
    fn alert_actions_update_summary() {
        let mut state = DashboardState::new(Some(0));
        state.acknowledge_alert("ALT-004").unwrap();
        assert_eq!(state.summary().alerts.unacknowledged, 1);
        state.dismiss_alert("ALT-001").unwrap();
        assert_eq!(state.summary().alerts.unacknowledged, 0);
        assert_eq!(state.summary().alerts.total, 3);
    }

    #[test]
    fn toggles() {
        let mut state = DashboardState::new(Some(0));
        assert_eq!(state.toggle_operation(), OperationStatus::Paused);
        assert_eq!(state.toggle_operation(), OperationStatus::Active);
        assert!(!state.toggle_sound());
        state.set_view(ActiveView::Gps);
        assert_eq!(state.view, ActiveView::Gps);
    }
}
