use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "title_case")]
pub enum DroneStatus {
    Active,
    Standby,
    Maintenance,
    Offline,
}

impl DroneStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, DroneStatus::Active)
    }

    /// CSS modifier used by the dashboard templates.
    pub fn css_class(&self) -> &'static str {
        match self {
            DroneStatus::Active => "status-active",
            DroneStatus::Standby => "status-standby",
            DroneStatus::Maintenance => "status-maintenance",
            DroneStatus::Offline => "status-offline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
    /// Meters above mean sea level.
    pub alt: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Drone {
    pub id: String,
    pub name: String,
    pub status: DroneStatus,
    pub position: Position,
    pub battery: f64,
    pub signal: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formation: Option<String>,
}

/// Three-band classification shared by battery and signal gauges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Level {
    Good,
    Fair,
    Low,
}

const LOW_BATTERY_WARNING: f64 = 20.0;

impl Drone {
    pub fn battery_level(&self) -> Level {
        if self.battery > 60.0 {
            Level::Good
        } else if self.battery > 30.0 {
            Level::Fair
        } else {
            Level::Low
        }
    }

    pub fn signal_level(&self) -> Level {
        if self.signal > 80.0 {
            Level::Good
        } else if self.signal > 50.0 {
            Level::Fair
        } else {
            Level::Low
        }
    }

    /// Idle drones running low get flagged in the fleet list; active ones
    /// show their active marker instead.
    pub fn needs_battery_warning(&self) -> bool {
        !self.status.is_active() && self.battery < LOW_BATTERY_WARNING
    }

    pub fn is_gps_connected(&self) -> bool {
        self.status != DroneStatus::Offline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drone(status: DroneStatus, battery: f64, signal: f64) -> Drone {
        Drone {
            id: "DR-T".into(),
            name: "Test".into(),
            status,
            position: Position {
                lat: 0.0,
                lng: 0.0,
                alt: 0.0,
            },
            battery,
            signal,
            mission: None,
            formation: None,
        }
    }

    #[test]
    fn battery_bands_use_strict_thresholds() {
        assert_eq!(drone(DroneStatus::Active, 61.0, 0.0).battery_level(), Level::Good);
        assert_eq!(drone(DroneStatus::Active, 60.0, 0.0).battery_level(), Level::Fair);
        assert_eq!(drone(DroneStatus::Active, 30.0, 0.0).battery_level(), Level::Low);
    }

    #[test]
    fn signal_bands_use_strict_thresholds() {
        assert_eq!(drone(DroneStatus::Active, 0.0, 81.0).signal_level(), Level::Good);
        assert_eq!(drone(DroneStatus::Active, 0.0, 80.0).signal_level(), Level::Fair);
        assert_eq!(drone(DroneStatus::Active, 0.0, 50.0).signal_level(), Level::Low);
    }

    #[test]
    fn battery_warning_only_for_idle_drones() {
        assert!(!drone(DroneStatus::Active, 5.0, 90.0).needs_battery_warning());
        assert!(drone(DroneStatus::Standby, 19.9, 90.0).needs_battery_warning());
        assert!(!drone(DroneStatus::Maintenance, 20.0, 90.0).needs_battery_warning());
    }

    #[test]
    fn status_serializes_snake_case_and_displays_title_case() {
        let json = serde_json::to_string(&DroneStatus::Maintenance).unwrap();
        assert_eq!(json, "\"maintenance\"");
        assert_eq!(DroneStatus::Maintenance.to_string(), "Maintenance");
    }
}
