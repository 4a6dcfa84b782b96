use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;

use super::error::FleetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AlertKind {
    Critical,
    Warning,
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub acknowledged: bool,
    pub source: String,
}

pub fn acknowledge(alerts: &[Alert], id: &str) -> Result<Vec<Alert>, FleetError> {
    if !alerts.iter().any(|a| a.id == id) {
        return Err(FleetError::AlertNotFound(id.to_string()));
    }
    Ok(alerts
        .iter()
        .map(|a| {
            let mut a = a.clone();
            if a.id == id {
                a.acknowledged = true;
            }
            a
        })
        .collect())
}

pub fn dismiss(alerts: &[Alert], id: &str) -> Result<Vec<Alert>, FleetError> {
    if !alerts.iter().any(|a| a.id == id) {
        return Err(FleetError::AlertNotFound(id.to_string()));
    }
    Ok(alerts.iter().filter(|a| a.id != id).cloned().collect())
}

/// Coarse relative age: seconds under a minute, minutes under an hour,
/// hours beyond. Future timestamps read as `0s ago`.
pub fn format_age(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = (now - timestamp).num_seconds().max(0);
    if diff < 60 {
        format!("{}s ago", diff)
    } else if diff < 3600 {
        format!("{}m ago", diff / 60)
    } else {
        format!("{}h ago", diff / 3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::fixtures;
    use chrono::Duration;

    #[test]
    fn acknowledge_only_touches_target() {
        let alerts = fixtures::alerts(Utc::now());
        let next = acknowledge(&alerts, "ALT-001").unwrap();
        assert!(next.iter().find(|a| a.id == "ALT-001").unwrap().acknowledged);
        assert!(!next.iter().find(|a| a.id == "ALT-004").unwrap().acknowledged);
        assert_eq!(next.len(), alerts.len());
    }

    #[test]
    fn dismiss_removes_alert() {
        let alerts = fixtures::alerts(Utc::now());
        let next = dismiss(&alerts, "ALT-002").unwrap();
        assert_eq!(next.len(), alerts.len() - 1);
        assert!(next.iter().all(|a| a.id != "ALT-002"));
    }

    #[test]
    fn unknown_alert_is_reported() {
        let alerts = fixtures::alerts(Utc::now());
        assert!(matches!(
            acknowledge(&alerts, "nope"),
            Err(FleetError::AlertNotFound(_))
        ));
        assert!(matches!(dismiss(&alerts, "nope"), Err(FleetError::AlertNotFound(_))));
    }

    #[test]
    fn age_buckets() {
        let now = Utc::now();
        assert_eq!(format_age(now - Duration::seconds(59), now), "59s ago");
        assert_eq!(format_age(now - Duration::seconds(60), now), "1m ago");
        assert_eq!(format_age(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(format_age(now - Duration::seconds(3600), now), "1h ago");
        assert_eq!(format_age(now + Duration::seconds(10), now), "0s ago");
    }
}
