use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;

use super::error::FleetError;

/// Altitude the waypoint form starts with; also used when the field is left
/// blank or cannot be read.
pub const DEFAULT_WAYPOINT_ALT_M: f64 = 150.0;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WaypointKind {
    #[default]
    Checkpoint,
    Target,
    Home,
    Landing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Waypoint {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub alt: f64,
    #[serde(rename = "type")]
    pub kind: WaypointKind,
    pub order: u32,
}

/// Raw waypoint form input. Coordinates stay strings until `parse` so that
/// half-filled forms can be carried around without failing.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct WaypointDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub lng: String,
    #[serde(default)]
    pub alt: String,
    #[serde(rename = "type", default)]
    pub kind: WaypointKind,
}

impl WaypointDraft {
    /// Returns `None` unless name, latitude and longitude are all present and
    /// the coordinates are finite numbers. No range checks are applied.
    pub fn parse(&self, id: String, order: u32) -> Option<Waypoint> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        let lat = parse_number(&self.lat)?;
        let lng = parse_number(&self.lng)?;
        let alt = parse_number(&self.alt).unwrap_or(DEFAULT_WAYPOINT_ALT_M);

        Some(Waypoint {
            id,
            name: name.to_string(),
            lat,
            lng,
            alt,
            kind: self.kind,
            order,
        })
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn generate_id() -> String {
    format!("WP-{}", uuid::Uuid::new_v4().simple())
}

/// Appends the drafted waypoint with `order = len + 1`. An incomplete draft
/// leaves the collection as it was.
pub fn add_waypoint(waypoints: &[Waypoint], draft: &WaypointDraft) -> Vec<Waypoint> {
    let mut next = waypoints.to_vec();
    let order = waypoints.len() as u32 + 1;
    if let Some(waypoint) = draft.parse(generate_id(), order) {
        next.push(waypoint);
    }
    next
}

pub fn remove_waypoint(waypoints: &[Waypoint], id: &str) -> Result<Vec<Waypoint>, FleetError> {
    if !waypoints.iter().any(|w| w.id == id) {
        return Err(FleetError::WaypointNotFound(id.to_string()));
    }
    Ok(waypoints.iter().filter(|w| w.id != id).cloned().collect())
}

/// Stable sort by `order`; ties keep insertion order.
pub fn sorted_by_order(waypoints: &[Waypoint]) -> Vec<Waypoint> {
    let mut sorted = waypoints.to_vec();
    sorted.sort_by_key(|w| w.order);
    sorted
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RouteLeg {
    pub from: String,
    pub to: String,
}

/// Connects each waypoint to the one whose order is exactly one higher.
/// Gaps in the ordering break the route.
pub fn route_legs(waypoints: &[Waypoint]) -> Vec<RouteLeg> {
    let sorted = sorted_by_order(waypoints);
    sorted
        .iter()
        .filter_map(|from| {
            sorted
                .iter()
                .find(|w| w.order == from.order + 1)
                .map(|to| RouteLeg {
                    from: from.id.clone(),
                    to: to.id.clone(),
                })
        })
        .collect()
}
