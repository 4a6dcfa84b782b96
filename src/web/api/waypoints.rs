use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::fleet::waypoint::{route_legs, sorted_by_order};
use crate::fleet::{RouteLeg, Waypoint, WaypointDraft};
use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::state::AppState;

#[utoipa::path(
    get,
    path = "/api/waypoints",
    tag = "waypoints",
    responses(
        (status = 200, description = "Waypoints sorted by order", body = Vec<Waypoint>)
    )
)]
pub async fn list_waypoints(State(state): State<AppState>) -> Json<Vec<Waypoint>> {
    let dashboard = state.dashboard.lock().await;
    Json(sorted_by_order(&dashboard.waypoints))
}

/// Incomplete drafts are ignored rather than rejected: the response is the
/// unchanged list with `200` instead of `201`.
#[utoipa::path(
    post,
    path = "/api/waypoints",
    tag = "waypoints",
    request_body = WaypointDraft,
    responses(
        (status = 201, description = "Waypoint appended", body = Vec<Waypoint>),
        (status = 200, description = "Draft incomplete, nothing added", body = Vec<Waypoint>)
    )
)]
pub async fn add_waypoint(
    State(state): State<AppState>,
    Json(draft): Json<WaypointDraft>,
) -> impl IntoResponse {
    let mut dashboard = state.dashboard.lock().await;
    let status = if dashboard.add_waypoint(&draft) {
        log::info!("Added waypoint '{}'", draft.name.trim());
        StatusCode::CREATED
    } else {
        log::debug!("Ignored incomplete waypoint draft");
        StatusCode::OK
    };
    (status, Json(dashboard.waypoints.clone()))
}

#[utoipa::path(
    delete,
    path = "/api/waypoints/{id}",
    tag = "waypoints",
    params(
        ("id" = String, Path, description = "Waypoint ID")
    ),
    responses(
        (status = 204, description = "Waypoint deleted"),
        (status = 404, description = "Waypoint not found", body = ErrorResponse)
    )
)]
pub async fn delete_waypoint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let mut dashboard = state.dashboard.lock().await;
    dashboard.remove_waypoint(&id)?;
    log::info!("Deleted waypoint {}", id);
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/waypoints/route",
    tag = "waypoints",
    responses(
        (status = 200, description = "Legs between consecutively ordered waypoints", body = Vec<RouteLeg>)
    )
)]
pub async fn route(State(state): State<AppState>) -> Json<Vec<RouteLeg>> {
    let dashboard = state.dashboard.lock().await;
    Json(route_legs(&dashboard.waypoints))
}
