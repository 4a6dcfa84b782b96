use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dashboard::DashboardSummary;
use crate::fleet::Drone;
use crate::telemetry::{format_coordinate, Axis, GpsStatus, TelemetryReadout};
use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct DroneDetailResponse {
    pub drone: Drone,
    pub readout: TelemetryReadout,
    pub latitude_dms: String,
    pub longitude_dms: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Selection {
    pub drone_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/drones",
    tag = "fleet",
    responses(
        (status = 200, description = "Current fleet telemetry", body = Vec<Drone>)
    )
)]
pub async fn list_drones(State(state): State<AppState>) -> Json<Vec<Drone>> {
    let dashboard = state.dashboard.lock().await;
    Json(dashboard.drones.clone())
}

#[utoipa::path(
    get,
    path = "/api/drones/{id}",
    tag = "fleet",
    params(
        ("id" = String, Path, description = "Drone ID")
    ),
    responses(
        (status = 200, description = "Drone with a fresh telemetry readout", body = DroneDetailResponse),
        (status = 404, description = "Drone not found", body = ErrorResponse)
    )
)]
pub async fn get_drone(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DroneDetailResponse>> {
    let mut dashboard = state.dashboard.lock().await;
    let drone = dashboard.drone(&id)?.clone();
    let readout = dashboard.sample_readout();

    Ok(Json(DroneDetailResponse {
        latitude_dms: format_coordinate(drone.position.lat, Axis::Latitude),
        longitude_dms: format_coordinate(drone.position.lng, Axis::Longitude),
        drone,
        readout,
    }))
}

#[utoipa::path(
    get,
    path = "/api/selection",
    tag = "fleet",
    responses(
        (status = 200, description = "Currently selected drone", body = Selection)
    )
)]
pub async fn get_selection(State(state): State<AppState>) -> Json<Selection> {
    let dashboard = state.dashboard.lock().await;
    Json(Selection {
        drone_id: dashboard.selected_drone.clone(),
    })
}

#[utoipa::path(
    put,
    path = "/api/selection",
    tag = "fleet",
    request_body = Selection,
    responses(
        (status = 200, description = "Selection updated", body = Selection),
        (status = 404, description = "Drone not found", body = ErrorResponse)
    )
)]
pub async fn put_selection(
    State(state): State<AppState>,
    Json(request): Json<Selection>,
) -> ApiResult<Json<Selection>> {
    let mut dashboard = state.dashboard.lock().await;
    dashboard.select_drone(request.drone_id.as_deref())?;
    log::info!("Selected drone: {:?}", dashboard.selected_drone);
    Ok(Json(Selection {
        drone_id: dashboard.selected_drone.clone(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/summary",
    tag = "fleet",
    responses(
        (status = 200, description = "Derived fleet, alert and mission counts", body = DashboardSummary)
    )
)]
pub async fn summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    let dashboard = state.dashboard.lock().await;
    Json(dashboard.summary())
}

#[utoipa::path(
    get,
    path = "/api/gps",
    tag = "fleet",
    responses(
        (status = 200, description = "Simulated receiver status", body = GpsStatus)
    )
)]
pub async fn gps_status(State(state): State<AppState>) -> Json<GpsStatus> {
    let dashboard = state.dashboard.lock().await;
    Json(dashboard.gps.clone())
}
