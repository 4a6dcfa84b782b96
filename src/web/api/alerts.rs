use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::fleet::Alert;
use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::state::AppState;

#[utoipa::path(
    get,
    path = "/api/alerts",
    tag = "alerts",
    responses(
        (status = 200, description = "Alert feed", body = Vec<Alert>)
    )
)]
pub async fn list_alerts(State(state): State<AppState>) -> Json<Vec<Alert>> {
    let dashboard = state.dashboard.lock().await;
    Json(dashboard.alerts.clone())
}

#[utoipa::path(
    post,
    path = "/api/alerts/{id}/acknowledge",
    tag = "alerts",
    params(
        ("id" = String, Path, description = "Alert ID")
    ),
    responses(
        (status = 200, description = "Alert acknowledged", body = Vec<Alert>),
        (status = 404, description = "Alert not found", body = ErrorResponse)
    )
)]
pub async fn acknowledge_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Alert>>> {
    let mut dashboard = state.dashboard.lock().await;
    dashboard.acknowledge_alert(&id)?;
    log::info!("Acknowledged alert {}", id);
    Ok(Json(dashboard.alerts.clone()))
}

#[utoipa::path(
    delete,
    path = "/api/alerts/{id}",
    tag = "alerts",
    params(
        ("id" = String, Path, description = "Alert ID")
    ),
    responses(
        (status = 204, description = "Alert dismissed"),
        (status = 404, description = "Alert not found", body = ErrorResponse)
    )
)]
pub async fn dismiss_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let mut dashboard = state.dashboard.lock().await;
    dashboard.dismiss_alert(&id)?;
    log::info!("Dismissed alert {}", id);
    Ok(StatusCode::NO_CONTENT)
}
