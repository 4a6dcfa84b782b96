use axum::{extract::State, Json};

use crate::fleet::{Mission, OperationStatus};
use crate::web::state::AppState;

#[utoipa::path(
    get,
    path = "/api/missions",
    tag = "missions",
    responses(
        (status = 200, description = "Mission list", body = Vec<Mission>)
    )
)]
pub async fn list_missions(State(state): State<AppState>) -> Json<Vec<Mission>> {
    let dashboard = state.dashboard.lock().await;
    Json(dashboard.missions.clone())
}

#[utoipa::path(
    get,
    path = "/api/operation",
    tag = "missions",
    responses(
        (status = 200, description = "Overall operation status", body = OperationStatus)
    )
)]
pub async fn operation_status(State(state): State<AppState>) -> Json<OperationStatus> {
    let dashboard = state.dashboard.lock().await;
    Json(dashboard.operation)
}

#[utoipa::path(
    post,
    path = "/api/operation/toggle",
    tag = "missions",
    responses(
        (status = 200, description = "Operation paused or resumed", body = OperationStatus)
    )
)]
pub async fn toggle_operation(State(state): State<AppState>) -> Json<OperationStatus> {
    let mut dashboard = state.dashboard.lock().await;
    let status = dashboard.toggle_operation();
    log::info!("Operation status changed to {}", status);
    Json(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::api::test_state;

    #[tokio::test]
    async fn toggle_pauses_and_resumes() {
        let state = test_state();
        let Json(status) = toggle_operation(State(state.clone())).await;
        assert_eq!(status, OperationStatus::Paused);
        let Json(status) = operation_status(State(state.clone())).await;
        assert_eq!(status, OperationStatus::Paused);
        let Json(status) = toggle_operation(State(state)).await;
        assert_eq!(status, OperationStatus::Active);
    }

    #[tokio::test]
    async fn lists_fixture_missions() {
        let Json(missions) = list_missions(State(test_state())).await;
        assert_eq!(missions.len(), 3);
        assert_eq!(missions[0].progress, 68);
    }
}
