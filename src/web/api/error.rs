use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::fleet::FleetError;

pub enum ApiError {
    NotFound(&'static str, String),
}

impl From<FleetError> for ApiError {
    fn from(e: FleetError) -> Self {
        let reason = match e {
            FleetError::DroneNotFound(_) => "drone_not_found",
            FleetError::WaypointNotFound(_) => "waypoint_not_found",
            FleetError::AlertNotFound(_) => "alert_not_found",
        };
        ApiError::NotFound(reason, e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(reason, message) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::with_message(reason, &message)),
            )
                .into_response(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn with_message(error: &str, message: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: Some(message.to_string()),
        }
    }
}
