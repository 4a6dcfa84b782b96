use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MissionKind {
    Search,
    Mapping,
    Surveillance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MissionPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MissionState {
    Active,
    Planned,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Mission {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MissionKind,
    pub priority: MissionPriority,
    pub status: MissionState,
    pub progress: u8,
    pub assigned_drones: u32,
    pub estimated_time: String,
}

impl Mission {
    /// Width of the progress bar, in percent.
    pub fn progress_percent(&self) -> u8 {
        self.progress.min(100)
    }
}

/// Status of the overall operation, driven by the pause/resume control.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OperationStatus {
    Planning,
    #[default]
    Active,
    Paused,
    Completed,
}

impl OperationStatus {
    /// Pause an active operation; anything else resumes it.
    pub fn toggled(self) -> Self {
        match self {
            OperationStatus::Active => OperationStatus::Paused,
            _ => OperationStatus::Active,
        }
    }
}
