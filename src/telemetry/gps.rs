use chrono::{DateTime, Utc};
use fastrand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

const MIN_ACCURACY_M: f64 = 1.0;
const MAX_ACCURACY_M: f64 = 10.0;
const ACCURACY_STEP_M: f64 = 0.25;
const MIN_SATELLITES: i32 = 8;
const MAX_SATELLITES: i32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum FixType {
    #[serde(rename = "3D")]
    Fix3D,
}

impl FixType {
    pub fn label(&self) -> &'static str {
        match self {
            FixType::Fix3D => "3D",
        }
    }
}

/// Receiver status shown in the GPS navigation view.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct GpsStatus {
    pub accuracy_m: f64,
    pub satellite_count: u32,
    pub fix_type: FixType,
    pub last_update: DateTime<Utc>,
}

impl GpsStatus {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            accuracy_m: 2.5,
            satellite_count: 12,
            fix_type: FixType::Fix3D,
            last_update: now,
        }
    }
}

/// Random-walks accuracy and satellite count. The satellite step is
/// `floor(U(-1, 1))`, so the count only ever holds or drops by one and
/// settles at the floor over time.
pub fn advance_gps_status(status: &GpsStatus, rng: &mut Rng, now: DateTime<Utc>) -> GpsStatus {
    let accuracy_m = (status.accuracy_m + (rng.f64() - 0.5) * 2.0 * ACCURACY_STEP_M)
        .clamp(MIN_ACCURACY_M, MAX_ACCURACY_M);
    let step = ((rng.f64() - 0.5) * 2.0).floor() as i32;
    let satellite_count =
        (status.satellite_count as i32 + step).clamp(MIN_SATELLITES, MAX_SATELLITES) as u32;

    GpsStatus {
        accuracy_m,
        satellite_count,
        fix_type: status.fix_type,
        last_update: now,
    }
}
