use fastrand::Rng;
use serde::Serialize;
use strum_macros::Display;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

/// Degrees/minutes/seconds with a hemisphere letter, e.g. `37°46'29.64"N`.
pub fn format_coordinate(value: f64, axis: Axis) -> String {
    let abs = value.abs();
    let degrees = abs.floor();
    let minutes = ((abs - degrees) * 60.0).floor();
    let seconds = (abs - degrees - minutes / 60.0) * 3600.0;
    let direction = match (axis, value >= 0.0) {
        (Axis::Latitude, true) => 'N',
        (Axis::Latitude, false) => 'S',
        (Axis::Longitude, true) => 'E',
        (Axis::Longitude, false) => 'W',
    };
    format!(
        "{}°{}'{:.2}\"{}",
        degrees as u32, minutes as u32, seconds, direction
    )
}

/// `H:MM`
pub fn format_flight_time(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{}:{:02}", hours, minutes)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, ToSchema)]
pub enum GpsQuality {
    Excellent,
    Good,
    Poor,
}

impl GpsQuality {
    pub fn from_accuracy(accuracy_m: f64) -> Self {
        if accuracy_m < 2.0 {
            GpsQuality::Excellent
        } else if accuracy_m < 5.0 {
            GpsQuality::Good
        } else {
            GpsQuality::Poor
        }
    }
}

/// Secondary telemetry for the detail panel. None of these values come from
/// the drone record; they are drawn fresh for every readout.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TelemetryReadout {
    pub speed_m_s: f64,
    pub heading_deg: f64,
    pub temperature_c: f64,
    pub wind_speed_m_s: f64,
    pub vibration: f64,
    pub flight_time_s: u32,
    pub gps_accuracy_m: f64,
    pub gps_quality: GpsQuality,
    pub satellite_count: u32,
    pub hdop: f64,
    pub ground_speed_m_s: f64,
    pub vertical_speed_m_s: f64,
}

fn uniform(rng: &mut Rng, low: f64, high: f64) -> f64 {
    low + rng.f64() * (high - low)
}

impl TelemetryReadout {
    pub fn sample(rng: &mut Rng) -> Self {
        let gps_accuracy_m = uniform(rng, 1.0, 4.0);
        Self {
            speed_m_s: uniform(rng, 10.0, 30.0),
            heading_deg: uniform(rng, 0.0, 360.0),
            temperature_c: uniform(rng, 15.0, 25.0),
            wind_speed_m_s: uniform(rng, 2.0, 7.0),
            vibration: uniform(rng, 0.1, 0.6),
            flight_time_s: rng.u32(1800..5400),
            gps_accuracy_m,
            gps_quality: GpsQuality::from_accuracy(gps_accuracy_m),
            satellite_count: rng.u32(8..16),
            hdop: uniform(rng, 0.5, 2.5),
            ground_speed_m_s: uniform(rng, 8.0, 26.0),
            vertical_speed_m_s: uniform(rng, -2.0, 2.0),
        }
    }

    pub fn flight_time(&self) -> String {
        format_flight_time(self.flight_time_s)
    }

    /// Signed with an explicit `+` for climbs.
    pub fn vertical_speed(&self) -> String {
        if self.vertical_speed_m_s > 0.0 {
            format!("+{:.1}", self.vertical_speed_m_s)
        } else {
            format!("{:.1}", self.vertical_speed_m_s)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_dms_with_hemisphere() {
        assert_eq!(format_coordinate(37.7749, Axis::Latitude), "37°46'29.64\"N");
        assert_eq!(format_coordinate(-122.4194, Axis::Longitude), "122°25'9.84\"W");
        assert_eq!(format_coordinate(-0.5, Axis::Latitude), "0°30'0.00\"S");
        assert_eq!(format_coordinate(0.0, Axis::Longitude), "0°0'0.00\"E");
    }

    #[test]
    fn flight_time_pads_minutes() {
        assert_eq!(format_flight_time(1800), "0:30");
        assert_eq!(format_flight_time(3600 + 5 * 60 + 59), "1:05");
    }

    #[test]
    fn quality_thresholds() {
        assert_eq!(GpsQuality::from_accuracy(1.99), GpsQuality::Excellent);
        assert_eq!(GpsQuality::from_accuracy(2.0), GpsQuality::Good);
        assert_eq!(GpsQuality::from_accuracy(5.0), GpsQuality::Poor);
    }

    #[test]
    fn sampled_readout_ranges() {
        let mut rng = Rng::with_seed(3);
        for _ in 0..200 {
            let r = TelemetryReadout::sample(&mut rng);
            assert!((10.0..30.0).contains(&r.speed_m_s));
            assert!((0.0..360.0).contains(&r.heading_deg));
            assert!((1800..5400).contains(&r.flight_time_s));
            assert!((1.0..4.0).contains(&r.gps_accuracy_m));
            assert_ne!(r.gps_quality, GpsQuality::Poor);
            assert!((8..16).contains(&r.satellite_count));
            assert!((-2.0..2.0).contains(&r.vertical_speed_m_s));
        }
    }
}
