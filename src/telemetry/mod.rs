mod gps;
mod readout;
mod simulator;
mod ticker;

pub use gps::{advance_gps_status, FixType, GpsStatus};
pub use readout::{format_coordinate, Axis, GpsQuality, TelemetryReadout};
pub use simulator::advance_telemetry;
pub use ticker::{TelemetryTicker, TickerConfig};
