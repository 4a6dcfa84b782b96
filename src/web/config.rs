use serde::{Deserialize, Deserializer};
use std::time::Duration;
use thiserror::Error;

use crate::telemetry::TickerConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("{0} must be greater than zero")]
    ZeroInterval(&'static str),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    #[serde(
        default = "default_telemetry_interval",
        deserialize_with = "deserialize_duration"
    )]
    pub telemetry_interval: Duration,
    #[serde(
        default = "default_gps_interval",
        deserialize_with = "deserialize_duration"
    )]
    pub gps_interval: Duration,
    /// Fixed seed for replayable runs; fresh entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            telemetry_interval: default_telemetry_interval(),
            gps_interval: default_gps_interval(),
            seed: None,
        }
    }
}

fn default_telemetry_interval() -> Duration {
    TickerConfig::default().telemetry_interval
}

fn default_gps_interval() -> Duration {
    TickerConfig::default().gps_interval
}

impl SimulationConfig {
    pub fn ticker_config(&self) -> TickerConfig {
        TickerConfig {
            telemetry_interval: self.telemetry_interval,
            gps_interval: self.gps_interval,
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.telemetry_interval.is_zero() {
            return Err(ConfigError::ZeroInterval("simulation.telemetry_interval"));
        }
        if self.simulation.gps_interval.is_zero() {
            return Err(ConfigError::ZeroInterval("simulation.gps_interval"));
        }
        Ok(())
    }
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    humantime::parse_duration(s.trim()).map_err(serde::de::Error::custom)
}
