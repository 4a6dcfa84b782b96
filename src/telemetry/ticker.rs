use chrono::Utc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::dashboard::SharedDashboard;

#[derive(Debug, Clone, Copy)]
pub struct TickerConfig {
    pub telemetry_interval: Duration,
    pub gps_interval: Duration,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            telemetry_interval: Duration::from_millis(2000),
            gps_interval: Duration::from_millis(5000),
        }
    }
}

#[derive(Debug)]
struct WorkerHandle {
    stop_tx: oneshot::Sender<()>,
    join: JoinHandle<()>,
}

/// Owns the background task that drives the simulators. The task lives
/// exactly as long as the ticker: dropping it stops the timers.
pub struct TelemetryTicker {
    worker: Option<WorkerHandle>,
}

impl TelemetryTicker {
    /// Both intervals must be non-zero.
    pub fn start(state: SharedDashboard, config: TickerConfig) -> Self {
        let (stop_tx, stop_rx) = oneshot::channel();
        let join = tokio::spawn(run_ticker_loop(state, config, stop_rx));

        log::info!(
            "Telemetry ticker started (telemetry every {:?}, gps every {:?})",
            config.telemetry_interval,
            config.gps_interval
        );

        Self {
            worker: Some(WorkerHandle { stop_tx, join }),
        }
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    pub async fn stop(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.stop_tx.send(());
            let _ = worker.join.await;
            log::info!("Telemetry ticker stopped");
        }
    }
}

impl Drop for TelemetryTicker {
    fn drop(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.stop_tx.send(());
        }
    }
}

async fn run_ticker_loop(
    state: SharedDashboard,
    config: TickerConfig,
    mut stop_rx: oneshot::Receiver<()>,
) {
    // First firing is one full period after start, like a plain interval timer.
    let start = Instant::now();
    let mut telemetry = interval_at(
        start + config.telemetry_interval,
        config.telemetry_interval,
    );
    telemetry.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut gps = interval_at(start + config.gps_interval, config.gps_interval);
    gps.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = &mut stop_rx => break,
            _ = telemetry.tick() => {
                let mut locked = state.lock().await;
                locked.apply_telemetry_tick();
                log::debug!("Telemetry tick {}", locked.telemetry_ticks());
            }
            _ = gps.tick() => {
                let mut locked = state.lock().await;
                locked.apply_gps_tick(Utc::now());
                log::debug!(
                    "GPS tick: {} satellites, {:.1}m accuracy",
                    locked.gps.satellite_count,
                    locked.gps.accuracy_m
                );
            }
        }
    }
}
