//! The tick driver.
//!
//! [`Simulator`] owns its schedule and random state, and runs as a
//! background task until its [`CancellationToken`] fires. Each tick:
//! registry snapshot -> per sensor: synthesize -> persist reading ->
//! evaluate thresholds -> persist alarm on breach.
//!
//! Failure containment: a failed registry read skips the whole tick; a
//! failed write skips that sensor only. Nothing here terminates the task.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio_util::sync::CancellationToken;

use bridgewatch_core::sensor::SensorType;
use bridgewatch_core::synthesis::synthesize_value;
use bridgewatch_core::thresholds;
use bridgewatch_db::models::sensor::Sensor;

use crate::store::TelemetryStore;

/// Default interval between simulation ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(10);

/// Periodic telemetry generator and threshold-alarm engine.
///
/// Construct with a store and interval, then hand it to `tokio::spawn`
/// via [`Simulator::run`]. The RNG is injected so tests can seed it;
/// [`Simulator::new`] seeds from the OS.
pub struct Simulator<S> {
    store: S,
    interval: Duration,
    rng: StdRng,
}

impl<S: TelemetryStore> Simulator<S> {
    /// Create a simulator with an OS-seeded random generator.
    pub fn new(store: S, interval: Duration) -> Self {
        Self::with_rng(store, interval, StdRng::from_os_rng())
    }

    /// Create a simulator with a caller-supplied (e.g. seeded) generator.
    pub fn with_rng(store: S, interval: Duration, rng: StdRng) -> Self {
        Self {
            store,
            interval,
            rng,
        }
    }

    /// Run the simulation loop until `cancel` fires.
    ///
    /// Cancellation is only observed between ticks, so an in-flight tick
    /// always finishes its current sweep before the task exits.
    pub async fn run(mut self, cancel: CancellationToken) {
        tracing::info!(
            interval_secs = self.interval.as_secs(),
            "Telemetry simulator started"
        );

        let mut interval = tokio::time::interval(self.interval);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Telemetry simulator stopping");
                    break;
                }
                _ = interval.tick() => {
                    self.run_tick().await;
                }
            }
        }
    }

    /// Execute one full sweep over the sensor registry.
    ///
    /// Public so tests can drive ticks directly without the timer.
    pub async fn run_tick(&mut self) {
        let sensors = match self.store.list_sensors().await {
            Ok(sensors) => sensors,
            Err(e) => {
                tracing::error!(error = %e, "Sensor registry read failed; skipping tick");
                return;
            }
        };

        for sensor in &sensors {
            self.process_sensor(sensor).await;
        }

        tracing::debug!(sensor_count = sensors.len(), "Simulation tick complete");
    }

    /// Synthesize, persist, and evaluate one sensor.
    ///
    /// The reading write must land before threshold evaluation; if it
    /// fails, the sensor is skipped for this tick and no alarm is
    /// attempted.
    async fn process_sensor(&mut self, sensor: &Sensor) {
        let sensor_type = SensorType::parse(&sensor.sensor_type);
        let value = synthesize_value(sensor_type, &mut self.rng);

        if let Err(e) = self
            .store
            .insert_reading(sensor.id, &sensor.sensor_code, value)
            .await
        {
            tracing::error!(
                sensor_code = %sensor.sensor_code,
                error = %e,
                "Failed to persist reading; skipping sensor this tick"
            );
            return;
        }

        let breach = thresholds::evaluate(
            value,
            sensor.limit_max,
            sensor.limit_min,
            &sensor.sensor_name,
            sensor.unit.as_deref(),
        );

        if let Some(message) = breach {
            tracing::warn!(
                sensor_code = %sensor.sensor_code,
                value,
                %message,
                "Threshold breached"
            );
            if let Err(e) = self.store.insert_alarm(sensor.id, value, &message).await {
                tracing::error!(
                    sensor_code = %sensor.sensor_code,
                    error = %e,
                    "Failed to persist alarm"
                );
            }
        }
    }
}
