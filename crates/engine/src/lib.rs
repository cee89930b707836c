//! Telemetry simulation and threshold-alarm engine.
//!
//! A background service that, on a fixed cadence, synthesizes one reading
//! per configured sensor, persists it, evaluates it against the sensor's
//! limits, and records an alarm on every breach. The storage layer is
//! reached only through the [`TelemetryStore`] trait so tests can run the
//! engine against an in-memory store.

pub mod simulator;
pub mod store;

pub use simulator::{Simulator, DEFAULT_TICK_INTERVAL};
pub use store::{PgTelemetryStore, TelemetryStore};
