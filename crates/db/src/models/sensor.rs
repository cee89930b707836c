//! Sensor entity model and DTOs.
//!
//! The `sensor_type` column stays a plain string at this layer; the
//! engine maps it onto [`bridgewatch_core::sensor::SensorType`] when it
//! picks a synthesis profile.

use bridgewatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A configured sensor, including its alarm thresholds.
///
/// `limit_max` / `limit_min` may each be unset; the threshold evaluator
/// treats an unset bound as open. Nothing here guarantees
/// `limit_min < limit_max` when both are set.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Sensor {
    pub id: DbId,
    pub section_id: DbId,
    pub sensor_code: String,
    pub sensor_name: String,
    pub sensor_type: String,
    pub unit: Option<String>,
    pub limit_max: Option<f64>,
    pub limit_min: Option<f64>,
    pub created_at: Timestamp,
}

/// DTO for creating a sensor.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSensor {
    pub section_id: DbId,
    pub sensor_code: String,
    pub sensor_name: String,
    pub sensor_type: String,
    pub unit: Option<String>,
    pub limit_max: Option<f64>,
    pub limit_min: Option<f64>,
}

/// DTO for replacing a sensor's configuration (PUT semantics).
///
/// Limits are replaced wholesale so a bound can be cleared by sending
/// `null`. Threshold edits take effect on the engine's next tick; the
/// registry snapshot is re-read every tick, so no signaling is needed.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSensor {
    pub sensor_name: String,
    pub sensor_type: String,
    pub unit: Option<String>,
    pub limit_max: Option<f64>,
    pub limit_min: Option<f64>,
}
