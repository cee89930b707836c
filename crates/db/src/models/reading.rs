//! Sensor reading entity model.
//!
//! Readings are append-only: the engine inserts one row per sensor per
//! tick and nothing ever mutates or deletes them.

use bridgewatch_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// One persisted data point for a sensor.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reading {
    pub id: DbId,
    pub sensor_id: DbId,
    /// Denormalized from `sensors.sensor_code` so history queries skip the join.
    pub sensor_code: String,
    pub value: f64,
    pub created_at: Timestamp,
}

/// Trimmed history row for charting: just the value and when it was taken.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReadingPoint {
    pub value: f64,
    pub created_at: Timestamp,
}
