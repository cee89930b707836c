//! Alarm entity model.

use bridgewatch_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A persisted threshold-breach record.
///
/// Created by the engine with `is_handled = false`; only operator-facing
/// code flips the flag. Every breaching tick produces a fresh row; there
/// is no deduplication against earlier alarms for the same sensor.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Alarm {
    pub id: DbId,
    pub sensor_id: DbId,
    /// The reading value that crossed the limit.
    pub value: f64,
    pub message: String,
    pub is_handled: bool,
    pub created_at: Timestamp,
}

/// Alarm joined with sensor and bridge names for list display.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AlarmDetail {
    pub id: DbId,
    pub sensor_id: DbId,
    pub value: f64,
    pub message: String,
    pub is_handled: bool,
    pub created_at: Timestamp,
    pub sensor_code: String,
    pub sensor_name: String,
    pub bridge_name: String,
}
