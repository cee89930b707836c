//! Aggregate view models for the dashboard endpoints.

use bridgewatch_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::bridge::Bridge;
use crate::models::section::Section;
use crate::models::sensor::Sensor;

/// Headline counters for the dashboard overview.
#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    pub bridge_count: i64,
    pub sensor_count: i64,
    /// Sensors with at least one reading in the last hour.
    pub online_sensors: i64,
    /// `online_sensors / sensor_count` as a percentage, one decimal.
    pub online_rate: f64,
    pub today_alarms: i64,
    pub unhandled_alarms: i64,
}

/// A bridge with its sections and their sensors, for the structure tree.
#[derive(Debug, Clone, Serialize)]
pub struct BridgeNode {
    #[serde(flatten)]
    pub bridge: Bridge,
    pub sections: Vec<SectionNode>,
}

/// A section with its sensors.
#[derive(Debug, Clone, Serialize)]
pub struct SectionNode {
    #[serde(flatten)]
    pub section: Section,
    pub sensors: Vec<Sensor>,
}

/// One row of the realtime board: a sensor plus its latest reading.
///
/// `value` / `reported_at` are null for sensors that have never reported.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RealtimeRow {
    pub sensor_id: DbId,
    pub sensor_code: String,
    pub sensor_name: String,
    pub sensor_type: String,
    pub unit: Option<String>,
    pub limit_max: Option<f64>,
    pub limit_min: Option<f64>,
    pub section_name: String,
    pub bridge_name: String,
    pub value: Option<f64>,
    pub reported_at: Option<Timestamp>,
}
