//! Repository for the `sensor_readings` table (append-only time-series).

use bridgewatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::reading::{Reading, ReadingPoint};

const COLUMNS: &str = "id, sensor_id, sensor_code, value, created_at";

/// Provides insert and history queries for sensor readings.
pub struct ReadingRepo;

impl ReadingRepo {
    /// Append one reading with a server-assigned timestamp.
    pub async fn insert(
        pool: &PgPool,
        sensor_id: DbId,
        sensor_code: &str,
        value: f64,
    ) -> Result<Reading, sqlx::Error> {
        let query = format!(
            "INSERT INTO sensor_readings (sensor_id, sensor_code, value)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reading>(&query)
            .bind(sensor_id)
            .bind(sensor_code)
            .bind(value)
            .fetch_one(pool)
            .await
    }

    /// The most recent `limit` readings for a sensor code, oldest first.
    ///
    /// Fetches newest-first for the index, then reverses so charts read
    /// left to right.
    pub async fn history_by_code(
        pool: &PgPool,
        sensor_code: &str,
        limit: i64,
    ) -> Result<Vec<ReadingPoint>, sqlx::Error> {
        let mut rows = sqlx::query_as::<_, ReadingPoint>(
            "SELECT value, created_at FROM sensor_readings
             WHERE sensor_code = $1
             ORDER BY created_at DESC
             LIMIT $2",
        )
        .bind(sensor_code)
        .bind(limit)
        .fetch_all(pool)
        .await?;
        rows.reverse();
        Ok(rows)
    }
}
