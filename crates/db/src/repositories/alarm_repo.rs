//! Repository for the `alarms` table.

use bridgewatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::alarm::{Alarm, AlarmDetail};

const COLUMNS: &str = "id, sensor_id, value, message, is_handled, created_at";

/// Provides insert, list, and handling operations for alarms.
pub struct AlarmRepo;

impl AlarmRepo {
    /// Append one alarm with `is_handled = false` and a server-assigned
    /// timestamp.
    pub async fn insert(
        pool: &PgPool,
        sensor_id: DbId,
        value: f64,
        message: &str,
    ) -> Result<Alarm, sqlx::Error> {
        let query = format!(
            "INSERT INTO alarms (sensor_id, value, message)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Alarm>(&query)
            .bind(sensor_id)
            .bind(value)
            .bind(message)
            .fetch_one(pool)
            .await
    }

    /// The most recent alarms joined with sensor and bridge names.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<AlarmDetail>, sqlx::Error> {
        let query = "\
            SELECT a.id, a.sensor_id, a.value, a.message, a.is_handled, a.created_at, \
                   s.sensor_code, s.sensor_name, b.name AS bridge_name \
            FROM alarms a \
            JOIN sensors s ON a.sensor_id = s.id \
            JOIN sections sec ON s.section_id = sec.id \
            JOIN bridges b ON sec.bridge_id = b.id \
            ORDER BY a.created_at DESC \
            LIMIT $1";
        sqlx::query_as::<_, AlarmDetail>(query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Mark an alarm handled. Returns the updated row, or `None` if no
    /// alarm with the given `id` exists.
    pub async fn mark_handled(pool: &PgPool, id: DbId) -> Result<Option<Alarm>, sqlx::Error> {
        let query = format!(
            "UPDATE alarms SET is_handled = true
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Alarm>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
