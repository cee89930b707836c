//! Repository for the `sensors` table.

use bridgewatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::sensor::{CreateSensor, Sensor, UpdateSensor};

const COLUMNS: &str = "\
    id, section_id, sensor_code, sensor_name, sensor_type, \
    unit, limit_max, limit_min, created_at";

/// Provides CRUD operations for sensors.
pub struct SensorRepo;

impl SensorRepo {
    /// Insert a new sensor, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSensor) -> Result<Sensor, sqlx::Error> {
        let query = format!(
            "INSERT INTO sensors
                (section_id, sensor_code, sensor_name, sensor_type, unit, limit_max, limit_min)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sensor>(&query)
            .bind(input.section_id)
            .bind(&input.sensor_code)
            .bind(&input.sensor_name)
            .bind(&input.sensor_type)
            .bind(&input.unit)
            .bind(input.limit_max)
            .bind(input.limit_min)
            .fetch_one(pool)
            .await
    }

    /// List every configured sensor, ordered by id.
    ///
    /// This is the engine's registry snapshot query: it runs once per
    /// tick and must return thresholds alongside identity.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Sensor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sensors ORDER BY id");
        sqlx::query_as::<_, Sensor>(&query).fetch_all(pool).await
    }

    /// List sensors attached to a section, oldest first.
    pub async fn list_by_section(
        pool: &PgPool,
        section_id: DbId,
    ) -> Result<Vec<Sensor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sensors WHERE section_id = $1 ORDER BY id");
        sqlx::query_as::<_, Sensor>(&query)
            .bind(section_id)
            .fetch_all(pool)
            .await
    }

    /// Find a sensor by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Sensor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sensors WHERE id = $1");
        sqlx::query_as::<_, Sensor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace a sensor's configuration (PUT semantics).
    ///
    /// Limits are written directly, not coalesced, so a bound can be
    /// cleared by sending `null`. Returns `None` if no row exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSensor,
    ) -> Result<Option<Sensor>, sqlx::Error> {
        let query = format!(
            "UPDATE sensors SET
                sensor_name = $2,
                sensor_type = $3,
                unit = $4,
                limit_max = $5,
                limit_min = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sensor>(&query)
            .bind(id)
            .bind(&input.sensor_name)
            .bind(&input.sensor_type)
            .bind(&input.unit)
            .bind(input.limit_max)
            .bind(input.limit_min)
            .fetch_optional(pool)
            .await
    }

    /// Delete a sensor (cascades to its readings and alarms).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sensors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
