//! Storage collaborator interface for the simulation engine.
//!
//! The engine owns no persistence. It reads the sensor registry and
//! appends readings/alarms through [`TelemetryStore`]; the production
//! implementation delegates to the repository layer, and engine tests
//! substitute an in-memory mock with fault injection.

use std::sync::Arc;

use async_trait::async_trait;
use bridgewatch_core::types::DbId;
use bridgewatch_db::models::sensor::Sensor;
use bridgewatch_db::repositories::{AlarmRepo, ReadingRepo, SensorRepo};
use bridgewatch_db::DbPool;

/// The three storage operations the engine performs.
#[async_trait]
pub trait TelemetryStore: Send + Sync {
    /// Snapshot the sensor registry (identity, type, unit, thresholds).
    async fn list_sensors(&self) -> Result<Vec<Sensor>, sqlx::Error>;

    /// Append one reading with a server-assigned timestamp.
    async fn insert_reading(
        &self,
        sensor_id: DbId,
        sensor_code: &str,
        value: f64,
    ) -> Result<(), sqlx::Error>;

    /// Append one unhandled alarm with a server-assigned timestamp.
    async fn insert_alarm(
        &self,
        sensor_id: DbId,
        value: f64,
        message: &str,
    ) -> Result<(), sqlx::Error>;
}

/// Forward the store interface through a shared handle so callers can
/// retain a clone of the store while the simulator owns another.
#[async_trait]
impl<T: TelemetryStore + ?Sized> TelemetryStore for Arc<T> {
    async fn list_sensors(&self) -> Result<Vec<Sensor>, sqlx::Error> {
        (**self).list_sensors().await
    }

    async fn insert_reading(
        &self,
        sensor_id: DbId,
        sensor_code: &str,
        value: f64,
    ) -> Result<(), sqlx::Error> {
        (**self).insert_reading(sensor_id, sensor_code, value).await
    }

    async fn insert_alarm(
        &self,
        sensor_id: DbId,
        value: f64,
        message: &str,
    ) -> Result<(), sqlx::Error> {
        (**self).insert_alarm(sensor_id, value, message).await
    }
}

/// Production [`TelemetryStore`] backed by the PostgreSQL repositories.
pub struct PgTelemetryStore {
    pool: DbPool,
}

impl PgTelemetryStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TelemetryStore for PgTelemetryStore {
    async fn list_sensors(&self) -> Result<Vec<Sensor>, sqlx::Error> {
        SensorRepo::list_all(&self.pool).await
    }

    async fn insert_reading(
        &self,
        sensor_id: DbId,
        sensor_code: &str,
        value: f64,
    ) -> Result<(), sqlx::Error> {
        ReadingRepo::insert(&self.pool, sensor_id, sensor_code, value).await?;
        Ok(())
    }

    async fn insert_alarm(
        &self,
        sensor_id: DbId,
        value: f64,
        message: &str,
    ) -> Result<(), sqlx::Error> {
        AlarmRepo::insert(&self.pool, sensor_id, value, message).await?;
        Ok(())
    }
}
