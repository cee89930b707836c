//! Repository for the `bridges` table.

use bridgewatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::bridge::{Bridge, CreateBridge, UpdateBridge};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, lng, lat, image_url, status, created_at";

/// Provides CRUD operations for bridges.
pub struct BridgeRepo;

impl BridgeRepo {
    /// Insert a new bridge, returning the created row.
    ///
    /// If `status` is `None`, defaults to `'normal'`.
    pub async fn create(pool: &PgPool, input: &CreateBridge) -> Result<Bridge, sqlx::Error> {
        let query = format!(
            "INSERT INTO bridges (name, lng, lat, image_url, status)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'normal'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bridge>(&query)
            .bind(&input.name)
            .bind(input.lng)
            .bind(input.lat)
            .bind(&input.image_url)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// List all bridges, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Bridge>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bridges ORDER BY id");
        sqlx::query_as::<_, Bridge>(&query).fetch_all(pool).await
    }

    /// Find a bridge by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Bridge>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bridges WHERE id = $1");
        sqlx::query_as::<_, Bridge>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a bridge. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBridge,
    ) -> Result<Option<Bridge>, sqlx::Error> {
        let query = format!(
            "UPDATE bridges SET
                name = COALESCE($2, name),
                lng = COALESCE($3, lng),
                lat = COALESCE($4, lat),
                image_url = COALESCE($5, image_url),
                status = COALESCE($6, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bridge>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.lng)
            .bind(input.lat)
            .bind(&input.image_url)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a bridge (cascades to sections, sensors, and telemetry).
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bridges WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
