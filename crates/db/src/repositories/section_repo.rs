//! Repository for the `sections` table.

use bridgewatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::section::{CreateSection, Section, UpdateSection};

const COLUMNS: &str = "id, bridge_id, name, created_at";

/// Provides CRUD operations for bridge sections.
pub struct SectionRepo;

impl SectionRepo {
    /// Insert a new section under a bridge, returning the created row.
    pub async fn create(
        pool: &PgPool,
        bridge_id: DbId,
        input: &CreateSection,
    ) -> Result<Section, sqlx::Error> {
        let query = format!(
            "INSERT INTO sections (bridge_id, name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(bridge_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// List sections of a bridge, oldest first.
    pub async fn list_by_bridge(
        pool: &PgPool,
        bridge_id: DbId,
    ) -> Result<Vec<Section>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sections WHERE bridge_id = $1 ORDER BY id");
        sqlx::query_as::<_, Section>(&query)
            .bind(bridge_id)
            .fetch_all(pool)
            .await
    }

    /// Find a section by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Section>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sections WHERE id = $1");
        sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a section. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSection,
    ) -> Result<Option<Section>, sqlx::Error> {
        let query = format!(
            "UPDATE sections SET name = COALESCE($2, name)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a section (cascades to its sensors and their telemetry).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sections WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
