//! Bridge section entity model and DTOs.

use bridgewatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A monitored cross-section of a bridge. Sensors attach to sections.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Section {
    pub id: DbId,
    pub bridge_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a section under a bridge.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSection {
    pub name: String,
}

/// DTO for updating a section.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSection {
    pub name: Option<String>,
}
