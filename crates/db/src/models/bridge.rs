//! Bridge entity model and DTOs.

use bridgewatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A monitored bridge.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Bridge {
    pub id: DbId,
    pub name: String,
    /// Longitude of the map marker.
    pub lng: f64,
    /// Latitude of the map marker.
    pub lat: f64,
    pub image_url: Option<String>,
    /// Display status, e.g. `"normal"` or `"maintenance"`.
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for creating a bridge.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBridge {
    pub name: String,
    pub lng: f64,
    pub lat: f64,
    pub image_url: Option<String>,
    pub status: Option<String>,
}

/// DTO for updating a bridge. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBridge {
    pub name: Option<String>,
    pub lng: Option<f64>,
    pub lat: Option<f64>,
    pub image_url: Option<String>,
    pub status: Option<String>,
}
