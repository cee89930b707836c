//! Operation audit log entity model.

use bridgewatch_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// One audit log row (logins, alarm handling, configuration changes).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditLog {
    pub id: DbId,
    /// Null when the acting user has since been deleted.
    pub user_id: Option<DbId>,
    pub username: String,
    pub action: String,
    pub ip_addr: Option<String>,
    pub details: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for appending an audit log row.
#[derive(Debug, Clone)]
pub struct CreateAuditLog {
    pub user_id: Option<DbId>,
    pub username: String,
    pub action: String,
    pub ip_addr: Option<String>,
    pub details: Option<String>,
}
