//! Handlers for the operation audit log.

use axum::extract::State;
use axum::Json;
use bridgewatch_db::models::audit::AuditLog;
use bridgewatch_db::repositories::AuditLogRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// How many audit rows the list endpoint returns.
const AUDIT_LOG_LIMIT: i64 = 100;

/// GET /api/v1/audit/logs
///
/// The most recent operation log entries, newest first.
pub async fn list_logs(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<AuditLog>>>> {
    let logs = AuditLogRepo::list_recent(&state.pool, AUDIT_LOG_LIMIT).await?;
    Ok(Json(DataResponse { data: logs }))
}
