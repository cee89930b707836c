//! Handlers for telemetry data: reading history and alarms.

use axum::extract::{Path, Query, State};
use axum::Json;
use bridgewatch_core::error::CoreError;
use bridgewatch_core::types::DbId;
use bridgewatch_db::models::alarm::{Alarm, AlarmDetail};
use bridgewatch_db::models::audit::CreateAuditLog;
use bridgewatch_db::models::reading::ReadingPoint;
use bridgewatch_db::repositories::{AlarmRepo, AuditLogRepo, ReadingRepo, UserRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Default / maximum row counts for the history endpoint.
const DEFAULT_HISTORY_LIMIT: i64 = 50;
const MAX_HISTORY_LIMIT: i64 = 500;

/// Default / maximum row counts for the alarm list endpoint.
const DEFAULT_ALARM_LIMIT: i64 = 20;
const MAX_ALARM_LIMIT: i64 = 100;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for the history endpoint.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// Sensor code, e.g. `B1_MID_STR_01`.
    pub code: Option<String>,
    /// How many readings to return (default 50, max 500).
    pub limit: Option<i64>,
}

/// Query parameters for the alarm list endpoint.
#[derive(Debug, Deserialize)]
pub struct AlarmQuery {
    /// How many alarms to return (default 20, max 100).
    pub limit: Option<i64>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/data/history?code=...&limit=...
///
/// The most recent readings for a sensor code, oldest first for charting.
pub async fn sensor_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<DataResponse<Vec<ReadingPoint>>>> {
    let code = query
        .code
        .as_deref()
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::BadRequest("code query parameter is required".to_string()))?;

    let limit = query
        .limit
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .clamp(1, MAX_HISTORY_LIMIT);

    let points = ReadingRepo::history_by_code(&state.pool, code, limit).await?;
    Ok(Json(DataResponse { data: points }))
}

/// GET /api/v1/data/alarms?limit=...
///
/// The most recent alarms, joined with sensor and bridge names.
pub async fn list_alarms(
    State(state): State<AppState>,
    Query(query): Query<AlarmQuery>,
) -> AppResult<Json<DataResponse<Vec<AlarmDetail>>>> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_ALARM_LIMIT)
        .clamp(1, MAX_ALARM_LIMIT);

    let alarms = AlarmRepo::list_recent(&state.pool, limit).await?;
    Ok(Json(DataResponse { data: alarms }))
}

/// POST /api/v1/data/alarms/{id}/handle
///
/// Mark an alarm as handled. Operator action; the engine never flips
/// `is_handled` itself. Appends an audit log entry.
pub async fn handle_alarm(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Alarm>>> {
    let alarm = AlarmRepo::mark_handled(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Alarm", id }))?;

    let username = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .map(|u| u.username)
        .unwrap_or_else(|| format!("user:{}", user.user_id));

    let entry = CreateAuditLog {
        user_id: Some(user.user_id),
        username,
        action: "ALARM_HANDLED".to_string(),
        ip_addr: None,
        details: Some(format!("alarm {id} marked handled")),
    };
    if let Err(e) = AuditLogRepo::insert(&state.pool, &entry).await {
        tracing::error!(alarm_id = id, error = %e, "Failed to write alarm-handled audit log");
    }

    Ok(Json(DataResponse { data: alarm }))
}
