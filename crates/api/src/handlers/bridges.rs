//! Handlers for the `/bridges` resource and nested sections.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bridgewatch_core::error::CoreError;
use bridgewatch_core::types::DbId;
use bridgewatch_db::models::bridge::{Bridge, CreateBridge, UpdateBridge};
use bridgewatch_db::models::section::{CreateSection, Section, UpdateSection};
use bridgewatch_db::repositories::{BridgeRepo, SectionRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Bridges
// ---------------------------------------------------------------------------

/// GET /api/v1/bridges
pub async fn list_bridges(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Bridge>>>> {
    let bridges = BridgeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: bridges }))
}

/// POST /api/v1/bridges
pub async fn create_bridge(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateBridge>,
) -> AppResult<(StatusCode, Json<DataResponse<Bridge>>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name is required".to_string(),
        )));
    }
    let bridge = BridgeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: bridge })))
}

/// GET /api/v1/bridges/{id}
pub async fn get_bridge(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Bridge>>> {
    let bridge = BridgeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Bridge",
            id,
        }))?;
    Ok(Json(DataResponse { data: bridge }))
}

/// PUT /api/v1/bridges/{id}
pub async fn update_bridge(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBridge>,
) -> AppResult<Json<DataResponse<Bridge>>> {
    let bridge = BridgeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Bridge",
            id,
        }))?;
    Ok(Json(DataResponse { data: bridge }))
}

/// DELETE /api/v1/bridges/{id}
///
/// Cascades to sections, sensors, and their telemetry. Admin only.
pub async fn delete_bridge(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !BridgeRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Bridge",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// GET /api/v1/bridges/{bridge_id}/sections
pub async fn list_sections(
    State(state): State<AppState>,
    Path(bridge_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Section>>>> {
    let sections = SectionRepo::list_by_bridge(&state.pool, bridge_id).await?;
    Ok(Json(DataResponse { data: sections }))
}

/// POST /api/v1/bridges/{bridge_id}/sections
pub async fn create_section(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(bridge_id): Path<DbId>,
    Json(input): Json<CreateSection>,
) -> AppResult<(StatusCode, Json<DataResponse<Section>>)> {
    // Surface a 404 for an unknown bridge instead of an FK violation.
    BridgeRepo::find_by_id(&state.pool, bridge_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Bridge",
            id: bridge_id,
        }))?;

    let section = SectionRepo::create(&state.pool, bridge_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: section })))
}

/// PUT /api/v1/sections/{id}
pub async fn update_section(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSection>,
) -> AppResult<Json<DataResponse<Section>>> {
    let section = SectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Section",
            id,
        }))?;
    Ok(Json(DataResponse { data: section }))
}

/// DELETE /api/v1/sections/{id}
pub async fn delete_section(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !SectionRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Section",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
