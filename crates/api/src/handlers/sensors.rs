//! Handlers for the `/sensors` resource.
//!
//! Sensor rows carry the alarm thresholds the simulation engine
//! evaluates. Threshold edits here are picked up on the engine's next
//! tick; no signaling is involved.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bridgewatch_core::error::CoreError;
use bridgewatch_core::types::DbId;
use bridgewatch_db::models::sensor::{CreateSensor, Sensor, UpdateSensor};
use bridgewatch_db::repositories::{SectionRepo, SensorRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/sensors
pub async fn list_sensors(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Sensor>>>> {
    let sensors = SensorRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: sensors }))
}

/// POST /api/v1/sensors
pub async fn create_sensor(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateSensor>,
) -> AppResult<(StatusCode, Json<DataResponse<Sensor>>)> {
    if input.sensor_code.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "sensor_code is required".to_string(),
        )));
    }

    // Surface a 404 for an unknown section instead of an FK violation.
    SectionRepo::find_by_id(&state.pool, input.section_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Section",
            id: input.section_id,
        }))?;

    let sensor = SensorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: sensor })))
}

/// GET /api/v1/sensors/{id}
pub async fn get_sensor(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Sensor>>> {
    let sensor = SensorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Sensor",
            id,
        }))?;
    Ok(Json(DataResponse { data: sensor }))
}

/// PUT /api/v1/sensors/{id}
///
/// Full replacement of the sensor's configuration; send `null` to clear
/// a limit.
pub async fn update_sensor(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSensor>,
) -> AppResult<Json<DataResponse<Sensor>>> {
    let sensor = SensorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Sensor",
            id,
        }))?;
    Ok(Json(DataResponse { data: sensor }))
}

/// DELETE /api/v1/sensors/{id}
pub async fn delete_sensor(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !SensorRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Sensor",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
