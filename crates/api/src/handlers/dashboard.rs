//! Handlers for the dashboard aggregate views.

use axum::extract::State;
use axum::Json;
use bridgewatch_db::models::dashboard::{BridgeNode, Overview, RealtimeRow};
use bridgewatch_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard/overview
///
/// Headline counters: bridge/sensor totals, online rate, alarm counts.
pub async fn overview(State(state): State<AppState>) -> AppResult<Json<DataResponse<Overview>>> {
    let overview = DashboardRepo::overview(&state.pool).await?;
    Ok(Json(DataResponse { data: overview }))
}

/// GET /api/v1/dashboard/bridges-tree
///
/// The full bridge -> section -> sensor structure tree.
pub async fn bridges_tree(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<BridgeNode>>>> {
    let tree = DashboardRepo::bridges_tree(&state.pool).await?;
    Ok(Json(DataResponse { data: tree }))
}

/// GET /api/v1/dashboard/realtime
///
/// Every sensor with its latest reading (null for silent sensors).
pub async fn realtime(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<RealtimeRow>>>> {
    let rows = DashboardRepo::realtime(&state.pool).await?;
    Ok(Json(DataResponse { data: rows }))
}
