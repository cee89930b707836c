//! The `/api/v1` route tree.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
///
/// /audit/logs                      recent operation log (auth)
///
/// /bridges                         list, create
/// /bridges/{id}                    get, update, delete (delete: admin)
/// /bridges/{bridge_id}/sections    list, create
/// /sections/{id}                   update, delete (delete: admin)
///
/// /sensors                         list, create
/// /sensors/{id}                    get, update, delete (delete: admin)
///
/// /data/history                    reading history (?code, ?limit)
/// /data/alarms                     recent alarms (?limit)
/// /data/alarms/{id}/handle         mark handled (auth, POST)
///
/// /dashboard/overview              headline counters
/// /dashboard/bridges-tree          bridge -> section -> sensor tree
/// /dashboard/realtime              latest reading per sensor
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication.
        .route("/auth/login", post(handlers::auth::login))
        // Operation audit log.
        .route("/audit/logs", get(handlers::audit::list_logs))
        // Bridge hierarchy CRUD.
        .route(
            "/bridges",
            get(handlers::bridges::list_bridges).post(handlers::bridges::create_bridge),
        )
        .route(
            "/bridges/{id}",
            get(handlers::bridges::get_bridge)
                .put(handlers::bridges::update_bridge)
                .delete(handlers::bridges::delete_bridge),
        )
        .route(
            "/bridges/{bridge_id}/sections",
            get(handlers::bridges::list_sections).post(handlers::bridges::create_section),
        )
        .route(
            "/sections/{id}",
            put(handlers::bridges::update_section).delete(handlers::bridges::delete_section),
        )
        // Sensor configuration (including thresholds).
        .route(
            "/sensors",
            get(handlers::sensors::list_sensors).post(handlers::sensors::create_sensor),
        )
        .route(
            "/sensors/{id}",
            get(handlers::sensors::get_sensor)
                .put(handlers::sensors::update_sensor)
                .delete(handlers::sensors::delete_sensor),
        )
        // Telemetry data.
        .route("/data/history", get(handlers::data::sensor_history))
        .route("/data/alarms", get(handlers::data::list_alarms))
        .route("/data/alarms/{id}/handle", post(handlers::data::handle_alarm))
        // Dashboard aggregates.
        .route("/dashboard/overview", get(handlers::dashboard::overview))
        .route(
            "/dashboard/bridges-tree",
            get(handlers::dashboard::bridges_tree),
        )
        .route("/dashboard/realtime", get(handlers::dashboard::realtime))
}
