//! Aggregate queries backing the dashboard endpoints.

use sqlx::PgPool;

use crate::models::dashboard::{BridgeNode, Overview, RealtimeRow, SectionNode};
use crate::repositories::{BridgeRepo, SectionRepo, SensorRepo};

/// Provides read-only aggregate queries across the bridge hierarchy and
/// telemetry tables.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Headline counters: totals, online sensors (reported within the
    /// last hour), today's alarms, and the unhandled backlog.
    pub async fn overview(pool: &PgPool) -> Result<Overview, sqlx::Error> {
        let (bridge_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bridges")
            .fetch_one(pool)
            .await?;

        let (sensor_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sensors")
            .fetch_one(pool)
            .await?;

        let (online_sensors,): (i64,) = sqlx::query_as(
            "SELECT COUNT(DISTINCT sensor_id) FROM sensor_readings
             WHERE created_at > now() - INTERVAL '1 hour'",
        )
        .fetch_one(pool)
        .await?;

        let (today_alarms,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM alarms WHERE created_at::date = CURRENT_DATE",
        )
        .fetch_one(pool)
        .await?;

        let (unhandled_alarms,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM alarms WHERE is_handled = false")
                .fetch_one(pool)
                .await?;

        let online_rate = if sensor_count > 0 {
            (online_sensors as f64 / sensor_count as f64 * 1000.0).round() / 10.0
        } else {
            0.0
        };

        Ok(Overview {
            bridge_count,
            sensor_count,
            online_sensors,
            online_rate,
            today_alarms,
            unhandled_alarms,
        })
    }

    /// The full bridge -> section -> sensor tree.
    ///
    /// Three flat queries assembled in memory; the hierarchy is small
    /// (tens of sensors), so no recursive SQL is warranted.
    pub async fn bridges_tree(pool: &PgPool) -> Result<Vec<BridgeNode>, sqlx::Error> {
        let bridges = BridgeRepo::list(pool).await?;
        let mut tree = Vec::with_capacity(bridges.len());

        for bridge in bridges {
            let sections = SectionRepo::list_by_bridge(pool, bridge.id).await?;
            let mut section_nodes = Vec::with_capacity(sections.len());
            for section in sections {
                let sensors = SensorRepo::list_by_section(pool, section.id).await?;
                section_nodes.push(SectionNode { section, sensors });
            }
            tree.push(BridgeNode {
                bridge,
                sections: section_nodes,
            });
        }

        Ok(tree)
    }

    /// Every sensor with its latest reading (null for silent sensors).
    ///
    /// Uses `DISTINCT ON` to select the most recent reading per sensor.
    pub async fn realtime(pool: &PgPool) -> Result<Vec<RealtimeRow>, sqlx::Error> {
        let query = "\
            SELECT s.id AS sensor_id, s.sensor_code, s.sensor_name, s.sensor_type, \
                   s.unit, s.limit_max, s.limit_min, \
                   sec.name AS section_name, b.name AS bridge_name, \
                   r.value, r.created_at AS reported_at \
            FROM sensors s \
            JOIN sections sec ON s.section_id = sec.id \
            JOIN bridges b ON sec.bridge_id = b.id \
            LEFT JOIN ( \
                SELECT DISTINCT ON (sensor_id) sensor_id, value, created_at \
                FROM sensor_readings \
                ORDER BY sensor_id, created_at DESC \
            ) r ON r.sensor_id = s.id \
            ORDER BY b.id, sec.id, s.id";
        sqlx::query_as::<_, RealtimeRow>(query).fetch_all(pool).await
    }
}
