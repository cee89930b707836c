//! Integration tests for the repository layer against a real database.
//!
//! Exercises the bridge hierarchy CRUD, the append-only telemetry
//! tables, unique/FK constraints, and the dashboard aggregates. The demo
//! seed migration provides one bridge, two sections, and five sensors.

use sqlx::PgPool;

use bridgewatch_db::models::audit::CreateAuditLog;
use bridgewatch_db::models::bridge::{CreateBridge, UpdateBridge};
use bridgewatch_db::models::section::CreateSection;
use bridgewatch_db::models::sensor::{CreateSensor, UpdateSensor};
use bridgewatch_db::models::user::CreateUser;
use bridgewatch_db::repositories::{
    AlarmRepo, AuditLogRepo, BridgeRepo, DashboardRepo, ReadingRepo, SectionRepo, SensorRepo,
    UserRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_bridge(name: &str) -> CreateBridge {
    CreateBridge {
        name: name.to_string(),
        lng: 121.47,
        lat: 31.23,
        image_url: None,
        status: None,
    }
}

fn new_sensor(section_id: i64, code: &str) -> CreateSensor {
    CreateSensor {
        section_id,
        sensor_code: code.to_string(),
        sensor_name: format!("Sensor {code}"),
        sensor_type: "strain".to_string(),
        unit: Some("με".to_string()),
        limit_max: Some(320.0),
        limit_min: Some(280.0),
    }
}

// ---------------------------------------------------------------------------
// Hierarchy CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_full_hierarchy(pool: PgPool) {
    let bridge = BridgeRepo::create(&pool, &new_bridge("Test Bridge"))
        .await
        .unwrap();
    assert_eq!(bridge.status, "normal");

    let section = SectionRepo::create(&pool, bridge.id, &CreateSection { name: "Deck".into() })
        .await
        .unwrap();
    assert_eq!(section.bridge_id, bridge.id);

    let sensor = SensorRepo::create(&pool, &new_sensor(section.id, "T1_DECK_STR_01"))
        .await
        .unwrap();
    assert_eq!(sensor.section_id, section.id);
    assert_eq!(sensor.limit_max, Some(320.0));

    let found = SensorRepo::find_by_id(&pool, sensor.id).await.unwrap();
    assert!(found.is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_cascade_delete_bridge(pool: PgPool) {
    let bridge = BridgeRepo::create(&pool, &new_bridge("Doomed Bridge"))
        .await
        .unwrap();
    let section = SectionRepo::create(&pool, bridge.id, &CreateSection { name: "Deck".into() })
        .await
        .unwrap();
    let sensor = SensorRepo::create(&pool, &new_sensor(section.id, "DOOM_STR_01"))
        .await
        .unwrap();
    ReadingRepo::insert(&pool, sensor.id, &sensor.sensor_code, 300.0)
        .await
        .unwrap();
    AlarmRepo::insert(&pool, sensor.id, 325.0, "test alarm")
        .await
        .unwrap();

    assert!(BridgeRepo::delete(&pool, bridge.id).await.unwrap());

    assert!(SectionRepo::find_by_id(&pool, section.id)
        .await
        .unwrap()
        .is_none());
    assert!(SensorRepo::find_by_id(&pool, sensor.id)
        .await
        .unwrap()
        .is_none());
    let history = ReadingRepo::history_by_code(&pool, "DOOM_STR_01", 10)
        .await
        .unwrap();
    assert!(history.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_sensor_code_rejected(pool: PgPool) {
    let bridge = BridgeRepo::create(&pool, &new_bridge("Dup Bridge")).await.unwrap();
    let section = SectionRepo::create(&pool, bridge.id, &CreateSection { name: "Deck".into() })
        .await
        .unwrap();

    SensorRepo::create(&pool, &new_sensor(section.id, "DUP_CODE"))
        .await
        .unwrap();
    let err = SensorRepo::create(&pool, &new_sensor(section.id, "DUP_CODE"))
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_sensors_sensor_code"));
        }
        other => panic!("expected a database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_bridge_is_partial(pool: PgPool) {
    let bridge = BridgeRepo::create(&pool, &new_bridge("Rename Me")).await.unwrap();

    let updated = BridgeRepo::update(
        &pool,
        bridge.id,
        &UpdateBridge {
            name: Some("Renamed".into()),
            lng: None,
            lat: None,
            image_url: None,
            status: None,
        },
    )
    .await
    .unwrap()
    .expect("bridge should exist");

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.lng, bridge.lng);
    assert_eq!(updated.status, bridge.status);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_sensor_update_can_clear_limits(pool: PgPool) {
    let bridge = BridgeRepo::create(&pool, &new_bridge("Limits Bridge")).await.unwrap();
    let section = SectionRepo::create(&pool, bridge.id, &CreateSection { name: "Deck".into() })
        .await
        .unwrap();
    let sensor = SensorRepo::create(&pool, &new_sensor(section.id, "LIM_STR_01"))
        .await
        .unwrap();

    let updated = SensorRepo::update(
        &pool,
        sensor.id,
        &UpdateSensor {
            sensor_name: sensor.sensor_name.clone(),
            sensor_type: sensor.sensor_type.clone(),
            unit: sensor.unit.clone(),
            limit_max: None,
            limit_min: None,
        },
    )
    .await
    .unwrap()
    .expect("sensor should exist");

    assert_eq!(updated.limit_max, None);
    assert_eq!(updated.limit_min, None);
}

// ---------------------------------------------------------------------------
// Telemetry
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_reading_history_returns_oldest_first(pool: PgPool) {
    // Seeded sensor from the demo migration.
    let sensors = SensorRepo::list_all(&pool).await.unwrap();
    let sensor = sensors
        .iter()
        .find(|s| s.sensor_code == "B1_MID_STR_01")
        .expect("demo seed sensor should exist");

    for value in [301.0, 302.0, 303.0] {
        ReadingRepo::insert(&pool, sensor.id, &sensor.sensor_code, value)
            .await
            .unwrap();
    }

    let history = ReadingRepo::history_by_code(&pool, &sensor.sensor_code, 10)
        .await
        .unwrap();
    assert_eq!(history.len(), 3);
    for pair in history.windows(2) {
        assert!(pair[0].created_at <= pair[1].created_at);
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_alarm_insert_and_mark_handled(pool: PgPool) {
    let sensors = SensorRepo::list_all(&pool).await.unwrap();
    let sensor = &sensors[0];

    let alarm = AlarmRepo::insert(
        &pool,
        sensor.id,
        325.0,
        "Midspan strain gauge 1 exceeds upper limit (limit: 320με)",
    )
    .await
    .unwrap();
    assert!(!alarm.is_handled);

    let details = AlarmRepo::list_recent(&pool, 20).await.unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].sensor_code, sensor.sensor_code);
    assert_eq!(details[0].bridge_name, "Qianjiang Grand Bridge");

    let handled = AlarmRepo::mark_handled(&pool, alarm.id)
        .await
        .unwrap()
        .expect("alarm should exist");
    assert!(handled.is_handled);

    // Unknown alarm ids resolve to None, not an error.
    assert!(AlarmRepo::mark_handled(&pool, 999_999).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Dashboard aggregates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_overview_counts(pool: PgPool) {
    let before = DashboardRepo::overview(&pool).await.unwrap();
    assert_eq!(before.bridge_count, 1);
    assert_eq!(before.sensor_count, 5);
    assert_eq!(before.unhandled_alarms, 0);

    let sensors = SensorRepo::list_all(&pool).await.unwrap();
    ReadingRepo::insert(&pool, sensors[0].id, &sensors[0].sensor_code, 300.0)
        .await
        .unwrap();
    AlarmRepo::insert(&pool, sensors[0].id, 325.0, "breach").await.unwrap();

    let after = DashboardRepo::overview(&pool).await.unwrap();
    assert_eq!(after.online_sensors, 1);
    assert_eq!(after.today_alarms, 1);
    assert_eq!(after.unhandled_alarms, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_realtime_reports_latest_reading(pool: PgPool) {
    let sensors = SensorRepo::list_all(&pool).await.unwrap();
    let sensor = &sensors[0];

    let silent = DashboardRepo::realtime(&pool).await.unwrap();
    assert_eq!(silent.len(), 5);
    assert!(silent.iter().all(|r| r.value.is_none()));

    ReadingRepo::insert(&pool, sensor.id, &sensor.sensor_code, 299.5)
        .await
        .unwrap();
    ReadingRepo::insert(&pool, sensor.id, &sensor.sensor_code, 301.5)
        .await
        .unwrap();

    let rows = DashboardRepo::realtime(&pool).await.unwrap();
    let row = rows
        .iter()
        .find(|r| r.sensor_id == sensor.id)
        .expect("sensor should appear");
    assert_eq!(row.value, Some(301.5));
    assert_eq!(row.bridge_name, "Qianjiang Grand Bridge");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_bridges_tree_shape(pool: PgPool) {
    let tree = DashboardRepo::bridges_tree(&pool).await.unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].sections.len(), 2);

    let sensor_total: usize = tree[0].sections.iter().map(|s| s.sensors.len()).sum();
    assert_eq!(sensor_total, 5);
}

// ---------------------------------------------------------------------------
// Users and audit log
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_user_create_and_lookup(pool: PgPool) {
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 0);

    let user = UserRepo::create(
        &pool,
        &CreateUser {
            username: "operator1".into(),
            password_hash: "$argon2id$fake".into(),
            display_name: None,
            role: "operator".into(),
        },
    )
    .await
    .unwrap();
    assert!(user.is_active);

    let found = UserRepo::find_by_username(&pool, "operator1")
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(found.id, user.id);

    assert!(UserRepo::find_by_username(&pool, "nobody")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_audit_log_append_and_list(pool: PgPool) {
    for action in ["LOGIN", "ALARM_HANDLED"] {
        AuditLogRepo::insert(
            &pool,
            &CreateAuditLog {
                user_id: None,
                username: "admin".into(),
                action: action.into(),
                ip_addr: Some("10.0.0.1".into()),
                details: None,
            },
        )
        .await
        .unwrap();
    }

    let logs = AuditLogRepo::list_recent(&pool, 10).await.unwrap();
    assert_eq!(logs.len(), 2);
}
