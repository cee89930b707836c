//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod alarm_repo;
pub mod audit_repo;
pub mod bridge_repo;
pub mod dashboard_repo;
pub mod reading_repo;
pub mod section_repo;
pub mod sensor_repo;
pub mod user_repo;

pub use alarm_repo::AlarmRepo;
pub use audit_repo::AuditLogRepo;
pub use bridge_repo::BridgeRepo;
pub use dashboard_repo::DashboardRepo;
pub use reading_repo::ReadingRepo;
pub use section_repo::SectionRepo;
pub use sensor_repo::SensorRepo;
pub use user_repo::UserRepo;
