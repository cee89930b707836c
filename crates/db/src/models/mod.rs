//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod alarm;
pub mod audit;
pub mod bridge;
pub mod dashboard;
pub mod reading;
pub mod section;
pub mod sensor;
pub mod user;
