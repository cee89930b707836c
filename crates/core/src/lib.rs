//! Domain logic shared across the bridgewatch crates.
//!
//! Everything in this crate is pure: no database access, no I/O. The
//! simulation engine and the API layer both build on these types.

pub mod error;
pub mod roles;
pub mod sensor;
pub mod synthesis;
pub mod thresholds;
pub mod types;
