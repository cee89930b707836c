//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `bridgewatch_db`
//! and map errors via [`crate::error::AppError`].

pub mod audit;
pub mod auth;
pub mod bridges;
pub mod dashboard;
pub mod data;
pub mod health;
pub mod sensors;
