//! HTTP route handlers.

pub mod applications;
pub mod health;
pub mod join;
pub mod projects;
pub mod pulse;
