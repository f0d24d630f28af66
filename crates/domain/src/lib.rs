//! Domain layer for the Stackhouse membership backend.
//!
//! This crate contains:
//! - Domain models (Application, Project, request/response types)
//! - Pure business logic (review ordering, activity feed projection)
//! - The invite notification trait

pub mod models;
pub mod services;
