//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod application;
pub mod project;

pub use application::{ApplicationEntity, ApplicationStatusDb};
pub use project::ProjectEntity;
