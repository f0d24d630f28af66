//! Repository implementations for database operations.

pub mod application;
pub mod project;

pub use application::{ApplicationRepository, NewApplication, DEFAULT_RECENT_LIMIT};
pub use project::{NewProject, ProjectRepository};
