//! Domain models for the Stackhouse membership backend.

pub mod activity;
pub mod application;
pub mod project;

pub use activity::{ActivityEvent, ActivityKind};
pub use application::{Application, ApplicationStatus};
pub use project::Project;
