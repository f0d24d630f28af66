//! Project showcase models.
//!
//! Projects have no lifecycle beyond create/list; they share infrastructure
//! with applications but carry no business rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A community showcase entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub author: String,
    /// Free text, e.g. "Shipped" or "In Progress".
    pub status: String,
    pub date: DateTime<Utc>,
}

/// Request to add a showcase entry.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,

    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}
