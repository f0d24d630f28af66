//! Project entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::Project;
use sqlx::FromRow;

/// Database row mapping for the projects table.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectEntity {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub author: String,
    pub status: String,
    pub date: DateTime<Utc>,
}

impl From<ProjectEntity> for Project {
    fn from(entity: ProjectEntity) -> Self {
        Project {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            author: entity.author,
            status: entity.status,
            date: entity.date,
        }
    }
}
