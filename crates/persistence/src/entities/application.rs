//! Application entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{Application, ApplicationStatus};
use sqlx::FromRow;

/// Database representation of the application status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "application_status", rename_all = "lowercase")]
pub enum ApplicationStatusDb {
    Pending,
    Approved,
}

impl From<ApplicationStatusDb> for ApplicationStatus {
    fn from(status: ApplicationStatusDb) -> Self {
        match status {
            ApplicationStatusDb::Pending => ApplicationStatus::Pending,
            ApplicationStatusDb::Approved => ApplicationStatus::Approved,
        }
    }
}

impl From<ApplicationStatus> for ApplicationStatusDb {
    fn from(status: ApplicationStatus) -> Self {
        match status {
            ApplicationStatus::Pending => ApplicationStatusDb::Pending,
            ApplicationStatus::Approved => ApplicationStatusDb::Approved,
        }
    }
}

/// Database row mapping for the applications table.
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationEntity {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub portfolio_url: String,
    pub reason: String,
    pub status: ApplicationStatusDb,
    pub invite_token: Option<String>,
    pub is_invite_used: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ApplicationEntity> for Application {
    fn from(entity: ApplicationEntity) -> Self {
        Application {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            portfolio_url: entity.portfolio_url,
            reason: entity.reason,
            status: entity.status.into(),
            invite_token: entity.invite_token,
            is_invite_used: entity.is_invite_used,
            created_at: entity.created_at,
        }
    }
}
