//! Repository for project showcase database operations.

use sqlx::PgPool;

use crate::entities::ProjectEntity;

/// Candidate project fields for insertion.
#[derive(Debug, Clone)]
pub struct NewProject<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub author: &'a str,
    pub status: &'a str,
}

/// Repository for project operations.
#[derive(Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// Creates a new project repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns all showcase projects.
    pub async fn list_all(&self) -> Result<Vec<ProjectEntity>, sqlx::Error> {
        sqlx::query_as::<_, ProjectEntity>(
            r#"
            SELECT id, title, description, author, status, date
            FROM projects
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Inserts a new showcase project and returns the persisted row.
    pub async fn create(&self, input: NewProject<'_>) -> Result<ProjectEntity, sqlx::Error> {
        sqlx::query_as::<_, ProjectEntity>(
            r#"
            INSERT INTO projects (title, description, author, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, author, status, date
            "#,
        )
        .bind(input.title)
        .bind(input.description)
        .bind(input.author)
        .bind(input.status)
        .fetch_one(&self.pool)
        .await
    }

    /// Counts showcase projects. Used to decide whether seeding is needed.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
