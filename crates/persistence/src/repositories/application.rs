//! Repository for application database operations.
//!
//! The sole arbiter of the email-uniqueness invariant: a unique index on
//! `lower(email)` is the authoritative enforcement. The `find_by_email`
//! pre-check exists only to produce a friendly conflict message before the
//! insert races the constraint.

use sqlx::PgPool;

use crate::entities::ApplicationEntity;

/// Row cap for `list_recent` when the caller does not supply one.
pub const DEFAULT_RECENT_LIMIT: i64 = 20;

/// Candidate application fields for insertion.
#[derive(Debug, Clone)]
pub struct NewApplication<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub portfolio_url: &'a str,
    pub reason: &'a str,
}

/// Repository for application operations.
#[derive(Clone)]
pub struct ApplicationRepository {
    pool: PgPool,
}

impl ApplicationRepository {
    /// Creates a new application repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new pending application and returns the persisted row.
    ///
    /// A duplicate email surfaces as a unique-violation database error
    /// (code 23505); callers translate that into a conflict.
    pub async fn create(
        &self,
        input: NewApplication<'_>,
    ) -> Result<ApplicationEntity, sqlx::Error> {
        sqlx::query_as::<_, ApplicationEntity>(
            r#"
            INSERT INTO applications (name, email, portfolio_url, reason, status)
            VALUES ($1, $2, $3, $4, 'pending')
            RETURNING id, name, email, portfolio_url, reason, status, invite_token, is_invite_used, created_at
            "#,
        )
        .bind(input.name)
        .bind(input.email)
        .bind(input.portfolio_url)
        .bind(input.reason)
        .fetch_one(&self.pool)
        .await
    }

    /// Finds an application by email, case-insensitively.
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<ApplicationEntity>, sqlx::Error> {
        sqlx::query_as::<_, ApplicationEntity>(
            r#"
            SELECT id, name, email, portfolio_url, reason, status, invite_token, is_invite_used, created_at
            FROM applications
            WHERE lower(email) = lower($1)
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
    }

    /// Returns every application, unordered. Display ordering is applied
    /// by the caller after fetch.
    pub async fn list_all(&self) -> Result<Vec<ApplicationEntity>, sqlx::Error> {
        sqlx::query_as::<_, ApplicationEntity>(
            r#"
            SELECT id, name, email, portfolio_url, reason, status, invite_token, is_invite_used, created_at
            FROM applications
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Returns the most recent applications, newest first. Callers that do
    /// not supply a limit get at most `DEFAULT_RECENT_LIMIT` rows.
    pub async fn list_recent(
        &self,
        limit: Option<i64>,
    ) -> Result<Vec<ApplicationEntity>, sqlx::Error> {
        sqlx::query_as::<_, ApplicationEntity>(
            r#"
            SELECT id, name, email, portfolio_url, reason, status, invite_token, is_invite_used, created_at
            FROM applications
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit.unwrap_or(DEFAULT_RECENT_LIMIT))
        .fetch_all(&self.pool)
        .await
    }

    /// Finds an application by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<ApplicationEntity>, sqlx::Error> {
        sqlx::query_as::<_, ApplicationEntity>(
            r#"
            SELECT id, name, email, portfolio_url, reason, status, invite_token, is_invite_used, created_at
            FROM applications
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Finds an application by its invite token.
    pub async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<ApplicationEntity>, sqlx::Error> {
        sqlx::query_as::<_, ApplicationEntity>(
            r#"
            SELECT id, name, email, portfolio_url, reason, status, invite_token, is_invite_used, created_at
            FROM applications
            WHERE invite_token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
    }

    /// Moves a pending application to approved, assigning its invite token
    /// in the same statement.
    ///
    /// The `AND status = 'pending'` guard makes approval idempotent: a row
    /// that is missing or already approved yields `None`, and an existing
    /// token is never rotated.
    pub async fn approve(
        &self,
        id: i32,
        token: &str,
    ) -> Result<Option<ApplicationEntity>, sqlx::Error> {
        sqlx::query_as::<_, ApplicationEntity>(
            r#"
            UPDATE applications
            SET status = 'approved', invite_token = $2
            WHERE id = $1 AND status = 'pending'
            RETURNING id, name, email, portfolio_url, reason, status, invite_token, is_invite_used, created_at
            "#,
        )
        .bind(id)
        .bind(token)
        .fetch_optional(&self.pool)
        .await
    }

    /// Marks an invite as used atomically.
    ///
    /// The `AND is_invite_used = FALSE` guard prevents two concurrent
    /// redemptions of the same token from both succeeding.
    ///
    /// Returns `true` if the invite was redeemed by this call,
    /// `false` if the token was unknown or already used.
    pub async fn redeem(&self, token: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE applications
            SET is_invite_used = TRUE
            WHERE invite_token = $1 AND is_invite_used = FALSE
            "#,
        )
        .bind(token)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Deletes an application permanently.
    ///
    /// Returns true if a row was deleted. Deleting a nonexistent id is not
    /// an error.
    pub async fn delete(&self, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM applications
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
