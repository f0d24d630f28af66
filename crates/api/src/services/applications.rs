//! Application lifecycle service.
//!
//! Orchestrates the user-facing operations on membership applications:
//! submit, list for review, approve, bulk-approve, decline, and invite
//! redemption. The record store and the invite notifier are injected at
//! construction; handlers own no business rules.

use std::sync::Arc;

use domain::models::activity::{build_feed, ActivityEvent};
use domain::models::application::{
    sort_for_review, Application, ApprovalOutcome, BulkApprovalSummary, SubmitApplicationRequest,
};
use domain::services::InviteNotifier;
use persistence::repositories::{ApplicationRepository, NewApplication};
use tracing::{error, info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::error::{ApiError, DUPLICATE_EMAIL_MESSAGE};

/// Lifecycle service for membership applications.
#[derive(Clone)]
pub struct ApplicationService {
    repo: ApplicationRepository,
    notifier: Arc<dyn InviteNotifier>,
}

impl ApplicationService {
    /// Creates a new lifecycle service over the given store and notifier.
    pub fn new(repo: ApplicationRepository, notifier: Arc<dyn InviteNotifier>) -> Self {
        Self { repo, notifier }
    }

    /// Validates and persists a new application.
    ///
    /// The email pre-check produces the friendly conflict message; the
    /// database unique index remains the authoritative duplicate signal
    /// under concurrent submissions.
    pub async fn submit(
        &self,
        request: SubmitApplicationRequest,
    ) -> Result<Application, ApiError> {
        request.validate()?;

        if self.repo.find_by_email(&request.email).await?.is_some() {
            return Err(ApiError::Conflict(DUPLICATE_EMAIL_MESSAGE.to_string()));
        }

        let created = self
            .repo
            .create(NewApplication {
                name: &request.name,
                email: &request.email,
                portfolio_url: &request.portfolio_url,
                reason: &request.reason,
            })
            .await
            .map_err(|err| match &err {
                sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
                    ApiError::Conflict(DUPLICATE_EMAIL_MESSAGE.to_string())
                }
                _ => err.into(),
            })?;

        info!(
            application_id = created.id,
            email = %created.email,
            "Application submitted"
        );

        Ok(created.into())
    }

    /// Returns all applications in review order: pending first, newest
    /// first within each status group.
    pub async fn list_for_review(&self) -> Result<Vec<Application>, ApiError> {
        let mut applications: Vec<Application> = self
            .repo
            .list_all()
            .await?
            .into_iter()
            .map(Into::into)
            .collect();
        sort_for_review(&mut applications);
        Ok(applications)
    }

    /// Approves a single application and attempts invite delivery.
    ///
    /// Approving an already-approved application is an idempotent no-op on
    /// the record: the existing token is kept, never rotated. The invite
    /// email is (re)attempted either way, and its outcome never rolls back
    /// the approval.
    pub async fn approve(&self, id: i32) -> Result<ApprovalOutcome, ApiError> {
        let application: Application = match self.repo.approve(id, &new_invite_token()).await? {
            Some(updated) => updated.into(),
            // Missing id or already approved: the re-read distinguishes the
            // two and keeps the existing row (and its token) untouched.
            None => self
                .repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| ApiError::NotFound(format!("Application {id} not found")))?
                .into(),
        };

        let email_sent = self.send_invite(&application).await;

        info!(
            application_id = application.id,
            email_sent, "Application approved"
        );

        Ok(ApprovalOutcome {
            application,
            email_sent,
        })
    }

    /// Applies the approval transition to every id in the batch.
    ///
    /// Each id is an independent unit of work: unknown or already-approved
    /// ids are skipped silently, and one failure never aborts the rest.
    /// `count` reports only applications actually moved to approved.
    pub async fn bulk_approve(&self, ids: &[i32]) -> Result<BulkApprovalSummary, ApiError> {
        let mut count = 0;
        let mut email_success_count = 0;

        for &id in ids {
            match self.repo.approve(id, &new_invite_token()).await {
                Ok(Some(updated)) => {
                    count += 1;
                    let application: Application = updated.into();
                    if self.send_invite(&application).await {
                        email_success_count += 1;
                    }
                }
                Ok(None) => {
                    info!(application_id = id, "Skipped in bulk approval");
                }
                Err(err) => {
                    error!(application_id = id, error = %err, "Bulk approval item failed");
                }
            }
        }

        info!(count, email_success_count, "Bulk approval completed");

        Ok(BulkApprovalSummary {
            count,
            email_success_count,
            message: format!("Approved {count} applications"),
        })
    }

    /// Permanently removes an application. Idempotent: declining an id that
    /// does not exist is not an error.
    pub async fn decline(&self, id: i32) -> Result<(), ApiError> {
        let deleted = self.repo.delete(id).await?;
        info!(application_id = id, deleted, "Application declined");
        Ok(())
    }

    /// Redeems an invite token, enforcing single use.
    ///
    /// The redemption itself is a single conditional update, so two
    /// concurrent requests for the same token cannot both succeed.
    pub async fn redeem_invite(&self, token: &str) -> Result<(), ApiError> {
        let application = self.repo.find_by_token(token).await?.ok_or_else(|| {
            ApiError::Forbidden("Invalid or expired invite link.".to_string())
        })?;

        if application.is_invite_used {
            return Err(ApiError::Forbidden(
                "This invite link has already been used.".to_string(),
            ));
        }

        // The atomic check-and-set is authoritative; the read above only
        // distinguishes the error message.
        if !self.repo.redeem(token).await? {
            return Err(ApiError::Forbidden(
                "This invite link has already been used.".to_string(),
            ));
        }

        info!(application_id = application.id, "Invite redeemed");
        Ok(())
    }

    /// Builds the public activity feed from the most recent applications.
    pub async fn recent_activity(&self, limit: i64) -> Result<Vec<ActivityEvent>, ApiError> {
        let recent: Vec<Application> = self
            .repo
            .list_recent(Some(limit))
            .await?
            .into_iter()
            .map(Into::into)
            .collect();
        Ok(build_feed(&recent))
    }

    async fn send_invite(&self, application: &Application) -> bool {
        let Some(token) = application.invite_token.as_deref() else {
            warn!(
                application_id = application.id,
                "Approved application has no invite token; skipping email"
            );
            return false;
        };

        let result = self
            .notifier
            .send_invite(&application.email, &application.name, token)
            .await;

        if let domain::services::NotificationResult::Failed(reason) = &result {
            warn!(
                application_id = application.id,
                email = %application.email,
                reason = %reason,
                "Invite email failed"
            );
        }

        result.is_sent()
    }
}

/// Generates a fresh invite token: a UUIDv4, unpredictable and unique per
/// approval event.
fn new_invite_token() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invite_tokens_are_unique() {
        let first = new_invite_token();
        let second = new_invite_token();
        assert_ne!(first, second);
    }

    #[test]
    fn test_invite_token_is_uuid() {
        let token = new_invite_token();
        assert!(Uuid::parse_str(&token).is_ok());
    }
}
