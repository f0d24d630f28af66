//! Application domain models for the membership workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Review status of a membership application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
}

impl ApplicationStatus {
    /// Sort rank for the admin review list. Pending rows come first.
    fn review_rank(self) -> u8 {
        match self {
            ApplicationStatus::Pending => 0,
            ApplicationStatus::Approved => 1,
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "pending"),
            ApplicationStatus::Approved => write!(f, "approved"),
        }
    }
}

/// Represents one membership application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub portfolio_url: String,
    pub reason: String,
    pub status: ApplicationStatus,
    /// Single-use invite secret, assigned at first approval.
    pub invite_token: Option<String>,
    pub is_invite_used: bool,
    pub created_at: DateTime<Utc>,
}

/// Request to submit a new membership application.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitApplicationRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Must be a valid email address"))]
    pub email: String,

    /// Free-text URL or handle. Not validated beyond being non-empty.
    #[validate(length(min = 1, message = "Portfolio URL is required"))]
    pub portfolio_url: String,

    #[validate(length(min = 1, message = "Reason is required"))]
    pub reason: String,
}

/// Result of approving a single application.
///
/// The approval itself is durable; the notification is best-effort and its
/// outcome is reported as a flag rather than an error.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalOutcome {
    #[serde(flatten)]
    pub application: Application,
    pub email_sent: bool,
}

/// Request body for bulk approval.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkApproveRequest {
    pub ids: Vec<i32>,
}

/// Summary returned from a bulk approval run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkApprovalSummary {
    /// Applications actually moved from pending to approved.
    pub count: usize,
    /// Invite emails that were delivered successfully.
    pub email_success_count: usize,
    pub message: String,
}

/// Orders applications for the admin review list: all pending rows first,
/// then approved, newest first within each group.
///
/// This is a display contract applied after fetch. Storage order is never
/// relied upon.
pub fn sort_for_review(applications: &mut [Application]) {
    applications.sort_by(|a, b| {
        a.status
            .review_rank()
            .cmp(&b.status.review_rank())
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn application(id: i32, status: ApplicationStatus, age_mins: i64) -> Application {
        Application {
            id,
            name: format!("Applicant {id}"),
            email: format!("applicant{id}@example.com"),
            portfolio_url: "example.dev".to_string(),
            reason: "building a tool".to_string(),
            status,
            invite_token: None,
            is_invite_used: false,
            created_at: Utc::now() - Duration::minutes(age_mins),
        }
    }

    #[test]
    fn test_sort_pending_before_approved() {
        let mut apps = vec![
            application(1, ApplicationStatus::Approved, 10),
            application(2, ApplicationStatus::Pending, 5),
            application(3, ApplicationStatus::Approved, 1),
            application(4, ApplicationStatus::Pending, 20),
        ];

        sort_for_review(&mut apps);

        let ids: Vec<i32> = apps.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 4, 3, 1]);
    }

    #[test]
    fn test_sort_newest_first_within_group() {
        let mut apps = vec![
            application(1, ApplicationStatus::Pending, 30),
            application(2, ApplicationStatus::Pending, 10),
            application(3, ApplicationStatus::Pending, 20),
        ];

        sort_for_review(&mut apps);

        let ids: Vec<i32> = apps.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_empty_and_single() {
        let mut empty: Vec<Application> = vec![];
        sort_for_review(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![application(1, ApplicationStatus::Approved, 0)];
        sort_for_review(&mut single);
        assert_eq!(single[0].id, 1);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ApplicationStatus::Pending.to_string(), "pending");
        assert_eq!(ApplicationStatus::Approved.to_string(), "approved");
    }

    #[test]
    fn test_application_wire_casing() {
        let app = application(7, ApplicationStatus::Pending, 0);
        let json = serde_json::to_value(&app).unwrap();

        assert!(json.get("portfolioUrl").is_some());
        assert!(json.get("inviteToken").is_some());
        assert!(json.get("isInviteUsed").is_some());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["status"], "pending");
    }

    #[test]
    fn test_approval_outcome_flattens_application() {
        let outcome = ApprovalOutcome {
            application: application(7, ApplicationStatus::Approved, 0),
            email_sent: true,
        };
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["emailSent"], true);
    }

    #[test]
    fn test_submit_request_validation() {
        use validator::Validate;

        let valid = SubmitApplicationRequest {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            portfolio_url: "jane.dev".to_string(),
            reason: "building a tool".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = SubmitApplicationRequest {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        let errors = bad_email.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));

        let empty_name = SubmitApplicationRequest {
            name: String::new(),
            ..valid
        };
        let errors = empty_name.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }
}
