//! Invite notification abstraction.
//!
//! Delivery is best-effort: the approval transition is durable regardless of
//! the notification outcome, and failures are reported as a flag rather than
//! propagated as request errors.

/// Result of a single invite delivery attempt.
#[derive(Debug, Clone)]
pub enum NotificationResult {
    /// Invite was handed to the provider successfully.
    Sent,
    /// Delivery is disabled by configuration.
    Skipped,
    /// Delivery failed (non-blocking).
    Failed(String),
}

impl NotificationResult {
    pub fn is_sent(&self) -> bool {
        matches!(self, NotificationResult::Sent)
    }
}

/// Sends the single-use invite issued when an application is approved.
#[async_trait::async_trait]
pub trait InviteNotifier: Send + Sync {
    async fn send_invite(&self, email: &str, name: &str, token: &str) -> NotificationResult;
}
