//! Activity feed projection ("the pulse").
//!
//! Derives a privacy-reduced view of recent applications for public display.
//! The feed has no persistence of its own; it is recomputed from store state
//! on every request.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::application::{Application, ApplicationStatus};

/// Default number of applications included in the feed.
pub const DEFAULT_FEED_LIMIT: i64 = 15;

/// Severity classification of a feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Success,
    Info,
}

/// One entry in the public activity feed.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEvent {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Reduces a full name to a public display form: first token plus the
/// initial of the last token ("John Michael Doe" becomes "John D.").
/// Single-token names pass through unchanged.
pub fn obfuscate_name(name: &str) -> String {
    let mut parts = name.split_whitespace();
    let Some(first) = parts.next() else {
        return name.to_string();
    };
    match parts.last().and_then(|last| last.chars().next()) {
        Some(initial) => format!("{first} {initial}."),
        None => first.to_string(),
    }
}

/// Builds the public feed from recent applications, preserving input order
/// (callers pass rows newest first).
pub fn build_feed(applications: &[Application]) -> Vec<ActivityEvent> {
    applications
        .iter()
        .map(|app| {
            let (action, kind) = match app.status {
                ApplicationStatus::Approved => ("joined_network", ActivityKind::Success),
                ApplicationStatus::Pending => ("applied_to_batch", ActivityKind::Info),
            };
            ActivityEvent {
                kind,
                text: format!("{}: '{}'", action, obfuscate_name(&app.name)),
                timestamp: app.created_at,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn application(name: &str, status: ApplicationStatus) -> Application {
        Application {
            id: 1,
            name: name.to_string(),
            email: "someone@example.com".to_string(),
            portfolio_url: "example.dev".to_string(),
            reason: "building a tool".to_string(),
            status,
            invite_token: None,
            is_invite_used: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_obfuscate_two_part_name() {
        assert_eq!(obfuscate_name("John Doe"), "John D.");
    }

    #[test]
    fn test_obfuscate_keeps_first_and_last_token() {
        assert_eq!(obfuscate_name("Jane Alice Doe"), "Jane D.");
    }

    #[test]
    fn test_obfuscate_single_token_passes_through() {
        assert_eq!(obfuscate_name("Madonna"), "Madonna");
    }

    #[test]
    fn test_obfuscate_collapses_extra_whitespace() {
        assert_eq!(obfuscate_name("  John   Doe "), "John D.");
    }

    #[test]
    fn test_feed_classifies_by_status() {
        let apps = vec![
            application("Jane Alice Doe", ApplicationStatus::Approved),
            application("John Smith", ApplicationStatus::Pending),
        ];

        let feed = build_feed(&apps);

        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].kind, ActivityKind::Success);
        assert_eq!(feed[0].text, "joined_network: 'Jane D.'");
        assert_eq!(feed[1].kind, ActivityKind::Info);
        assert_eq!(feed[1].text, "applied_to_batch: 'John S.'");
    }

    #[test]
    fn test_feed_event_wire_format() {
        let apps = vec![application("Madonna", ApplicationStatus::Pending)];
        let json = serde_json::to_value(build_feed(&apps)).unwrap();

        assert_eq!(json[0]["type"], "info");
        assert_eq!(json[0]["text"], "applied_to_batch: 'Madonna'");
        assert!(json[0].get("timestamp").is_some());
    }
}
