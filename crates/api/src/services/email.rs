//! Email service for delivering single-use invite links.
//!
//! Supports multiple providers:
//! - `console`: Logs emails to the log output (development)
//! - `smtp`: Sends via SMTP server
//! - `sendgrid`: Uses SendGrid API

use std::sync::Arc;

use domain::services::{InviteNotifier, NotificationResult};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::config::EmailConfig;

/// Errors that can occur during email operations.
#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Email service not configured")]
    NotConfigured,

    #[error("Failed to send email: {0}")]
    SendFailed(String),

    #[error("Provider error: {0}")]
    ProviderError(String),
}

/// Email message to be sent.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    /// Recipient email address
    pub to: String,
    /// Recipient name
    pub to_name: Option<String>,
    /// Email subject
    pub subject: String,
    /// Plain text body
    pub body_text: String,
    /// HTML body (optional)
    pub body_html: Option<String>,
}

/// Email service for sending transactional emails.
#[derive(Clone)]
pub struct EmailService {
    config: Arc<EmailConfig>,
}

impl EmailService {
    /// Creates a new EmailService with the given configuration.
    pub fn new(config: EmailConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Check if email service is enabled.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Send an email message.
    pub async fn send(&self, message: EmailMessage) -> Result<(), EmailError> {
        if !self.config.enabled {
            debug!(
                to = %message.to,
                subject = %message.subject,
                "Email service disabled, skipping send"
            );
            return Ok(());
        }

        match self.config.provider.as_str() {
            "console" => self.send_console(message).await,
            "smtp" => self.send_smtp(message).await,
            "sendgrid" => self.send_sendgrid(message).await,
            provider => {
                error!(provider = %provider, "Unknown email provider");
                Err(EmailError::NotConfigured)
            }
        }
    }

    /// Send the invite email issued when an application is approved.
    pub async fn send_invite_email(
        &self,
        to_email: &str,
        to_name: &str,
        invite_token: &str,
    ) -> Result<(), EmailError> {
        let join_link = format!("{}/api/join?token={}", self.config.base_url, invite_token);

        let subject = "Welcome to Stackhouse - You're In!";

        let body_text = format!(
            r#"Welcome to Stackhouse, {name}!

We reviewed your application and we're excited to have you join our community of builders.

Join the community here:

{url}

Note: This invite link is unique to you and can only be used once. Please do not share it.

Keep Building,
The Stackhouse Team"#,
            name = to_name,
            url = join_link
        );

        let body_html = if self.config.template_style == "html" {
            Some(format!(
                r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Welcome to Stackhouse</title>
</head>
<body style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; border: 1px solid #333; border-radius: 10px; background-color: #000; color: #fff;">
    <h1 style="color: #fff; font-size: 24px; margin-bottom: 20px;">Welcome to Stackhouse, {name}!</h1>
    <p style="color: #ccc; font-size: 16px; line-height: 1.5;">
        We reviewed your application and we're excited to have you join our community of builders.
    </p>
    <p style="color: #ccc; font-size: 16px; line-height: 1.5;">
        Currently, our community features are invite-only to maintain high quality.
    </p>
    <div style="margin: 30px 0; text-align: center;">
        <a href="{url}" style="background-color: #ea580c; color: #fff; padding: 15px 30px; text-decoration: none; border-radius: 50px; font-weight: bold; font-size: 16px; display: inline-block;">
            Join the Community
        </a>
    </div>
    <p style="color: #888; font-size: 14px; margin-top: 30px; text-align: center;">
        Note: This invite link is unique to you and can only be used once. Please do not share it.
    </p>
    <div style="margin-top: 40px; padding-top: 20px; border-top: 1px solid #333; text-align: center; color: #666; font-size: 12px;">
        &copy; {year} Stackhouse. Keep Building.
    </div>
</body>
</html>"#,
                name = to_name,
                url = join_link,
                year = chrono::Utc::now().format("%Y"),
            ))
        } else {
            None
        };

        let message = EmailMessage {
            to: to_email.to_string(),
            to_name: Some(to_name.to_string()),
            subject: subject.to_string(),
            body_text,
            body_html,
        };

        self.send(message).await
    }

    /// Console provider - logs email to the log output (for development).
    async fn send_console(&self, message: EmailMessage) -> Result<(), EmailError> {
        info!(
            to = %message.to,
            to_name = ?message.to_name,
            subject = %message.subject,
            from = %self.config.sender_email,
            from_name = %self.config.sender_name,
            "Email (console provider)"
        );

        info!(
            body_text = %message.body_text,
            "Email body (plain text)"
        );

        if let Some(html) = &message.body_html {
            debug!("Email body (HTML) - {} chars", html.len());
        }

        Ok(())
    }

    /// SMTP provider - sends via SMTP server.
    ///
    /// The SMTP transport is not wired up yet (requires the lettre crate).
    /// Until it is, this path fails the send: callers surface the delivery
    /// outcome as an `emailSent` flag, which must not read true when
    /// nothing left the process.
    async fn send_smtp(&self, message: EmailMessage) -> Result<(), EmailError> {
        if self.config.smtp_host.is_empty() {
            return Err(EmailError::NotConfigured);
        }

        warn!(
            provider = "smtp",
            host = %self.config.smtp_host,
            port = %self.config.smtp_port,
            to = %message.to,
            subject = %message.subject,
            "SMTP transport not implemented; email not sent"
        );

        Err(EmailError::SendFailed(
            "SMTP transport not implemented".to_string(),
        ))
    }

    /// SendGrid provider - sends via SendGrid API.
    async fn send_sendgrid(&self, message: EmailMessage) -> Result<(), EmailError> {
        if self.config.sendgrid_api_key.is_empty() {
            return Err(EmailError::NotConfigured);
        }

        let client = reqwest::Client::new();

        let mut personalizations = serde_json::json!({
            "to": [{
                "email": message.to
            }]
        });

        if let Some(name) = &message.to_name {
            personalizations["to"][0]["name"] = serde_json::json!(name);
        }

        let mut body = serde_json::json!({
            "personalizations": [personalizations],
            "from": {
                "email": self.config.sender_email,
                "name": self.config.sender_name
            },
            "subject": message.subject,
            "content": [{
                "type": "text/plain",
                "value": message.body_text
            }]
        });

        if let Some(html) = &message.body_html {
            if let Some(content) = body["content"].as_array_mut() {
                content.push(serde_json::json!({
                    "type": "text/html",
                    "value": html
                }));
            }
        }

        let response = client
            .post("https://api.sendgrid.com/v3/mail/send")
            .header(
                "Authorization",
                format!("Bearer {}", self.config.sendgrid_api_key),
            )
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| EmailError::SendFailed(format!("SendGrid request failed: {}", e)))?;

        if response.status().is_success() {
            info!(
                to = %message.to,
                subject = %message.subject,
                "Email sent via SendGrid"
            );
            Ok(())
        } else {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            error!(
                status = %status,
                error = %error_body,
                "SendGrid API error"
            );
            Err(EmailError::ProviderError(format!(
                "SendGrid returned {}: {}",
                status, error_body
            )))
        }
    }
}

#[async_trait::async_trait]
impl InviteNotifier for EmailService {
    async fn send_invite(&self, email: &str, name: &str, token: &str) -> NotificationResult {
        if !self.is_enabled() {
            return NotificationResult::Skipped;
        }

        match self.send_invite_email(email, name, token).await {
            Ok(()) => NotificationResult::Sent,
            Err(err) => NotificationResult::Failed(err.to_string()),
        }
    }
}
