//! Outbound mail notifications
//!
//! Posts to an HTTP mail API when configured. Notification failures are
//! logged and swallowed: the message is already stored in the database, so
//! the user's submission never fails on mail trouble.

use arcade_common::config::MailConfig;
use arcade_core::entities::ContactMessage;
use serde_json::json;
use tracing::{debug, warn};

const MAIL_API_URL: &str = "https://api.resend.com/emails";

/// Outbound mail notifier
pub struct Mailer {
    client: reqwest::Client,
    config: MailConfig,
}

impl Mailer {
    /// Create a mailer from configuration
    pub fn new(config: MailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Mailer that never sends (tests, unconfigured deployments)
    pub fn disabled() -> Self {
        Self::new(MailConfig::default())
    }

    /// Whether notifications will actually go out
    pub fn is_enabled(&self) -> bool {
        self.config.is_configured()
    }

    /// Notify the site operator about a contact form message
    pub async fn notify_contact(&self, message: &ContactMessage) {
        let (Some(api_key), Some(to)) = (&self.config.api_key, &self.config.to) else {
            debug!("mail not configured, skipping contact notification");
            return;
        };

        let body = json!({
            "from": self.config.from,
            "to": to,
            "subject": format!("[Contact] {}", message.subject),
            "text": format!(
                "From: {} ({})\n\n{}",
                message.name, message.email, message.message
            ),
        });

        let result = self
            .client
            .post(MAIL_API_URL)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                debug!(message_id = %message.id, "contact notification sent");
            }
            Ok(response) => {
                warn!(status = %response.status(), "mail API rejected contact notification");
            }
            Err(e) => {
                warn!(error = %e, "failed to send contact notification");
            }
        }
    }
}

impl std::fmt::Debug for Mailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mailer")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_mailer() {
        assert!(!Mailer::disabled().is_enabled());
    }

    #[tokio::test]
    async fn test_notify_without_config_is_a_noop() {
        use arcade_core::Snowflake;

        let mailer = Mailer::disabled();
        let message = ContactMessage::new(
            Snowflake::new(1),
            "Ada".to_string(),
            "ada@example.com".to_string(),
            "Hello".to_string(),
            "Just saying hi".to_string(),
        );

        // Must return without touching the network
        mailer.notify_contact(&message).await;
    }
}
