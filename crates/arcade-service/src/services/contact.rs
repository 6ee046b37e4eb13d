//! Contact form service

use arcade_core::entities::ContactMessage;
use tracing::{info, instrument};

use crate::dto::ContactRequest;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Contact service
pub struct ContactService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ContactService<'a> {
    /// Create a new ContactService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store a contact form message and fire the optional mail notification
    #[instrument(skip(self, request), fields(subject = %request.subject))]
    pub async fn submit(&self, request: ContactRequest) -> ServiceResult<()> {
        let message = ContactMessage::new(
            self.ctx.generate_id(),
            request.name.trim().to_string(),
            request.email.trim().to_lowercase(),
            request.subject.trim().to_string(),
            request.message.trim().to_string(),
        );

        self.ctx.contact_repo().create(&message).await?;

        info!(message_id = %message.id, "contact message stored");

        // Notification failure never surfaces; the message is already saved
        self.ctx.mailer().notify_contact(&message).await;

        Ok(())
    }
}
