//! Contact message entity <-> model mapper

use arcade_core::entities::ContactMessage;
use arcade_core::Snowflake;

use crate::models::ContactMessageModel;

impl From<ContactMessageModel> for ContactMessage {
    fn from(model: ContactMessageModel) -> Self {
        ContactMessage {
            id: Snowflake::new(model.id),
            name: model.name,
            email: model.email,
            subject: model.subject,
            message: model.message,
            created_at: model.created_at,
        }
    }
}
