//! Contact message database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for contact_messages table
#[derive(Debug, Clone, FromRow)]
pub struct ContactMessageModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
