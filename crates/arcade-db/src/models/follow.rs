//! Follow database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for follows table
#[derive(Debug, Clone, FromRow)]
pub struct FollowModel {
    pub follower_id: i64,
    pub followed_id: i64,
    pub created_at: DateTime<Utc>,
}
