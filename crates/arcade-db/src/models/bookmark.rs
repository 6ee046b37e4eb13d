//! Bookmark database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for bookmarks table
#[derive(Debug, Clone, FromRow)]
pub struct BookmarkModel {
    pub user_id: i64,
    pub game_id: i64,
    pub created_at: DateTime<Utc>,
}
