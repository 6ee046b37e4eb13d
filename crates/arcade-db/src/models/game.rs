//! Game database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for games table
#[derive(Debug, Clone, FromRow)]
pub struct GameModel {
    pub id: i64,
    pub creator_id: i64,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub long_description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub embed_url: String,
    pub status: String,
    pub genres: Vec<String>,
    pub tags: Vec<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
