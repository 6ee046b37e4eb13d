//! Collection database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for collections table
#[derive(Debug, Clone, FromRow)]
pub struct CollectionModel {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Collection row joined with its game count
#[derive(Debug, Clone, FromRow)]
pub struct CollectionWithCountModel {
    #[sqlx(flatten)]
    pub collection: CollectionModel,
    pub game_count: i64,
}

/// Database model for collection_games table
#[derive(Debug, Clone, FromRow)]
pub struct CollectionEntryModel {
    pub collection_id: i64,
    pub game_id: i64,
    pub position: i32,
    pub added_at: DateTime<Utc>,
}
