//! Game score database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for game_scores table
#[derive(Debug, Clone, FromRow)]
pub struct GameScoreModel {
    pub game_id: i64,
    pub like_count: i32,
    pub love_count: i32,
    pub favorite_count: i32,
    pub total_reactions: i32,
    pub weighted_score: i32,
    pub tier: String,
    pub play_count: i64,
    pub updated_at: DateTime<Utc>,
}
