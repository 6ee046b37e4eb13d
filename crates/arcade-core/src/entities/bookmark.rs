//! Bookmark entity - a game saved to a user's library

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Bookmark edge between a profile and a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub user_id: Snowflake,
    pub game_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    pub fn new(user_id: Snowflake, game_id: Snowflake) -> Self {
        Self {
            user_id,
            game_id,
            created_at: Utc::now(),
        }
    }
}
