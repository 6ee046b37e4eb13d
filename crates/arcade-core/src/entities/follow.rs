//! Follow entity - one profile following another

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Follow edge between two profiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Follow {
    pub follower_id: Snowflake,
    pub followed_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Follow {
    pub fn new(follower_id: Snowflake, followed_id: Snowflake) -> Self {
        Self {
            follower_id,
            followed_id,
            created_at: Utc::now(),
        }
    }
}
