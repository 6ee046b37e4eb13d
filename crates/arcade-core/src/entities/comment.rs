//! Comment entity - a comment on a game, optionally a reply

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Maximum comment length in characters
pub const MAX_COMMENT_LEN: usize = 1000;

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub game_id: Snowflake,
    pub author_id: Snowflake,
    pub body: String,
    pub parent_id: Option<Snowflake>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new top-level Comment
    pub fn new(id: Snowflake, game_id: Snowflake, author_id: Snowflake, body: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            game_id,
            author_id,
            body,
            parent_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a reply to another comment
    pub fn new_reply(
        id: Snowflake,
        game_id: Snowflake,
        author_id: Snowflake,
        body: String,
        parent_id: Snowflake,
    ) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..Self::new(id, game_id, author_id, body)
        }
    }

    /// Check if this comment is a reply
    #[inline]
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }

    /// Check if a profile authored this comment
    #[inline]
    pub fn is_authored_by(&self, profile_id: Snowflake) -> bool {
        self.author_id == profile_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_creation() {
        let c = Comment::new(
            Snowflake::new(1),
            Snowflake::new(10),
            Snowflake::new(100),
            "great game".to_string(),
        );
        assert!(!c.is_reply());
        assert!(c.is_authored_by(Snowflake::new(100)));
    }

    #[test]
    fn test_reply() {
        let c = Comment::new_reply(
            Snowflake::new(2),
            Snowflake::new(10),
            Snowflake::new(100),
            "agreed".to_string(),
            Snowflake::new(1),
        );
        assert!(c.is_reply());
        assert_eq!(c.parent_id, Some(Snowflake::new(1)));
        assert_eq!(c.game_id, Snowflake::new(10));
    }
}
