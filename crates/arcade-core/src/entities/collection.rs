//! Collection entity - a curated playlist of games

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Collection entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub id: Snowflake,
    pub owner_id: Snowflake,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Collection {
    /// Create a new public Collection
    pub fn new(id: Snowflake, owner_id: Snowflake, title: String, slug: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            owner_id,
            title,
            slug,
            description: None,
            cover_url: None,
            is_public: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if a profile owns this collection
    #[inline]
    pub fn is_owned_by(&self, profile_id: Snowflake) -> bool {
        self.owner_id == profile_id
    }

    /// Check if a profile may view this collection
    pub fn is_visible_to(&self, profile_id: Option<Snowflake>) -> bool {
        self.is_public || profile_id.is_some_and(|id| self.is_owned_by(id))
    }
}

/// Ordered membership of a game in a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionEntry {
    pub collection_id: Snowflake,
    pub game_id: Snowflake,
    pub position: i32,
    pub added_at: DateTime<Utc>,
}

impl CollectionEntry {
    pub fn new(collection_id: Snowflake, game_id: Snowflake, position: i32) -> Self {
        Self {
            collection_id,
            game_id,
            position,
            added_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection() -> Collection {
        Collection::new(
            Snowflake::new(1),
            Snowflake::new(100),
            "Cozy puzzlers".to_string(),
            "cozy-puzzlers".to_string(),
        )
    }

    #[test]
    fn test_public_visible_to_anyone() {
        let c = collection();
        assert!(c.is_visible_to(None));
        assert!(c.is_visible_to(Some(Snowflake::new(7))));
    }

    #[test]
    fn test_private_visible_to_owner_only() {
        let mut c = collection();
        c.is_public = false;
        assert!(!c.is_visible_to(None));
        assert!(!c.is_visible_to(Some(Snowflake::new(7))));
        assert!(c.is_visible_to(Some(Snowflake::new(100))));
    }
}
