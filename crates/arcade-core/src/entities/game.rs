//! Game entity - an embedded HTML5 game listed on the portal

use chrono::{DateTime, Utc};
use std::fmt;

use crate::value_objects::Snowflake;

/// Publication status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Draft,
    Published,
    /// Reachable by direct link, hidden from listings
    Unlisted,
}

impl GameStatus {
    /// Database representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Unlisted => "unlisted",
        }
    }

    /// Parse the database representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(Self::Draft),
            "published" => Some(Self::Published),
            "unlisted" => Some(Self::Unlisted),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: Snowflake,
    pub creator_id: Snowflake,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub long_description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub embed_url: String,
    pub status: GameStatus,
    pub genres: Vec<String>,
    pub tags: Vec<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    /// Create a new draft Game
    pub fn new(
        id: Snowflake,
        creator_id: Snowflake,
        title: String,
        slug: String,
        short_description: String,
        embed_url: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            creator_id,
            title,
            slug,
            short_description,
            long_description: None,
            thumbnail_url: None,
            embed_url,
            status: GameStatus::Draft,
            genres: Vec::new(),
            tags: Vec::new(),
            published_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the game shows up in public listings
    #[inline]
    pub fn is_published(&self) -> bool {
        self.status == GameStatus::Published
    }

    /// Check if a profile may edit this game
    #[inline]
    pub fn is_owned_by(&self, profile_id: Snowflake) -> bool {
        self.creator_id == profile_id
    }

    /// Move the game to published, stamping `published_at` on first publish
    pub fn publish(&mut self) {
        self.status = GameStatus::Published;
        if self.published_at.is_none() {
            self.published_at = Some(Utc::now());
        }
        self.updated_at = Utc::now();
    }

    /// Pull the game from listings without deleting it
    pub fn unlist(&mut self) {
        self.status = GameStatus::Unlisted;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::new(
            Snowflake::new(10),
            Snowflake::new(1),
            "Star Hopper".to_string(),
            "star-hopper".to_string(),
            "Hop between stars".to_string(),
            "https://games.example.dev/star-hopper/".to_string(),
        )
    }

    #[test]
    fn test_new_game_is_draft() {
        let g = game();
        assert_eq!(g.status, GameStatus::Draft);
        assert!(!g.is_published());
        assert!(g.published_at.is_none());
    }

    #[test]
    fn test_publish_stamps_once() {
        let mut g = game();
        g.publish();
        let first = g.published_at;
        assert!(first.is_some());

        g.unlist();
        g.publish();
        assert_eq!(g.published_at, first);
    }

    #[test]
    fn test_ownership() {
        let g = game();
        assert!(g.is_owned_by(Snowflake::new(1)));
        assert!(!g.is_owned_by(Snowflake::new(2)));
    }

    #[test]
    fn test_status_round_trip() {
        for status in [GameStatus::Draft, GameStatus::Published, GameStatus::Unlisted] {
            assert_eq!(GameStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(GameStatus::parse("archived"), None);
    }
}
