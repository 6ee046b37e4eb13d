//! Reaction entity - a user's single reaction to a game

use chrono::{DateTime, Utc};

use crate::value_objects::{ReactionKind, Snowflake};

/// Reaction entity
///
/// At most one row exists per (user, game); changing sentiment updates the
/// row in place rather than adding a second one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub user_id: Snowflake,
    pub game_id: Snowflake,
    pub kind: ReactionKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(user_id: Snowflake, game_id: Snowflake, kind: ReactionKind) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            game_id,
            kind,
            created_at: now,
            updated_at: now,
        }
    }

    /// Change the reaction kind
    pub fn set_kind(&mut self, kind: ReactionKind) {
        self.kind = kind;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaction_creation() {
        let r = Reaction::new(Snowflake::new(100), Snowflake::new(10), ReactionKind::Love);
        assert_eq!(r.kind, ReactionKind::Love);
    }

    #[test]
    fn test_set_kind() {
        let mut r = Reaction::new(Snowflake::new(100), Snowflake::new(10), ReactionKind::Like);
        r.set_kind(ReactionKind::Favorite);
        assert_eq!(r.kind, ReactionKind::Favorite);
    }
}
