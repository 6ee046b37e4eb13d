//! Game score aggregate - reaction counts, weighted score, tier, play count

use chrono::{DateTime, Utc};

use crate::value_objects::{
    apply_reaction_change, compute_tier, ReactionCounts, ReactionKind, Snowflake, Tier,
};

/// Aggregated score row for a game
///
/// Derived state: counts feed the weighted score which feeds the tier. The
/// row is recomputed through [`GameScore::apply_reaction`] so the three never
/// drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameScore {
    pub game_id: Snowflake,
    pub counts: ReactionCounts,
    pub total_reactions: u32,
    pub weighted_score: u32,
    pub tier: Tier,
    pub play_count: i64,
    pub updated_at: DateTime<Utc>,
}

impl GameScore {
    /// Empty score row for a game with no activity yet
    pub fn fresh(game_id: Snowflake) -> Self {
        Self {
            game_id,
            counts: ReactionCounts::default(),
            total_reactions: 0,
            weighted_score: 0,
            tier: Tier::New,
            play_count: 0,
            updated_at: Utc::now(),
        }
    }

    /// Rebuild a score row from stored counts
    pub fn from_counts(game_id: Snowflake, counts: ReactionCounts, play_count: i64) -> Self {
        let breakdown = compute_tier(counts);
        Self {
            game_id,
            counts,
            total_reactions: counts.total(),
            weighted_score: breakdown.weighted_score,
            tier: breakdown.tier,
            play_count,
            updated_at: Utc::now(),
        }
    }

    /// Apply one user's reaction transition and recompute the derived fields
    pub fn apply_reaction(&self, old_kind: ReactionKind, new_kind: ReactionKind) -> Self {
        let counts = apply_reaction_change(self.counts, old_kind, new_kind);
        Self::from_counts(self.game_id, counts, self.play_count)
    }

    /// Record one play
    pub fn record_play(&mut self) {
        self.play_count += 1;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_score() {
        let s = GameScore::fresh(Snowflake::new(10));
        assert_eq!(s.tier, Tier::New);
        assert_eq!(s.weighted_score, 0);
        assert_eq!(s.play_count, 0);
    }

    #[test]
    fn test_apply_reaction_recomputes() {
        let s = GameScore::fresh(Snowflake::new(10));
        let s = s.apply_reaction(ReactionKind::None, ReactionKind::Favorite);
        assert_eq!(s.counts.favorite, 1);
        assert_eq!(s.total_reactions, 1);
        assert_eq!(s.weighted_score, 3);
        assert_eq!(s.tier, Tier::New);
    }

    #[test]
    fn test_tier_crosses_threshold() {
        let counts = ReactionCounts::new(0, 2, 0);
        let s = GameScore::from_counts(Snowflake::new(10), counts, 0);
        assert_eq!(s.weighted_score, 4);
        assert_eq!(s.tier, Tier::New);

        let s = s.apply_reaction(ReactionKind::None, ReactionKind::Like);
        assert_eq!(s.weighted_score, 5);
        assert_eq!(s.tier, Tier::C);
    }

    #[test]
    fn test_record_play() {
        let mut s = GameScore::fresh(Snowflake::new(10));
        s.record_play();
        s.record_play();
        assert_eq!(s.play_count, 2);
    }
}
