//! Game scoring - reaction counts, weighted score, and tier classification
//!
//! A user holds at most one reaction per game. Handlers translate a reaction
//! transition into count deltas here, then persist the resulting aggregate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user's current sentiment toward a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    #[default]
    None,
    Like,
    Love,
    Favorite,
}

impl ReactionKind {
    /// Parse from the wire/database representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "like" => Some(Self::Like),
            "love" => Some(Self::Love),
            "favorite" => Some(Self::Favorite),
            _ => None,
        }
    }

    /// Wire/database representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Like => "like",
            Self::Love => "love",
            Self::Favorite => "favorite",
        }
    }

    /// Whether this represents the absence of a reaction
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-kind reaction counts for a game
///
/// Fields are unsigned; decrements saturate at zero so a lost or duplicated
/// delta can never drive an aggregate negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReactionCounts {
    pub like: u32,
    pub love: u32,
    pub favorite: u32,
}

impl ReactionCounts {
    pub const fn new(like: u32, love: u32, favorite: u32) -> Self {
        Self {
            like,
            love,
            favorite,
        }
    }

    /// Total number of reactions across all kinds
    #[inline]
    pub const fn total(&self) -> u32 {
        self.like + self.love + self.favorite
    }

    fn decrement(&mut self, kind: ReactionKind) {
        match kind {
            ReactionKind::None => {}
            ReactionKind::Like => self.like = self.like.saturating_sub(1),
            ReactionKind::Love => self.love = self.love.saturating_sub(1),
            ReactionKind::Favorite => self.favorite = self.favorite.saturating_sub(1),
        }
    }

    fn increment(&mut self, kind: ReactionKind) {
        match kind {
            ReactionKind::None => {}
            ReactionKind::Like => self.like += 1,
            ReactionKind::Love => self.love += 1,
            ReactionKind::Favorite => self.favorite += 1,
        }
    }
}

/// Apply a single user's reaction transition to a game's aggregate counts.
///
/// Re-selecting the same kind is a net no-op; toggling a reaction off is
/// expressed by the caller as `new_kind = None`.
pub fn apply_reaction_change(
    previous: ReactionCounts,
    old_kind: ReactionKind,
    new_kind: ReactionKind,
) -> ReactionCounts {
    let mut counts = previous;
    counts.decrement(old_kind);
    counts.increment(new_kind);
    counts
}

/// Tier label derived from the weighted score
///
/// Ordered: `New < C < B < A < S`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "NEW")]
    New,
    C,
    B,
    A,
    S,
}

impl Tier {
    /// Classify a weighted score, highest threshold first
    pub fn from_score(weighted_score: u32) -> Self {
        match weighted_score {
            s if s >= 100 => Self::S,
            s if s >= 50 => Self::A,
            s if s >= 20 => Self::B,
            s if s >= 5 => Self::C,
            _ => Self::New,
        }
    }

    /// Label as stored and displayed
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::C => "C",
            Self::B => "B",
            Self::A => "A",
            Self::S => "S",
        }
    }

    /// Parse the stored label
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "NEW" => Some(Self::New),
            "C" => Some(Self::C),
            "B" => Some(Self::B),
            "A" => Some(Self::A),
            "S" => Some(Self::S),
            _ => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weighted score and tier for a set of counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub weighted_score: u32,
    pub tier: Tier,
}

/// Compute the weighted score (like=1, love=2, favorite=3) and its tier
pub fn compute_tier(counts: ReactionCounts) -> ScoreBreakdown {
    let weighted_score = counts.like + counts.love * 2 + counts.favorite * 3;
    ScoreBreakdown {
        weighted_score,
        tier: Tier::from_score(weighted_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in [
            ReactionKind::None,
            ReactionKind::Like,
            ReactionKind::Love,
            ReactionKind::Favorite,
        ] {
            assert_eq!(ReactionKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(ReactionKind::parse("dislike"), None);
    }

    #[test]
    fn test_add_and_remove_round_trips() {
        let start = ReactionCounts::new(3, 1, 2);
        let added = apply_reaction_change(start, ReactionKind::None, ReactionKind::Like);
        assert_eq!(added.like, 4);

        let removed = apply_reaction_change(added, ReactionKind::Like, ReactionKind::None);
        assert_eq!(removed, start);
    }

    #[test]
    fn test_switch_moves_one_count() {
        let start = ReactionCounts::new(1, 0, 0);
        let switched = apply_reaction_change(start, ReactionKind::Like, ReactionKind::Favorite);
        assert_eq!(switched, ReactionCounts::new(0, 0, 1));
    }

    #[test]
    fn test_reselect_is_noop() {
        let start = ReactionCounts::new(2, 5, 1);
        let next = apply_reaction_change(start, ReactionKind::Love, ReactionKind::Love);
        assert_eq!(next, start);
    }

    #[test]
    fn test_decrement_clamps_at_zero() {
        let start = ReactionCounts::default();
        let next = apply_reaction_change(start, ReactionKind::Favorite, ReactionKind::None);
        assert_eq!(next, ReactionCounts::default());
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(compute_tier(ReactionCounts::new(0, 0, 0)).weighted_score, 0);
        assert_eq!(compute_tier(ReactionCounts::new(0, 0, 0)).tier, Tier::New);

        let c = compute_tier(ReactionCounts::new(5, 0, 0));
        assert_eq!((c.weighted_score, c.tier), (5, Tier::C));

        let a = compute_tier(ReactionCounts::new(0, 10, 10));
        assert_eq!((a.weighted_score, a.tier), (50, Tier::A));

        let s = compute_tier(ReactionCounts::new(100, 0, 0));
        assert_eq!((s.weighted_score, s.tier), (100, Tier::S));
    }

    #[test]
    fn test_tier_just_below_thresholds() {
        assert_eq!(compute_tier(ReactionCounts::new(4, 0, 0)).tier, Tier::New);
        assert_eq!(compute_tier(ReactionCounts::new(19, 0, 0)).tier, Tier::C);
        assert_eq!(compute_tier(ReactionCounts::new(49, 0, 0)).tier, Tier::B);
        assert_eq!(compute_tier(ReactionCounts::new(99, 0, 0)).tier, Tier::A);
    }

    #[test]
    fn test_score_is_monotonic_per_kind() {
        let base = ReactionCounts::new(4, 7, 2);
        let base_score = compute_tier(base);

        for bumped in [
            ReactionCounts::new(5, 7, 2),
            ReactionCounts::new(4, 8, 2),
            ReactionCounts::new(4, 7, 3),
        ] {
            let next = compute_tier(bumped);
            assert!(next.weighted_score > base_score.weighted_score);
            assert!(next.tier >= base_score.tier);
        }
    }

    #[test]
    fn test_weights() {
        assert_eq!(compute_tier(ReactionCounts::new(1, 0, 0)).weighted_score, 1);
        assert_eq!(compute_tier(ReactionCounts::new(0, 1, 0)).weighted_score, 2);
        assert_eq!(compute_tier(ReactionCounts::new(0, 0, 1)).weighted_score, 3);
    }

    #[test]
    fn test_tier_ordering() {
        assert!(Tier::New < Tier::C);
        assert!(Tier::C < Tier::B);
        assert!(Tier::B < Tier::A);
        assert!(Tier::A < Tier::S);
    }
}
