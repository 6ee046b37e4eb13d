//! Game score entity <-> model mapper

use arcade_core::entities::GameScore;
use arcade_core::{ReactionCounts, Snowflake, Tier};

use crate::models::GameScoreModel;

impl From<GameScoreModel> for GameScore {
    fn from(model: GameScoreModel) -> Self {
        // Counts are non-negative by schema; clamp anyway so a bad row cannot
        // produce a wrapped unsigned value.
        let counts = ReactionCounts::new(
            model.like_count.max(0) as u32,
            model.love_count.max(0) as u32,
            model.favorite_count.max(0) as u32,
        );

        GameScore {
            game_id: Snowflake::new(model.game_id),
            counts,
            total_reactions: model.total_reactions.max(0) as u32,
            weighted_score: model.weighted_score.max(0) as u32,
            tier: Tier::parse(&model.tier).unwrap_or(Tier::New),
            play_count: model.play_count,
            updated_at: model.updated_at,
        }
    }
}
