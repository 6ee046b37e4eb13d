//! Reaction entity <-> model mapper

use arcade_core::entities::Reaction;
use arcade_core::{ReactionKind, Snowflake};

use crate::models::ReactionModel;

impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            user_id: Snowflake::new(model.user_id),
            game_id: Snowflake::new(model.game_id),
            // Unknown kind strings read back as no reaction
            kind: ReactionKind::parse(&model.kind).unwrap_or_default(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
