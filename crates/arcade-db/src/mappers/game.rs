//! Game entity <-> model mapper

use arcade_core::entities::{Game, GameStatus};
use arcade_core::Snowflake;

use crate::models::GameModel;

impl From<GameModel> for Game {
    fn from(model: GameModel) -> Self {
        Game {
            id: Snowflake::new(model.id),
            creator_id: Snowflake::new(model.creator_id),
            title: model.title,
            slug: model.slug,
            short_description: model.short_description,
            long_description: model.long_description,
            thumbnail_url: model.thumbnail_url,
            embed_url: model.embed_url,
            // Unknown status strings demote the game to draft rather than failing the row
            status: GameStatus::parse(&model.status).unwrap_or_default(),
            genres: model.genres,
            tags: model.tags,
            published_at: model.published_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
