//! Collection entity <-> model mappers

use arcade_core::entities::{Collection, CollectionEntry};
use arcade_core::Snowflake;

use crate::models::{CollectionEntryModel, CollectionModel};

impl From<CollectionModel> for Collection {
    fn from(model: CollectionModel) -> Self {
        Collection {
            id: Snowflake::new(model.id),
            owner_id: Snowflake::new(model.owner_id),
            title: model.title,
            slug: model.slug,
            description: model.description,
            cover_url: model.cover_url,
            is_public: model.is_public,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<CollectionEntryModel> for CollectionEntry {
    fn from(model: CollectionEntryModel) -> Self {
        CollectionEntry {
            collection_id: Snowflake::new(model.collection_id),
            game_id: Snowflake::new(model.game_id),
            position: model.position,
            added_at: model.added_at,
        }
    }
}
