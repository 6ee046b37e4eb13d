//! Bookmark entity <-> model mapper

use arcade_core::entities::Bookmark;
use arcade_core::Snowflake;

use crate::models::BookmarkModel;

impl From<BookmarkModel> for Bookmark {
    fn from(model: BookmarkModel) -> Self {
        Bookmark {
            user_id: Snowflake::new(model.user_id),
            game_id: Snowflake::new(model.game_id),
            created_at: model.created_at,
        }
    }
}
