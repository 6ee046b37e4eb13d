//! Comment entity <-> model mapper

use arcade_core::entities::Comment;
use arcade_core::Snowflake;

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            game_id: Snowflake::new(model.game_id),
            author_id: Snowflake::new(model.author_id),
            body: model.body,
            parent_id: model.parent_id.map(Snowflake::new),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
