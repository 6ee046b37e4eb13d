//! Comment service

use std::collections::HashMap;

use arcade_core::entities::{Comment, Profile};
use arcade_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CommentResponse, CreateCommentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// A game's comments with their authors, oldest first
    #[instrument(skip(self))]
    pub async fn list_by_game(&self, game_id: Snowflake) -> ServiceResult<Vec<CommentResponse>> {
        let comments = self.ctx.comment_repo().list_by_game(game_id).await?;

        let mut authors: HashMap<Snowflake, Profile> = HashMap::new();
        for comment in &comments {
            if !authors.contains_key(&comment.author_id) {
                if let Some(profile) =
                    self.ctx.profile_repo().find_by_id(comment.author_id).await?
                {
                    authors.insert(comment.author_id, profile);
                }
            }
        }

        Ok(comments
            .iter()
            .filter_map(|comment| {
                authors
                    .get(&comment.author_id)
                    .map(|author| CommentResponse::assemble(comment, author))
            })
            .collect())
    }

    /// Post a comment (or reply) on a game
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        game_id: Snowflake,
        author_id: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let game = self
            .ctx
            .game_repo()
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Game", game_id.to_string()))?;

        if !game.is_published() {
            return Err(ServiceError::Domain(DomainError::GameNotPublished));
        }

        let body = request.body.trim().to_string();
        if body.is_empty() {
            return Err(ServiceError::validation("Comment cannot be empty"));
        }

        let parent_id = match request.parent_id {
            Some(raw) => {
                let parent_id: Snowflake = raw
                    .parse()
                    .map_err(|_| ServiceError::validation("Invalid parent_id"))?;
                let parent = self
                    .ctx
                    .comment_repo()
                    .find_by_id(parent_id)
                    .await?
                    .ok_or_else(|| ServiceError::not_found("Comment", raw.clone()))?;
                if parent.game_id != game_id {
                    return Err(ServiceError::Domain(DomainError::CommentGameMismatch));
                }
                Some(parent_id)
            }
            None => None,
        };

        let comment_id = self.ctx.generate_id();
        let comment = match parent_id {
            Some(parent_id) => Comment::new_reply(comment_id, game_id, author_id, body, parent_id),
            None => Comment::new(comment_id, game_id, author_id, body),
        };

        self.ctx.comment_repo().create(&comment).await?;

        let author = self
            .ctx
            .profile_repo()
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| ServiceError::internal("comment author not found"))?;

        info!(comment_id = %comment_id, game_id = %game_id, "comment posted");

        Ok(CommentResponse::assemble(&comment, &author))
    }

    /// Delete a comment; its author or an admin
    #[instrument(skip(self))]
    pub async fn delete(&self, comment_id: Snowflake, caller_id: Snowflake) -> ServiceResult<()> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;

        if !comment.is_authored_by(caller_id) {
            let caller = self
                .ctx
                .profile_repo()
                .find_by_id(caller_id)
                .await?
                .ok_or_else(|| ServiceError::not_found("Profile", caller_id.to_string()))?;
            if !caller.is_admin {
                return Err(ServiceError::Domain(DomainError::NotCommentAuthor));
            }
        }

        self.ctx.comment_repo().delete(comment_id).await?;
        info!(comment_id = %comment_id, "comment deleted");
        Ok(())
    }
}
