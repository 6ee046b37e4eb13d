//! Reaction service
//!
//! The one place reaction rows and the score aggregate change together: every
//! transition goes through the counting rules so the stored counts, weighted
//! score, and tier never drift.

use arcade_core::entities::{GameScore, Reaction};
use arcade_core::{ReactionKind, Snowflake};
use tracing::{info, instrument};

use crate::dto::{ReactionStateResponse, ScoreResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The caller's current reaction to a game (`none` when signed out)
    #[instrument(skip(self))]
    pub async fn get_state(
        &self,
        caller_id: Option<Snowflake>,
        game_id: Snowflake,
    ) -> ServiceResult<ReactionStateResponse> {
        let kind = match caller_id {
            Some(user_id) => self
                .ctx
                .reaction_repo()
                .find(user_id, game_id)
                .await?
                .map(|r| r.kind)
                .unwrap_or_default(),
            None => ReactionKind::None,
        };

        Ok(ReactionStateResponse {
            reaction: kind.to_string(),
            score: None,
        })
    }

    /// Set the caller's reaction and recompute the game's score row.
    ///
    /// `none` removes the current reaction; re-sending the current kind
    /// leaves the counts unchanged.
    #[instrument(skip(self))]
    pub async fn set_reaction(
        &self,
        user_id: Snowflake,
        game_id: Snowflake,
        new_kind: ReactionKind,
    ) -> ServiceResult<ReactionStateResponse> {
        let game = self
            .ctx
            .game_repo()
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Game", game_id.to_string()))?;

        let old_kind = self
            .ctx
            .reaction_repo()
            .find(user_id, game_id)
            .await?
            .map(|r| r.kind)
            .unwrap_or_default();

        if new_kind.is_none() {
            self.ctx.reaction_repo().delete(user_id, game_id).await?;
        } else {
            let reaction = Reaction::new(user_id, game_id, new_kind);
            self.ctx.reaction_repo().upsert(&reaction).await?;
        }

        // Derive the new aggregate from the stored one and the transition
        let score = self
            .ctx
            .score_repo()
            .find_by_game(game_id)
            .await?
            .unwrap_or_else(|| GameScore::fresh(game_id));
        let score = score.apply_reaction(old_kind, new_kind);
        self.ctx.score_repo().upsert(&score).await?;

        info!(
            game_id = %game.id,
            old = %old_kind,
            new = %new_kind,
            tier = %score.tier,
            "reaction updated"
        );

        Ok(ReactionStateResponse {
            reaction: new_kind.to_string(),
            score: Some(ScoreResponse::from(&score)),
        })
    }
}
