//! Library service - bookmarks and the caller's saved games

use std::collections::HashMap;

use arcade_core::entities::{Bookmark, Game};
use arcade_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{BookmarkStateResponse, GameResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Library service
pub struct LibraryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LibraryService<'a> {
    /// Create a new LibraryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Bookmark state between the caller and a game
    #[instrument(skip(self))]
    pub async fn get_state(
        &self,
        caller_id: Option<Snowflake>,
        game_id: Snowflake,
    ) -> ServiceResult<BookmarkStateResponse> {
        let bookmarked = match caller_id {
            Some(user_id) => self
                .ctx
                .bookmark_repo()
                .find(user_id, game_id)
                .await?
                .is_some(),
            None => false,
        };

        Ok(BookmarkStateResponse { bookmarked })
    }

    /// Toggle a bookmark
    #[instrument(skip(self))]
    pub async fn toggle(
        &self,
        user_id: Snowflake,
        game_id: Snowflake,
    ) -> ServiceResult<BookmarkStateResponse> {
        // Game must exist
        self.ctx
            .game_repo()
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Game", game_id.to_string()))?;

        let bookmarked = match self.ctx.bookmark_repo().find(user_id, game_id).await? {
            Some(_) => {
                self.ctx.bookmark_repo().delete(user_id, game_id).await?;
                false
            }
            None => {
                let bookmark = Bookmark::new(user_id, game_id);
                self.ctx.bookmark_repo().create(&bookmark).await?;
                true
            }
        };

        info!(user_id = %user_id, game_id = %game_id, bookmarked, "bookmark toggled");

        Ok(BookmarkStateResponse { bookmarked })
    }

    /// The caller's bookmarked published games, most recently saved first
    #[instrument(skip(self))]
    pub async fn list_library(&self, user_id: Snowflake) -> ServiceResult<Vec<GameResponse>> {
        let game_ids = self.ctx.bookmark_repo().list_game_ids(user_id).await?;
        let games = self.ctx.game_repo().find_many(&game_ids).await?;

        // find_many gives no ordering; restore bookmark order and drop
        // anything unpublished since it was saved
        let by_id: HashMap<Snowflake, Game> = games
            .into_iter()
            .filter(Game::is_published)
            .map(|g| (g.id, g))
            .collect();
        let games: Vec<Game> = game_ids
            .iter()
            .filter_map(|id| by_id.get(id).cloned())
            .collect();

        let scores = self
            .ctx
            .score_repo()
            .find_many(&games.iter().map(|g| g.id).collect::<Vec<_>>())
            .await?;

        Ok(games
            .iter()
            .map(|game| {
                let score = scores.iter().find(|s| s.game_id == game.id);
                GameResponse::assemble(game, score, None)
            })
            .collect())
    }
}
