//! Game service
//!
//! Creator CRUD, public listings, play tracking, and the trending feed.

use std::collections::HashMap;

use arcade_core::entities::{Game, GameStatus, Profile};
use arcade_core::traits::GameQuery;
use arcade_core::{check_embed_url, slug_suffix, slugify, DomainError, EmbedCheck, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CreateGameRequest, GameCreatedResponse, GameResponse, UpdateGameRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Game service
pub struct GameService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GameService<'a> {
    /// Create a new GameService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit a new game (creator accounts only); starts as a draft
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_game(
        &self,
        creator_id: Snowflake,
        request: CreateGameRequest,
    ) -> ServiceResult<GameCreatedResponse> {
        let creator = self.require_creator(creator_id).await?;

        let embed_warning = match check_embed_url(&request.embed_url) {
            EmbedCheck::Rejected(reason) => {
                return Err(ServiceError::Domain(DomainError::EmbedUrlRejected(reason)));
            }
            EmbedCheck::AllowedWithWarning(warning) => Some(warning),
            EmbedCheck::Allowed => None,
        };

        let slug = self.unique_slug(&request.title).await?;

        let game_id = self.ctx.generate_id();
        let mut game = Game::new(
            game_id,
            creator_id,
            request.title,
            slug,
            request.short_description,
            request.embed_url,
        );
        game.long_description = request.long_description;
        game.thumbnail_url = request.thumbnail_url;
        game.genres = request.genres;
        game.tags = request.tags;

        self.ctx.game_repo().create(&game).await?;

        info!(game_id = %game_id, creator_id = %creator_id, "game created");

        Ok(GameCreatedResponse {
            game: GameResponse::assemble(&game, None, Some(&creator)),
            embed_warning,
        })
    }

    /// Update an existing game; only its creator may edit it
    #[instrument(skip(self, request))]
    pub async fn update_game(
        &self,
        game_id: Snowflake,
        caller_id: Snowflake,
        request: UpdateGameRequest,
    ) -> ServiceResult<GameResponse> {
        let mut game = self.require_game(game_id).await?;
        if !game.is_owned_by(caller_id) {
            return Err(ServiceError::Domain(DomainError::NotGameCreator));
        }

        if let Some(embed_url) = request.embed_url {
            if let EmbedCheck::Rejected(reason) = check_embed_url(&embed_url) {
                return Err(ServiceError::Domain(DomainError::EmbedUrlRejected(reason)));
            }
            game.embed_url = embed_url;
        }
        if let Some(title) = request.title {
            game.title = title;
        }
        if let Some(short_description) = request.short_description {
            game.short_description = short_description;
        }
        if let Some(long_description) = request.long_description {
            game.long_description = Some(long_description);
        }
        if let Some(thumbnail_url) = request.thumbnail_url {
            game.thumbnail_url = Some(thumbnail_url);
        }
        if let Some(genres) = request.genres {
            game.genres = genres;
        }
        if let Some(tags) = request.tags {
            game.tags = tags;
        }
        if let Some(status) = request.status {
            match GameStatus::parse(&status) {
                Some(GameStatus::Published) => game.publish(),
                Some(GameStatus::Unlisted) => game.unlist(),
                Some(GameStatus::Draft) => game.status = GameStatus::Draft,
                None => {
                    return Err(ServiceError::validation(format!("Unknown status: {status}")));
                }
            }
        }
        game.updated_at = chrono::Utc::now();

        self.ctx.game_repo().update(&game).await?;

        info!(game_id = %game_id, "game updated");

        let score = self.ctx.score_repo().find_by_game(game_id).await?;
        Ok(GameResponse::assemble(&game, score.as_ref(), None))
    }

    /// Delete a game; its creator or an admin
    #[instrument(skip(self))]
    pub async fn delete_game(&self, game_id: Snowflake, caller_id: Snowflake) -> ServiceResult<()> {
        let game = self.require_game(game_id).await?;

        if !game.is_owned_by(caller_id) {
            let caller = self
                .ctx
                .profile_repo()
                .find_by_id(caller_id)
                .await?
                .ok_or_else(|| ServiceError::not_found("Profile", caller_id.to_string()))?;
            if !caller.is_admin {
                return Err(ServiceError::Domain(DomainError::NotGameCreator));
            }
        }

        self.ctx.game_repo().delete(game_id).await?;
        info!(game_id = %game_id, "game deleted");
        Ok(())
    }

    /// Game page by slug; drafts are visible only to their creator
    #[instrument(skip(self))]
    pub async fn get_by_slug(
        &self,
        slug: &str,
        caller_id: Option<Snowflake>,
    ) -> ServiceResult<GameResponse> {
        let game = self
            .ctx
            .game_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::not_found("Game", slug))?;

        if game.status == GameStatus::Draft && caller_id != Some(game.creator_id) {
            return Err(ServiceError::not_found("Game", slug));
        }

        let score = self.ctx.score_repo().find_by_game(game.id).await?;
        let creator = self.ctx.profile_repo().find_by_id(game.creator_id).await?;

        Ok(GameResponse::assemble(&game, score.as_ref(), creator.as_ref()))
    }

    /// Count one play of a game
    #[instrument(skip(self))]
    pub async fn record_play(&self, game_id: Snowflake) -> ServiceResult<()> {
        self.require_game(game_id).await?;
        self.ctx.score_repo().record_play(game_id).await?;
        Ok(())
    }

    /// Published games, optionally filtered by genre, newest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        genre: Option<String>,
        limit: i64,
        offset: i64,
    ) -> ServiceResult<Vec<GameResponse>> {
        let games = self
            .ctx
            .game_repo()
            .list(GameQuery {
                genre,
                limit,
                offset,
                ..GameQuery::default()
            })
            .await?;

        self.assemble_listing(games).await
    }

    /// The caller's own games, drafts included
    #[instrument(skip(self))]
    pub async fn list_mine(&self, caller_id: Snowflake) -> ServiceResult<Vec<GameResponse>> {
        let games = self
            .ctx
            .game_repo()
            .list(GameQuery {
                creator_id: Some(caller_id),
                include_unpublished: true,
                limit: 100,
                ..GameQuery::default()
            })
            .await?;

        self.assemble_listing(games).await
    }

    /// Most played games; games without score rows fill the tail, newest first
    #[instrument(skip(self))]
    pub async fn trending(&self, limit: i64) -> ServiceResult<Vec<GameResponse>> {
        let top_scores = self.ctx.score_repo().top_by_plays(limit).await?;
        let scored_ids: Vec<Snowflake> = top_scores.iter().map(|s| s.game_id).collect();

        let mut games = self.ctx.game_repo().find_many(&scored_ids).await?;
        games.retain(Game::is_published);

        // Preserve play-count order for the scored games
        let order: HashMap<Snowflake, usize> = scored_ids
            .iter()
            .enumerate()
            .map(|(i, id)| (*id, i))
            .collect();
        games.sort_by_key(|g| order.get(&g.id).copied().unwrap_or(usize::MAX));

        // Top up with unscored games
        if (games.len() as i64) < limit {
            let fill = self
                .ctx
                .game_repo()
                .list(GameQuery {
                    limit,
                    ..GameQuery::default()
                })
                .await?;
            for game in fill {
                if games.len() as i64 >= limit {
                    break;
                }
                if !games.iter().any(|g| g.id == game.id) {
                    games.push(game);
                }
            }
        }

        self.assemble_listing(games).await
    }

    /// Resolve scores and creators for a batch of games
    async fn assemble_listing(&self, games: Vec<Game>) -> ServiceResult<Vec<GameResponse>> {
        let game_ids: Vec<Snowflake> = games.iter().map(|g| g.id).collect();
        let scores = self.ctx.score_repo().find_many(&game_ids).await?;

        let mut creators: HashMap<Snowflake, Profile> = HashMap::new();
        for game in &games {
            if !creators.contains_key(&game.creator_id) {
                if let Some(profile) =
                    self.ctx.profile_repo().find_by_id(game.creator_id).await?
                {
                    creators.insert(game.creator_id, profile);
                }
            }
        }

        Ok(games
            .iter()
            .map(|game| {
                let score = scores.iter().find(|s| s.game_id == game.id);
                GameResponse::assemble(game, score, creators.get(&game.creator_id))
            })
            .collect())
    }

    /// Slugify a title, appending a random suffix while the slug is taken
    async fn unique_slug(&self, title: &str) -> ServiceResult<String> {
        let base = slugify(title);
        let base = if base.is_empty() { "game".to_string() } else { base };

        if !self.ctx.game_repo().slug_exists(&base).await? {
            return Ok(base);
        }

        // A random suffix collision twice in a row is vanishingly unlikely,
        // but the loop is bounded anyway.
        for _ in 0..4 {
            let candidate = format!("{base}-{}", slug_suffix());
            if !self.ctx.game_repo().slug_exists(&candidate).await? {
                return Ok(candidate);
            }
        }

        Err(ServiceError::internal("could not allocate a unique slug"))
    }

    async fn require_game(&self, game_id: Snowflake) -> ServiceResult<Game> {
        self.ctx
            .game_repo()
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Game", game_id.to_string()))
    }

    async fn require_creator(&self, profile_id: Snowflake) -> ServiceResult<Profile> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(profile_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", profile_id.to_string()))?;

        if !profile.is_creator {
            return Err(ServiceError::Domain(DomainError::CreatorRequired));
        }
        Ok(profile)
    }
}
