//! Collection service - curated playlists of games

use arcade_core::entities::{Collection, CollectionEntry, Game};
use arcade_core::{slug_suffix, slugify, DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    AddCollectionGameRequest, CollectionDetailResponse, CollectionResponse,
    CreateCollectionRequest, GameResponse, UpdateCollectionRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Collection service
pub struct CollectionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CollectionService<'a> {
    /// Create a new CollectionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Public collections with game counts, newest first
    #[instrument(skip(self))]
    pub async fn list_public(&self, limit: i64) -> ServiceResult<Vec<CollectionResponse>> {
        let collections = self.ctx.collection_repo().list_public(limit).await?;
        Ok(collections
            .iter()
            .map(|(collection, count)| CollectionResponse::assemble(collection, *count))
            .collect())
    }

    /// A collection page by slug with its games; private ones only for the owner
    #[instrument(skip(self))]
    pub async fn get_by_slug(
        &self,
        slug: &str,
        caller_id: Option<Snowflake>,
    ) -> ServiceResult<CollectionDetailResponse> {
        let collection = self
            .ctx
            .collection_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::not_found("Collection", slug))?;

        if !collection.is_visible_to(caller_id) {
            return Err(ServiceError::not_found("Collection", slug));
        }

        let entries = self.ctx.collection_repo().list_entries(collection.id).await?;
        let game_ids: Vec<Snowflake> = entries.iter().map(|e| e.game_id).collect();
        let mut games = self.ctx.game_repo().find_many(&game_ids).await?;
        games.retain(Game::is_published);

        // find_many gives no ordering; restore entry order
        games.sort_by_key(|g| {
            entries
                .iter()
                .position(|e| e.game_id == g.id)
                .unwrap_or(usize::MAX)
        });

        let scores = self
            .ctx
            .score_repo()
            .find_many(&games.iter().map(|g| g.id).collect::<Vec<_>>())
            .await?;

        let game_responses = games
            .iter()
            .map(|game| {
                let score = scores.iter().find(|s| s.game_id == game.id);
                GameResponse::assemble(game, score, None)
            })
            .collect();

        Ok(CollectionDetailResponse {
            collection: CollectionResponse::assemble(&collection, games.len() as i64),
            games: game_responses,
        })
    }

    /// Create a collection owned by the caller
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(
        &self,
        owner_id: Snowflake,
        request: CreateCollectionRequest,
    ) -> ServiceResult<CollectionResponse> {
        let slug = self.unique_slug(&request.title).await?;

        let collection_id = self.ctx.generate_id();
        let mut collection = Collection::new(collection_id, owner_id, request.title, slug);
        collection.description = request.description;
        collection.cover_url = request.cover_url;
        collection.is_public = request.is_public;

        self.ctx.collection_repo().create(&collection).await?;

        info!(collection_id = %collection_id, owner_id = %owner_id, "collection created");

        Ok(CollectionResponse::assemble(&collection, 0))
    }

    /// Update a collection; owner only
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        collection_id: Snowflake,
        caller_id: Snowflake,
        request: UpdateCollectionRequest,
    ) -> ServiceResult<CollectionResponse> {
        let mut collection = self.require_owned(collection_id, caller_id).await?;

        if let Some(title) = request.title {
            collection.title = title;
        }
        if let Some(description) = request.description {
            collection.description = Some(description);
        }
        if let Some(cover_url) = request.cover_url {
            collection.cover_url = Some(cover_url);
        }
        if let Some(is_public) = request.is_public {
            collection.is_public = is_public;
        }
        collection.updated_at = chrono::Utc::now();

        self.ctx.collection_repo().update(&collection).await?;

        let entries = self.ctx.collection_repo().list_entries(collection_id).await?;
        Ok(CollectionResponse::assemble(&collection, entries.len() as i64))
    }

    /// Delete a collection; owner only
    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        collection_id: Snowflake,
        caller_id: Snowflake,
    ) -> ServiceResult<()> {
        self.require_owned(collection_id, caller_id).await?;
        self.ctx.collection_repo().delete(collection_id).await?;
        info!(collection_id = %collection_id, "collection deleted");
        Ok(())
    }

    /// Add a game to a collection; owner only
    #[instrument(skip(self, request))]
    pub async fn add_game(
        &self,
        collection_id: Snowflake,
        caller_id: Snowflake,
        request: AddCollectionGameRequest,
    ) -> ServiceResult<()> {
        self.require_owned(collection_id, caller_id).await?;

        let game_id: Snowflake = request
            .game_id
            .parse()
            .map_err(|_| ServiceError::validation("Invalid game_id"))?;

        self.ctx
            .game_repo()
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Game", request.game_id.clone()))?;

        let position = match request.position {
            Some(position) => position,
            None => {
                let entries = self.ctx.collection_repo().list_entries(collection_id).await?;
                entries.iter().map(|e| e.position).max().unwrap_or(-1) + 1
            }
        };

        let entry = CollectionEntry::new(collection_id, game_id, position);
        self.ctx.collection_repo().add_entry(&entry).await?;

        info!(collection_id = %collection_id, game_id = %game_id, "game added to collection");
        Ok(())
    }

    /// Remove a game from a collection; owner only
    #[instrument(skip(self))]
    pub async fn remove_game(
        &self,
        collection_id: Snowflake,
        caller_id: Snowflake,
        game_id: Snowflake,
    ) -> ServiceResult<()> {
        self.require_owned(collection_id, caller_id).await?;
        self.ctx
            .collection_repo()
            .remove_entry(collection_id, game_id)
            .await?;
        Ok(())
    }

    async fn require_owned(
        &self,
        collection_id: Snowflake,
        caller_id: Snowflake,
    ) -> ServiceResult<Collection> {
        let collection = self
            .ctx
            .collection_repo()
            .find_by_id(collection_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Collection", collection_id.to_string()))?;

        if !collection.is_owned_by(caller_id) {
            return Err(ServiceError::Domain(DomainError::NotCollectionOwner));
        }
        Ok(collection)
    }

    async fn unique_slug(&self, title: &str) -> ServiceResult<String> {
        let base = slugify(title);
        let base = if base.is_empty() { "collection".to_string() } else { base };

        if self
            .ctx
            .collection_repo()
            .find_by_slug(&base)
            .await?
            .is_none()
        {
            return Ok(base);
        }

        for _ in 0..4 {
            let candidate = format!("{base}-{}", slug_suffix());
            if self
                .ctx
                .collection_repo()
                .find_by_slug(&candidate)
                .await?
                .is_none()
            {
                return Ok(candidate);
            }
        }

        Err(ServiceError::internal("could not allocate a unique slug"))
    }
}
