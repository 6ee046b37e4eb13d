//! Service context - dependency container for services
//!
//! Holds all repositories and shared services the business layer needs.

use std::sync::Arc;

use arcade_common::auth::JwtService;
use arcade_core::traits::{
    BookmarkRepository, CollectionRepository, CommentRepository, ContactRepository,
    FollowRepository, GameRepository, ProfileRepository, ReactionRepository, ReportRepository,
    ScoreRepository,
};
use arcade_core::SnowflakeGenerator;
use arcade_db::PgPool;

use super::mailer::Mailer;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool (readiness checks)
    pool: PgPool,

    // Repositories
    profile_repo: Arc<dyn ProfileRepository>,
    game_repo: Arc<dyn GameRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    score_repo: Arc<dyn ScoreRepository>,
    follow_repo: Arc<dyn FollowRepository>,
    bookmark_repo: Arc<dyn BookmarkRepository>,
    collection_repo: Arc<dyn CollectionRepository>,
    report_repo: Arc<dyn ReportRepository>,
    contact_repo: Arc<dyn ContactRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
    mailer: Arc<Mailer>,
}

impl ServiceContext {
    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the profile repository
    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the game repository
    pub fn game_repo(&self) -> &dyn GameRepository {
        self.game_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the score repository
    pub fn score_repo(&self) -> &dyn ScoreRepository {
        self.score_repo.as_ref()
    }

    /// Get the follow repository
    pub fn follow_repo(&self) -> &dyn FollowRepository {
        self.follow_repo.as_ref()
    }

    /// Get the bookmark repository
    pub fn bookmark_repo(&self) -> &dyn BookmarkRepository {
        self.bookmark_repo.as_ref()
    }

    /// Get the collection repository
    pub fn collection_repo(&self) -> &dyn CollectionRepository {
        self.collection_repo.as_ref()
    }

    /// Get the report repository
    pub fn report_repo(&self) -> &dyn ReportRepository {
        self.report_repo.as_ref()
    }

    /// Get the contact repository
    pub fn contact_repo(&self) -> &dyn ContactRepository {
        self.contact_repo.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the mail notifier
    pub fn mailer(&self) -> &Mailer {
        self.mailer.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> arcade_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    game_repo: Option<Arc<dyn GameRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    score_repo: Option<Arc<dyn ScoreRepository>>,
    follow_repo: Option<Arc<dyn FollowRepository>>,
    bookmark_repo: Option<Arc<dyn BookmarkRepository>>,
    collection_repo: Option<Arc<dyn CollectionRepository>>,
    report_repo: Option<Arc<dyn ReportRepository>>,
    contact_repo: Option<Arc<dyn ContactRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    mailer: Option<Arc<Mailer>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn game_repo(mut self, repo: Arc<dyn GameRepository>) -> Self {
        self.game_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn score_repo(mut self, repo: Arc<dyn ScoreRepository>) -> Self {
        self.score_repo = Some(repo);
        self
    }

    pub fn follow_repo(mut self, repo: Arc<dyn FollowRepository>) -> Self {
        self.follow_repo = Some(repo);
        self
    }

    pub fn bookmark_repo(mut self, repo: Arc<dyn BookmarkRepository>) -> Self {
        self.bookmark_repo = Some(repo);
        self
    }

    pub fn collection_repo(mut self, repo: Arc<dyn CollectionRepository>) -> Self {
        self.collection_repo = Some(repo);
        self
    }

    pub fn report_repo(mut self, repo: Arc<dyn ReportRepository>) -> Self {
        self.report_repo = Some(repo);
        self
    }

    pub fn contact_repo(mut self, repo: Arc<dyn ContactRepository>) -> Self {
        self.contact_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn mailer(mut self, mailer: Arc<Mailer>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext {
            pool: self.pool.ok_or_else(|| ServiceError::validation("pool is required"))?,
            profile_repo: self
                .profile_repo
                .ok_or_else(|| ServiceError::validation("profile_repo is required"))?,
            game_repo: self
                .game_repo
                .ok_or_else(|| ServiceError::validation("game_repo is required"))?,
            comment_repo: self
                .comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            reaction_repo: self
                .reaction_repo
                .ok_or_else(|| ServiceError::validation("reaction_repo is required"))?,
            score_repo: self
                .score_repo
                .ok_or_else(|| ServiceError::validation("score_repo is required"))?,
            follow_repo: self
                .follow_repo
                .ok_or_else(|| ServiceError::validation("follow_repo is required"))?,
            bookmark_repo: self
                .bookmark_repo
                .ok_or_else(|| ServiceError::validation("bookmark_repo is required"))?,
            collection_repo: self
                .collection_repo
                .ok_or_else(|| ServiceError::validation("collection_repo is required"))?,
            report_repo: self
                .report_repo
                .ok_or_else(|| ServiceError::validation("report_repo is required"))?,
            contact_repo: self
                .contact_repo
                .ok_or_else(|| ServiceError::validation("contact_repo is required"))?,
            jwt_service: self
                .jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            snowflake_generator: self
                .snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
            mailer: self
                .mailer
                .ok_or_else(|| ServiceError::validation("mailer is required"))?,
        })
    }
}
