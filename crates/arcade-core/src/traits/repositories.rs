//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    Bookmark, Collection, CollectionEntry, Comment, ContactMessage, Follow, Game, GameScore,
    Profile, Reaction, Report, ReportStatus,
};
use crate::error::DomainError;
use crate::value_objects::{ReactionKind, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find profile by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Profile>>;

    /// Find profile by handle
    async fn find_by_handle(&self, handle: &str) -> RepoResult<Option<Profile>>;

    /// Find profile by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Profile>>;

    /// Check if an email is already registered
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Check if a handle is already taken
    async fn handle_exists(&self, handle: &str) -> RepoResult<bool>;

    /// Create a new profile
    async fn create(&self, profile: &Profile, password_hash: &str) -> RepoResult<()>;

    /// Update an existing profile
    async fn update(&self, profile: &Profile) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// List creator profiles, newest first
    async fn list_creators(&self, limit: i64) -> RepoResult<Vec<Profile>>;
}

// ============================================================================
// Game Repository
// ============================================================================

/// Filters for public game listings
#[derive(Debug, Clone, Default)]
pub struct GameQuery {
    /// Restrict to a genre
    pub genre: Option<String>,
    /// Restrict to one creator's games
    pub creator_id: Option<Snowflake>,
    /// Include unpublished games (creator dashboard)
    pub include_unpublished: bool,
    pub limit: i64,
    pub offset: i64,
}

#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Find game by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Game>>;

    /// Find game by slug
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Game>>;

    /// Check if a slug is already taken
    async fn slug_exists(&self, slug: &str) -> RepoResult<bool>;

    /// List games matching a query, newest first
    async fn list(&self, query: GameQuery) -> RepoResult<Vec<Game>>;

    /// Fetch a batch of games by ID
    async fn find_many(&self, ids: &[Snowflake]) -> RepoResult<Vec<Game>>;

    /// Create a new game
    async fn create(&self, game: &Game) -> RepoResult<()>;

    /// Update an existing game
    async fn update(&self, game: &Game) -> RepoResult<()>;

    /// Delete a game (cascades comments, reactions, bookmarks, score)
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// List a game's comments, oldest first
    async fn list_by_game(&self, game_id: Snowflake) -> RepoResult<Vec<Comment>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Delete a comment
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find a user's reaction to a game
    async fn find(&self, user_id: Snowflake, game_id: Snowflake) -> RepoResult<Option<Reaction>>;

    /// Insert or update a user's reaction to a game
    async fn upsert(&self, reaction: &Reaction) -> RepoResult<()>;

    /// Remove a user's reaction to a game
    async fn delete(&self, user_id: Snowflake, game_id: Snowflake) -> RepoResult<()>;

    /// Count reactions of a given kind for a game (recount, not the cached row)
    async fn count_kind(&self, game_id: Snowflake, kind: ReactionKind) -> RepoResult<i64>;
}

// ============================================================================
// Score Repository
// ============================================================================

#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Find the score row for a game
    async fn find_by_game(&self, game_id: Snowflake) -> RepoResult<Option<GameScore>>;

    /// Fetch score rows for a batch of games
    async fn find_many(&self, game_ids: &[Snowflake]) -> RepoResult<Vec<GameScore>>;

    /// Insert or replace the score row for a game
    async fn upsert(&self, score: &GameScore) -> RepoResult<()>;

    /// Atomically add one play to a game's score row, creating it if absent
    async fn record_play(&self, game_id: Snowflake) -> RepoResult<()>;

    /// Score rows ordered by play count, most played first
    async fn top_by_plays(&self, limit: i64) -> RepoResult<Vec<GameScore>>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Find a follow edge
    async fn find(
        &self,
        follower_id: Snowflake,
        followed_id: Snowflake,
    ) -> RepoResult<Option<Follow>>;

    /// Create a follow edge
    async fn create(&self, follow: &Follow) -> RepoResult<()>;

    /// Remove a follow edge
    async fn delete(&self, follower_id: Snowflake, followed_id: Snowflake) -> RepoResult<()>;

    /// Number of followers a profile has
    async fn count_followers(&self, profile_id: Snowflake) -> RepoResult<i64>;

    /// IDs of every profile a user follows (feed page)
    async fn list_followed_ids(&self, follower_id: Snowflake) -> RepoResult<Vec<Snowflake>>;
}

// ============================================================================
// Bookmark Repository
// ============================================================================

#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// Find a bookmark edge
    async fn find(&self, user_id: Snowflake, game_id: Snowflake) -> RepoResult<Option<Bookmark>>;

    /// Create a bookmark edge
    async fn create(&self, bookmark: &Bookmark) -> RepoResult<()>;

    /// Remove a bookmark edge
    async fn delete(&self, user_id: Snowflake, game_id: Snowflake) -> RepoResult<()>;

    /// Game IDs a user has bookmarked, most recent first
    async fn list_game_ids(&self, user_id: Snowflake) -> RepoResult<Vec<Snowflake>>;
}

// ============================================================================
// Collection Repository
// ============================================================================

#[async_trait]
pub trait CollectionRepository: Send + Sync {
    /// Find collection by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Collection>>;

    /// Find collection by slug
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Collection>>;

    /// List public collections with their game counts, newest first
    async fn list_public(&self, limit: i64) -> RepoResult<Vec<(Collection, i64)>>;

    /// List collections owned by a profile
    async fn list_by_owner(&self, owner_id: Snowflake) -> RepoResult<Vec<Collection>>;

    /// Create a new collection
    async fn create(&self, collection: &Collection) -> RepoResult<()>;

    /// Update an existing collection
    async fn update(&self, collection: &Collection) -> RepoResult<()>;

    /// Delete a collection and its entries
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Add a game to a collection (no-op if already present)
    async fn add_entry(&self, entry: &CollectionEntry) -> RepoResult<()>;

    /// Remove a game from a collection
    async fn remove_entry(&self, collection_id: Snowflake, game_id: Snowflake) -> RepoResult<()>;

    /// Ordered entries of a collection
    async fn list_entries(&self, collection_id: Snowflake) -> RepoResult<Vec<CollectionEntry>>;
}

// ============================================================================
// Report Repository
// ============================================================================

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Find report by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Report>>;

    /// Find an open report by the same reporter against the same target
    async fn find_pending(
        &self,
        reporter_id: Snowflake,
        target: crate::entities::ReportTarget,
        target_id: Snowflake,
    ) -> RepoResult<Option<Report>>;

    /// Create a new report
    async fn create(&self, report: &Report) -> RepoResult<()>;

    /// Update a report (resolution)
    async fn update(&self, report: &Report) -> RepoResult<()>;

    /// List reports, newest first; `None` status lists all
    async fn list(&self, status: Option<ReportStatus>, limit: i64) -> RepoResult<Vec<Report>>;
}

// ============================================================================
// Contact Repository
// ============================================================================

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Store a contact form message
    async fn create(&self, message: &ContactMessage) -> RepoResult<()>;
}
