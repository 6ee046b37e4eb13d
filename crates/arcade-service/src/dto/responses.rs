//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            database,
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentProfileResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentProfileResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// Profile Responses
// ============================================================================

/// Minimal profile payload embedded in other responses
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub id: String,
    pub handle: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Public profile response
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub handle: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub is_creator: bool,
    pub created_at: DateTime<Utc>,
}

/// Public profile page: profile plus follower count and published games
#[derive(Debug, Serialize)]
pub struct ProfileDetailResponse {
    #[serde(flatten)]
    pub profile: ProfileResponse,
    pub follower_count: i64,
    pub games: Vec<GameResponse>,
}

/// Current authenticated profile response (includes email and admin flag)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentProfileResponse {
    pub id: String,
    pub handle: String,
    pub display_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub is_creator: bool,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Game Responses
// ============================================================================

/// Score block attached to a game
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub like_count: u32,
    pub love_count: u32,
    pub favorite_count: u32,
    pub total_reactions: u32,
    pub weighted_score: u32,
    pub tier: String,
    pub play_count: i64,
}

impl Default for ScoreResponse {
    fn default() -> Self {
        Self {
            like_count: 0,
            love_count: 0,
            favorite_count: 0,
            total_reactions: 0,
            weighted_score: 0,
            tier: "NEW".to_string(),
            play_count: 0,
        }
    }
}

/// Game response with score and (optionally) creator
#[derive(Debug, Clone, Serialize)]
pub struct GameResponse {
    pub id: String,
    pub creator_id: String,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub embed_url: String,
    pub status: String,
    pub genres: Vec<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub score: ScoreResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<ProfileSummary>,
}

/// Response to a game submission, carrying any embed URL warning
#[derive(Debug, Serialize)]
pub struct GameCreatedResponse {
    pub game: GameResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_warning: Option<String>,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Comment with its author joined in
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub game_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub author: ProfileSummary,
}

// ============================================================================
// Reaction / Follow / Bookmark State
// ============================================================================

/// The caller's current reaction to a game
#[derive(Debug, Serialize)]
pub struct ReactionStateResponse {
    pub reaction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreResponse>,
}

/// Follow state between the caller and a profile
#[derive(Debug, Serialize)]
pub struct FollowStateResponse {
    pub following: bool,
    pub follower_count: i64,
}

/// Bookmark state between the caller and a game
#[derive(Debug, Serialize)]
pub struct BookmarkStateResponse {
    pub bookmarked: bool,
}

// ============================================================================
// Collection Responses
// ============================================================================

/// Collection summary with game count
#[derive(Debug, Serialize)]
pub struct CollectionResponse {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    pub is_public: bool,
    pub game_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Collection with its games resolved
#[derive(Debug, Serialize)]
pub struct CollectionDetailResponse {
    #[serde(flatten)]
    pub collection: CollectionResponse,
    pub games: Vec<GameResponse>,
}

// ============================================================================
// Report Responses
// ============================================================================

/// Moderation report
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub id: String,
    pub reporter_id: String,
    pub target_type: String,
    pub target_id: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
