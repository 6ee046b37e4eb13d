//! Test fixtures - request builders and response mirrors

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration payload with unique handle and email per call
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub handle: String,
    pub display_name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let tag = Uuid::new_v4().simple().to_string();
        let tag = &tag[..12];
        Self {
            handle: format!("tester_{tag}"),
            display_name: format!("Tester {tag}"),
            email: format!("tester-{tag}@example.com"),
            password: "Sup3rSecret".to_string(),
        }
    }
}

/// Login payload
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(request: &RegisterRequest) -> Self {
        Self {
            email: request.email.clone(),
            password: request.password.clone(),
        }
    }
}

/// Mirror of the auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentProfile,
}

/// Mirror of the current-profile payload
#[derive(Debug, Deserialize)]
pub struct CurrentProfile {
    pub id: String,
    pub handle: String,
    pub display_name: String,
    pub email: String,
    pub is_creator: bool,
    pub is_admin: bool,
}

/// Game submission payload
#[derive(Debug, Clone, Serialize)]
pub struct CreateGameRequest {
    pub title: String,
    pub short_description: String,
    pub embed_url: String,
    pub genres: Vec<String>,
    pub tags: Vec<String>,
}

impl CreateGameRequest {
    pub fn unique() -> Self {
        let tag = Uuid::new_v4().simple().to_string();
        Self {
            title: format!("Test Game {}", &tag[..8]),
            short_description: "A game for testing".to_string(),
            embed_url: format!("https://games.example.dev/{}/index.html", &tag[..8]),
            genres: vec!["puzzle".to_string()],
            tags: vec!["test".to_string()],
        }
    }
}

/// Mirror of the game payload
#[derive(Debug, Deserialize)]
pub struct GameResponse {
    pub id: String,
    pub creator_id: String,
    pub title: String,
    pub slug: String,
    pub status: String,
    pub score: ScoreResponse,
}

/// Mirror of the submission response
#[derive(Debug, Deserialize)]
pub struct GameCreatedResponse {
    pub game: GameResponse,
    pub embed_warning: Option<String>,
}

/// Mirror of the score block
#[derive(Debug, Deserialize)]
pub struct ScoreResponse {
    pub like_count: u32,
    pub love_count: u32,
    pub favorite_count: u32,
    pub total_reactions: u32,
    pub weighted_score: u32,
    pub tier: String,
    pub play_count: i64,
}

/// Mirror of the reaction state
#[derive(Debug, Deserialize)]
pub struct ReactionStateResponse {
    pub reaction: String,
    pub score: Option<ScoreResponse>,
}

/// Mirror of the follow state
#[derive(Debug, Deserialize)]
pub struct FollowStateResponse {
    pub following: bool,
    pub follower_count: i64,
}

/// Mirror of the bookmark state
#[derive(Debug, Deserialize)]
pub struct BookmarkStateResponse {
    pub bookmarked: bool,
}

/// Mirror of the comment payload
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub game_id: String,
    pub parent_id: Option<String>,
    pub body: String,
}
