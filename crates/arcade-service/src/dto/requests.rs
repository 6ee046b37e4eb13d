//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; those carrying user input also
//! implement `Validate`.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Account registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 32, message = "Handle must be 2-32 characters"))]
    pub handle: String,

    #[validate(length(min = 1, max = 64, message = "Display name must be 1-64 characters"))]
    pub display_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// Profile Requests
// ============================================================================

/// Update own profile request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 64, message = "Display name must be 1-64 characters"))]
    pub display_name: Option<String>,

    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,

    #[validate(url(message = "Invalid avatar URL"))]
    pub avatar_url: Option<String>,

    #[validate(url(message = "Invalid banner URL"))]
    pub banner_url: Option<String>,
}

// ============================================================================
// Game Requests
// ============================================================================

/// Create game request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGameRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 200, message = "Short description must be 1-200 characters"))]
    pub short_description: String,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub long_description: Option<String>,

    #[validate(url(message = "Invalid embed URL"))]
    pub embed_url: String,

    #[validate(url(message = "Invalid thumbnail URL"))]
    pub thumbnail_url: Option<String>,

    #[serde(default)]
    pub genres: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

/// Update game request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateGameRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Short description must be 1-200 characters"))]
    pub short_description: Option<String>,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub long_description: Option<String>,

    #[validate(url(message = "Invalid embed URL"))]
    pub embed_url: Option<String>,

    #[validate(url(message = "Invalid thumbnail URL"))]
    pub thumbnail_url: Option<String>,

    pub genres: Option<Vec<String>>,

    pub tags: Option<Vec<String>>,

    /// One of `draft`, `published`, `unlisted`
    pub status: Option<String>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Post a comment on a game
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 1000, message = "Comment must be 1-1000 characters"))]
    pub body: String,

    /// Comment being replied to (Snowflake ID as string)
    pub parent_id: Option<String>,
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Set the caller's reaction to a game
///
/// `reaction` must be one of `none`, `like`, `love`, `favorite`; `none`
/// toggles the current reaction off.
#[derive(Debug, Clone, Deserialize)]
pub struct SetReactionRequest {
    pub reaction: String,
}

// ============================================================================
// Collection Requests
// ============================================================================

/// Create collection request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCollectionRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(url(message = "Invalid cover URL"))]
    pub cover_url: Option<String>,

    #[serde(default = "default_true")]
    pub is_public: bool,
}

/// Update collection request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCollectionRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(url(message = "Invalid cover URL"))]
    pub cover_url: Option<String>,

    pub is_public: Option<bool>,
}

/// Add a game to a collection
#[derive(Debug, Clone, Deserialize)]
pub struct AddCollectionGameRequest {
    /// Game ID (Snowflake as string)
    pub game_id: String,

    /// Position in the collection; appended at the end when absent
    pub position: Option<i32>,
}

// ============================================================================
// Report Requests
// ============================================================================

/// File a moderation report
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReportRequest {
    /// One of `game`, `comment`, `profile`
    pub target_type: String,

    /// Target ID (Snowflake as string)
    pub target_id: String,

    #[validate(length(min = 1, max = 200, message = "Reason must be 1-200 characters"))]
    pub reason: String,

    #[validate(length(max = 2000, message = "Details must be at most 2000 characters"))]
    pub details: Option<String>,
}

/// Resolve a report (admin)
#[derive(Debug, Clone, Deserialize)]
pub struct ResolveReportRequest {
    /// `remove` deletes the reported content, `dismiss` leaves it
    pub action: String,
}

// ============================================================================
// Contact Requests
// ============================================================================

/// Contact form submission
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = 200, message = "Subject must be 1-200 characters"))]
    pub subject: String,

    #[validate(length(min = 1, max = 5000, message = "Message must be 1-5000 characters"))]
    pub message: String,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_validation() {
        let valid = RegisterRequest {
            handle: "pixelsmith".to_string(),
            display_name: "Pixel Smith".to_string(),
            email: "pixel@example.com".to_string(),
            password: "Sup3rSecret".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let short_handle = RegisterRequest {
            handle: "x".to_string(),
            ..valid
        };
        assert!(short_handle.validate().is_err());
    }

    #[test]
    fn test_comment_length_bounds() {
        let ok = CreateCommentRequest {
            body: "nice".to_string(),
            parent_id: None,
        };
        assert!(ok.validate().is_ok());

        let too_long = CreateCommentRequest {
            body: "x".repeat(1001),
            parent_id: None,
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_collection_default_visibility() {
        let req: CreateCollectionRequest =
            serde_json::from_str(r#"{"title": "Favorites"}"#).unwrap();
        assert!(req.is_public);
    }
}
