//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Profile not found: {0}")]
    ProfileNotFound(Snowflake),

    #[error("Game not found: {0}")]
    GameNotFound(Snowflake),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    #[error("Collection not found: {0}")]
    CollectionNotFound(Snowflake),

    #[error("Report not found: {0}")]
    ReportNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid handle: {0}")]
    InvalidHandle(String),

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Embed URL rejected: {0}")]
    EmbedUrlRejected(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the game's creator")]
    NotGameCreator,

    #[error("Not the comment's author")]
    NotCommentAuthor,

    #[error("Not the collection's owner")]
    NotCollectionOwner,

    #[error("Admin access required")]
    AdminRequired,

    #[error("Creator access required")]
    CreatorRequired,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Handle already taken")]
    HandleAlreadyExists,

    #[error("Slug already taken: {0}")]
    SlugAlreadyExists(String),

    #[error("Already reported")]
    AlreadyReported,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Cannot follow yourself")]
    CannotFollowSelf,

    #[error("Game is not published")]
    GameNotPublished,

    #[error("Comment does not belong to this game")]
    CommentGameMismatch,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ProfileNotFound(_) => "UNKNOWN_PROFILE",
            Self::GameNotFound(_) => "UNKNOWN_GAME",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::CollectionNotFound(_) => "UNKNOWN_COLLECTION",
            Self::ReportNotFound(_) => "UNKNOWN_REPORT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidHandle(_) => "INVALID_HANDLE",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::EmbedUrlRejected(_) => "EMBED_URL_REJECTED",

            // Authorization
            Self::NotGameCreator => "NOT_GAME_CREATOR",
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",
            Self::NotCollectionOwner => "NOT_COLLECTION_OWNER",
            Self::AdminRequired => "ADMIN_REQUIRED",
            Self::CreatorRequired => "CREATOR_REQUIRED",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::HandleAlreadyExists => "HANDLE_ALREADY_EXISTS",
            Self::SlugAlreadyExists(_) => "SLUG_ALREADY_EXISTS",
            Self::AlreadyReported => "ALREADY_REPORTED",

            // Business Rules
            Self::CannotFollowSelf => "CANNOT_FOLLOW_SELF",
            Self::GameNotPublished => "GAME_NOT_PUBLISHED",
            Self::CommentGameMismatch => "COMMENT_GAME_MISMATCH",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProfileNotFound(_)
                | Self::GameNotFound(_)
                | Self::CommentNotFound(_)
                | Self::CollectionNotFound(_)
                | Self::ReportNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::InvalidHandle(_)
                | Self::WeakPassword(_)
                | Self::ContentTooLong { .. }
                | Self::EmbedUrlRejected(_)
                | Self::CannotFollowSelf
                | Self::CommentGameMismatch
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotGameCreator
                | Self::NotCommentAuthor
                | Self::NotCollectionOwner
                | Self::AdminRequired
                | Self::CreatorRequired
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::HandleAlreadyExists
                | Self::SlugAlreadyExists(_)
                | Self::AlreadyReported
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::ProfileNotFound(Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_PROFILE");

        let err = DomainError::AdminRequired;
        assert_eq!(err.code(), "ADMIN_REQUIRED");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::GameNotFound(Snowflake::new(1)).is_not_found());
        assert!(DomainError::CommentNotFound(Snowflake::new(1)).is_not_found());
        assert!(!DomainError::EmailAlreadyExists.is_not_found());
    }

    #[test]
    fn test_is_authorization() {
        assert!(DomainError::NotGameCreator.is_authorization());
        assert!(DomainError::AdminRequired.is_authorization());
        assert!(!DomainError::GameNotFound(Snowflake::new(1)).is_authorization());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::GameNotFound(Snowflake::new(123));
        assert_eq!(err.to_string(), "Game not found: 123");

        let err = DomainError::ContentTooLong { max: 1000 };
        assert_eq!(err.to_string(), "Content too long: max 1000 characters");
    }
}
