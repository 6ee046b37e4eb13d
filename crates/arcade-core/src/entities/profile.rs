//! Profile entity - a portal account, optionally a creator

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Profile entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: Snowflake,
    pub handle: String,
    pub display_name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
    pub bio: Option<String>,
    pub is_creator: bool,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new Profile with required fields
    pub fn new(id: Snowflake, handle: String, display_name: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            handle,
            display_name,
            email,
            avatar_url: None,
            banner_url: None,
            bio: None,
            is_creator: false,
            is_admin: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Public profile URL path
    pub fn path(&self) -> String {
        format!("/u/{}", self.handle)
    }

    /// Upgrade this account to a creator
    pub fn make_creator(&mut self) {
        self.is_creator = true;
        self.updated_at = Utc::now();
    }

    /// Update the display name
    pub fn set_display_name(&mut self, display_name: String) {
        self.display_name = display_name;
        self.updated_at = Utc::now();
    }

    /// Update the bio (None clears it)
    pub fn set_bio(&mut self, bio: Option<String>) {
        self.bio = bio;
        self.updated_at = Utc::now();
    }
}

/// Validate a handle: 2-32 chars of `[a-z0-9_]`
pub fn is_valid_handle(handle: &str) -> bool {
    (2..=32).contains(&handle.len())
        && handle
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile::new(
            Snowflake::new(1),
            "pixelsmith".to_string(),
            "Pixel Smith".to_string(),
            "pixel@example.com".to_string(),
        )
    }

    #[test]
    fn test_profile_defaults() {
        let p = profile();
        assert!(!p.is_creator);
        assert!(!p.is_admin);
        assert!(p.bio.is_none());
    }

    #[test]
    fn test_profile_path() {
        assert_eq!(profile().path(), "/u/pixelsmith");
    }

    #[test]
    fn test_make_creator() {
        let mut p = profile();
        p.make_creator();
        assert!(p.is_creator);
    }

    #[test]
    fn test_handle_validation() {
        assert!(is_valid_handle("pixelsmith"));
        assert!(is_valid_handle("a_1"));
        assert!(!is_valid_handle("x"));
        assert!(!is_valid_handle("Mixed"));
        assert!(!is_valid_handle("has space"));
        assert!(!is_valid_handle(&"a".repeat(33)));
    }
}
