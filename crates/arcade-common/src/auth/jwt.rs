//! JWT utilities for authentication
//!
//! Tokens come in access/refresh pairs. Both are validated purely by
//! signature, expiry, and type claim; there is no server-side session store,
//! so "logout" is the client discarding its tokens.

use arcade_core::Snowflake;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Token type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Access,
    Refresh,
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (profile ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Token type (access or refresh)
    pub token_type: TokenType,
}

impl Claims {
    /// Get the profile ID as a Snowflake
    ///
    /// # Errors
    /// Returns an error if the subject cannot be parsed as a Snowflake
    pub fn profile_id(&self) -> Result<Snowflake, AppError> {
        self.sub
            .parse::<i64>()
            .map(Snowflake::new)
            .map_err(|_| AppError::InvalidToken)
    }
}

/// Token pair containing access and refresh tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// JWT service for encoding and decoding tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry: i64,
    refresh_token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and expiry times (seconds)
    #[must_use]
    pub fn new(secret: &str, access_token_expiry: i64, refresh_token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_expiry,
            refresh_token_expiry,
        }
    }

    /// Generate an access/refresh token pair for a profile
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn generate_token_pair(&self, profile_id: Snowflake) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access_token: self.encode_token(profile_id, TokenType::Access)?,
            refresh_token: self.encode_token(profile_id, TokenType::Refresh)?,
            token_type: "Bearer".to_string(),
            expires_in: self.access_token_expiry,
        })
    }

    fn encode_token(&self, profile_id: Snowflake, token_type: TokenType) -> Result<String, AppError> {
        let now = Utc::now();
        let expiry = match token_type {
            TokenType::Access => self.access_token_expiry,
            TokenType::Refresh => self.refresh_token_expiry,
        };

        let claims = Claims {
            sub: profile_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(expiry)).timestamp(),
            token_type,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })
    }

    /// Validate an access token and return its claims
    ///
    /// # Errors
    /// Returns an error if the token is invalid, expired, or not an access token
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;
        if claims.token_type != TokenType::Access {
            return Err(AppError::InvalidToken);
        }
        Ok(claims)
    }

    /// Validate a refresh token and return its claims
    ///
    /// # Errors
    /// Returns an error if the token is invalid, expired, or not a refresh token
    pub fn validate_refresh_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;
        if claims.token_type != TokenType::Refresh {
            return Err(AppError::InvalidToken);
        }
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new("test-secret", 900, 604800)
    }

    #[test]
    fn test_token_pair_round_trip() {
        let svc = service();
        let pair = svc.generate_token_pair(Snowflake::new(42)).unwrap();

        let claims = svc.validate_access_token(&pair.access_token).unwrap();
        assert_eq!(claims.profile_id().unwrap(), Snowflake::new(42));
        assert_eq!(claims.token_type, TokenType::Access);

        let claims = svc.validate_refresh_token(&pair.refresh_token).unwrap();
        assert_eq!(claims.token_type, TokenType::Refresh);
    }

    #[test]
    fn test_token_types_are_not_interchangeable() {
        let svc = service();
        let pair = svc.generate_token_pair(Snowflake::new(42)).unwrap();

        assert!(svc.validate_access_token(&pair.refresh_token).is_err());
        assert!(svc.validate_refresh_token(&pair.access_token).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let pair = service().generate_token_pair(Snowflake::new(42)).unwrap();
        let other = JwtService::new("other-secret", 900, 604800);
        assert!(other.validate_access_token(&pair.access_token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(service().validate_access_token("not.a.jwt").is_err());
    }
}
