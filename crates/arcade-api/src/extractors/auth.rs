//! Authentication extractor
//!
//! Extracts and validates JWT tokens from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use arcade_core::Snowflake;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated profile extracted from a JWT access token
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    /// Profile ID from the JWT token
    pub profile_id: Snowflake,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(profile_id: Snowflake) -> Self {
        Self { profile_id }
    }
}

fn validate_bearer(state: &AppState, token: &str) -> Result<AuthUser, ApiError> {
    let claims = state.jwt_service().validate_access_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Invalid access token");
        ApiError::InvalidAuthFormat
    })?;

    let profile_id = claims.profile_id().map_err(|e| {
        tracing::warn!(error = %e, "Invalid profile ID in token");
        ApiError::InvalidAuthFormat
    })?;

    Ok(AuthUser::new(profile_id))
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        validate_bearer(&app_state, bearer.token())
    }
}

/// Optional authenticated profile
///
/// Resolves to `None` when no Authorization header is present, but still
/// rejects a header carrying an invalid token.
#[derive(Debug, Clone, Copy)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    /// Profile ID when authenticated
    pub fn profile_id(&self) -> Option<Snowflake> {
        self.0.map(|auth| auth.profile_id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await {
            Ok(TypedHeader(Authorization(bearer))) => {
                let app_state = AppState::from_ref(state);
                validate_bearer(&app_state, bearer.token()).map(|auth| Self(Some(auth)))
            }
            Err(_) => Ok(Self(None)),
        }
    }
}
