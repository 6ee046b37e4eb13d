//! Authentication service
//!
//! Handles registration, login, token refresh, and the current-profile lookup.

use arcade_common::auth::{hash_password, validate_password_strength, verify_password};
use arcade_core::entities::{is_valid_handle, Profile};
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, CurrentProfileResponse, LoginRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account
    #[instrument(skip(self, request), fields(handle = %request.handle, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        let handle = request.handle.to_lowercase();
        if !is_valid_handle(&handle) {
            return Err(ServiceError::validation(
                "Handle may only contain lowercase letters, digits, and underscores",
            ));
        }

        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        if self.ctx.profile_repo().email_exists(&request.email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }
        if self.ctx.profile_repo().handle_exists(&handle).await? {
            return Err(ServiceError::conflict("Handle already taken"));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let profile_id = self.ctx.generate_id();
        let profile = Profile::new(profile_id, handle, request.display_name, request.email);

        self.ctx.profile_repo().create(&profile, &password_hash).await?;

        info!(profile_id = %profile_id, "account registered");

        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(profile_id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentProfileResponse::from(&profile),
        ))
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("login failed: unknown email");
                ServiceError::App(arcade_common::AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .profile_repo()
            .get_password_hash(profile.id)
            .await?
            .ok_or_else(|| ServiceError::App(arcade_common::AppError::InvalidCredentials))?;

        let valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;
        if !valid {
            warn!(profile_id = %profile.id, "login failed: wrong password");
            return Err(ServiceError::App(arcade_common::AppError::InvalidCredentials));
        }

        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(profile.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        info!(profile_id = %profile.id, "login succeeded");

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentProfileResponse::from(&profile),
        ))
    }

    /// Exchange a refresh token for a fresh token pair
    #[instrument(skip(self, refresh_token))]
    pub async fn refresh(&self, refresh_token: &str) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(refresh_token)
            .map_err(ServiceError::from)?;

        let profile_id = claims.profile_id().map_err(ServiceError::from)?;

        // The account may have been removed since the token was issued
        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(profile_id)
            .await?
            .ok_or_else(|| ServiceError::App(arcade_common::AppError::InvalidToken))?;

        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(profile.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentProfileResponse::from(&profile),
        ))
    }

    /// Current authenticated profile
    #[instrument(skip(self))]
    pub async fn current_profile(
        &self,
        profile_id: arcade_core::Snowflake,
    ) -> ServiceResult<CurrentProfileResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(profile_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", profile_id.to_string()))?;

        Ok(CurrentProfileResponse::from(&profile))
    }
}
