//! Authentication handlers

use axum::{extract::State, Json};
use arcade_limiter::Quota;
use arcade_service::dto::{LoginRequest, RefreshTokenRequest, RegisterRequest};
use arcade_service::{AuthResponse, AuthService};

use crate::extractors::{ClientIp, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new account
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ip: ClientIp,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<AuthResponse>>> {
    state.check_quota(&format!("auth:{}", ip.as_str()), Quota::AUTH)?;

    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Login with email and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ip: ClientIp,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    state.check_quota(&format!("auth:{}", ip.as_str()), Quota::AUTH)?;

    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Exchange a refresh token for a new token pair
///
/// POST /auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh(&request.refresh_token).await?;
    Ok(Json(response))
}
