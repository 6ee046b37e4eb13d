//! Profile and follow handlers

use axum::{
    extract::{Path, State},
    Json,
};
use arcade_limiter::Quota;
use arcade_service::dto::UpdateProfileRequest;
use arcade_service::{
    AuthService, CurrentProfileResponse, FollowStateResponse, FollowService,
    ProfileDetailResponse, ProfileResponse, ProfileService,
};

use crate::extractors::{AuthUser, OptionalAuthUser, Pagination, ValidatedJson};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Current authenticated profile
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentProfileResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.current_profile(auth.profile_id).await?;
    Ok(Json(response))
}

/// Update own profile
///
/// PATCH /users/@me
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<CurrentProfileResponse>> {
    state.check_quota(&format!("write:{}", auth.profile_id), Quota::WRITES)?;

    let service = ProfileService::new(state.service_context());
    let response = service.update_own(auth.profile_id, request).await?;
    Ok(Json(response))
}

/// Upgrade the caller to a creator account
///
/// POST /users/@me/creator
pub async fn become_creator(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.become_creator(auth.profile_id).await?;
    Ok(Json(response))
}

/// Public profile page by handle
///
/// GET /profiles/{handle}
pub async fn get_profile(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> ApiResult<Json<ProfileDetailResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.get_by_handle(&handle).await?;
    Ok(Json(response))
}

/// Creator directory
///
/// GET /creators
pub async fn list_creators(
    State(state): State<AppState>,
    pagination: Pagination,
) -> ApiResult<Json<Vec<ProfileResponse>>> {
    let service = ProfileService::new(state.service_context());
    let response = service.list_creators(pagination.limit).await?;
    Ok(Json(response))
}

/// Follow state for a profile
///
/// GET /users/{user_id}/follow
pub async fn get_follow_state(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(user_id): Path<String>,
) -> ApiResult<Json<FollowStateResponse>> {
    let user_id = user_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid user_id format"))?;

    let service = FollowService::new(state.service_context());
    let response = service.get_state(auth.profile_id(), user_id).await?;
    Ok(Json(response))
}

/// Toggle following a profile
///
/// POST /users/{user_id}/follow
pub async fn toggle_follow(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<String>,
) -> ApiResult<Json<FollowStateResponse>> {
    let user_id = user_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid user_id format"))?;

    state.check_quota(&format!("follow:{}", auth.profile_id), Quota::WRITES)?;

    let service = FollowService::new(state.service_context());
    let response = service.toggle(auth.profile_id, user_id).await?;
    Ok(Json(response))
}
