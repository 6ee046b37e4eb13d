//! Reaction handlers

use axum::{
    extract::{Path, State},
    Json,
};
use arcade_core::ReactionKind;
use arcade_limiter::Quota;
use arcade_service::dto::SetReactionRequest;
use arcade_service::{ReactionService, ReactionStateResponse};

use crate::extractors::{AuthUser, OptionalAuthUser};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// The caller's current reaction to a game
///
/// GET /games/{game_id}/reaction
pub async fn get_reaction(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(game_id): Path<String>,
) -> ApiResult<Json<ReactionStateResponse>> {
    let game_id = game_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid game_id format"))?;

    let service = ReactionService::new(state.service_context());
    let response = service.get_state(auth.profile_id(), game_id).await?;
    Ok(Json(response))
}

/// Set the caller's reaction to a game
///
/// PUT /games/{game_id}/reaction
///
/// Sending `none` removes the reaction; the client sends `none` when the
/// user clicks their current reaction again.
pub async fn set_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(game_id): Path<String>,
    Json(request): Json<SetReactionRequest>,
) -> ApiResult<Json<ReactionStateResponse>> {
    let game_id = game_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid game_id format"))?;

    let kind = ReactionKind::parse(&request.reaction)
        .ok_or_else(|| ApiError::invalid_query(format!("Unknown reaction: {}", request.reaction)))?;

    state.check_quota(&format!("react:{}", auth.profile_id), Quota::WRITES)?;

    let service = ReactionService::new(state.service_context());
    let response = service.set_reaction(auth.profile_id, game_id, kind).await?;
    Ok(Json(response))
}
