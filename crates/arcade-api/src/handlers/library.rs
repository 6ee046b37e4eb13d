//! Bookmark and library handlers

use axum::{
    extract::{Path, State},
    Json,
};
use arcade_limiter::Quota;
use arcade_service::{BookmarkStateResponse, GameResponse, LibraryService};

use crate::extractors::{AuthUser, OptionalAuthUser};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Bookmark state for a game
///
/// GET /games/{game_id}/bookmark
pub async fn get_bookmark_state(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(game_id): Path<String>,
) -> ApiResult<Json<BookmarkStateResponse>> {
    let game_id = game_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid game_id format"))?;

    let service = LibraryService::new(state.service_context());
    let response = service.get_state(auth.profile_id(), game_id).await?;
    Ok(Json(response))
}

/// Toggle a bookmark
///
/// POST /games/{game_id}/bookmark
pub async fn toggle_bookmark(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(game_id): Path<String>,
) -> ApiResult<Json<BookmarkStateResponse>> {
    let game_id = game_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid game_id format"))?;

    state.check_quota(&format!("write:{}", auth.profile_id), Quota::WRITES)?;

    let service = LibraryService::new(state.service_context());
    let response = service.toggle(auth.profile_id, game_id).await?;
    Ok(Json(response))
}

/// The caller's library of bookmarked games
///
/// GET /users/@me/library
pub async fn my_library(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<GameResponse>>> {
    let service = LibraryService::new(state.service_context());
    let response = service.list_library(auth.profile_id).await?;
    Ok(Json(response))
}
