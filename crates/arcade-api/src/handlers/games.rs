//! Game handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use arcade_limiter::Quota;
use arcade_service::dto::{CreateGameRequest, UpdateGameRequest};
use arcade_service::{GameCreatedResponse, GameResponse, GameService};
use serde::{Deserialize, Serialize};

use crate::extractors::{AuthUser, ClientIp, OptionalAuthUser, Pagination, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Query parameters for game listings
#[derive(Debug, Deserialize)]
pub struct GameListParams {
    pub genre: Option<String>,
}

/// Browse published games
///
/// GET /games
pub async fn list_games(
    State(state): State<AppState>,
    Query(params): Query<GameListParams>,
    pagination: Pagination,
) -> ApiResult<Json<Vec<GameResponse>>> {
    let service = GameService::new(state.service_context());
    let response = service
        .list(params.genre, pagination.limit, pagination.offset)
        .await?;
    Ok(Json(response))
}

/// Most played games
///
/// GET /games/trending
pub async fn trending(
    State(state): State<AppState>,
    pagination: Pagination,
) -> ApiResult<Json<Vec<GameResponse>>> {
    let service = GameService::new(state.service_context());
    let response = service.trending(pagination.limit).await?;
    Ok(Json(response))
}

/// Game page by slug
///
/// GET /g/{slug}
pub async fn get_game_by_slug(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(slug): Path<String>,
) -> ApiResult<Json<GameResponse>> {
    let service = GameService::new(state.service_context());
    let response = service.get_by_slug(&slug, auth.profile_id()).await?;
    Ok(Json(response))
}

/// Submit a new game
///
/// POST /games
pub async fn create_game(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateGameRequest>,
) -> ApiResult<Created<Json<GameCreatedResponse>>> {
    state.check_quota(&format!("write:{}", auth.profile_id), Quota::WRITES)?;

    let service = GameService::new(state.service_context());
    let response = service.create_game(auth.profile_id, request).await?;
    Ok(Created(Json(response)))
}

/// Update a game
///
/// PATCH /games/{game_id}
pub async fn update_game(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(game_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateGameRequest>,
) -> ApiResult<Json<GameResponse>> {
    let game_id = game_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid game_id format"))?;

    state.check_quota(&format!("write:{}", auth.profile_id), Quota::WRITES)?;

    let service = GameService::new(state.service_context());
    let response = service.update_game(game_id, auth.profile_id, request).await?;
    Ok(Json(response))
}

/// Delete a game
///
/// DELETE /games/{game_id}
pub async fn delete_game(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(game_id): Path<String>,
) -> ApiResult<NoContent> {
    let game_id = game_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid game_id format"))?;

    let service = GameService::new(state.service_context());
    service.delete_game(game_id, auth.profile_id).await?;
    Ok(NoContent)
}

/// The caller's own games, drafts included
///
/// GET /users/@me/games
pub async fn my_games(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<GameResponse>>> {
    let service = GameService::new(state.service_context());
    let response = service.list_mine(auth.profile_id).await?;
    Ok(Json(response))
}

#[derive(Debug, Serialize)]
pub struct PlayResponse {
    pub success: bool,
}

/// Count one play of a game
///
/// POST /games/{game_id}/play
///
/// Over-quota plays are accepted but not recorded: losing a play count is
/// fine, failing the player's page load is not.
pub async fn record_play(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    ip: ClientIp,
    Path(game_id): Path<String>,
) -> ApiResult<Json<PlayResponse>> {
    let game_id: arcade_core::Snowflake = game_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid game_id format"))?;

    // One counted play per minute per player per game; anonymous players
    // are keyed by IP
    let subject = match auth.profile_id() {
        Some(profile_id) => profile_id.to_string(),
        None => ip.as_str().to_string(),
    };

    if state.quota_allows(&format!("play:{subject}:{game_id}"), Quota::PLAYS) {
        let service = GameService::new(state.service_context());
        service.record_play(game_id).await?;
    }

    Ok(Json(PlayResponse { success: true }))
}
