//! Comment handlers

use axum::{
    extract::{Path, State},
    Json,
};
use arcade_limiter::Quota;
use arcade_service::dto::CreateCommentRequest;
use arcade_service::{CommentResponse, CommentService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Comments on a game, oldest first
///
/// GET /games/{game_id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let game_id = game_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid game_id format"))?;

    let service = CommentService::new(state.service_context());
    let response = service.list_by_game(game_id).await?;
    Ok(Json(response))
}

/// Post a comment on a game
///
/// POST /games/{game_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(game_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let game_id = game_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid game_id format"))?;

    state.check_quota(&format!("comment:{}", auth.profile_id), Quota::COMMENTS)?;

    let service = CommentService::new(state.service_context());
    let response = service.create(game_id, auth.profile_id, request).await?;
    Ok(Created(Json(response)))
}

/// Delete a comment (author or admin)
///
/// DELETE /comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(comment_id): Path<String>,
) -> ApiResult<NoContent> {
    let comment_id = comment_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid comment_id format"))?;

    let service = CommentService::new(state.service_context());
    service.delete(comment_id, auth.profile_id).await?;
    Ok(NoContent)
}
