//! Collection handlers

use axum::{
    extract::{Path, State},
    Json,
};
use arcade_limiter::Quota;
use arcade_service::dto::{
    AddCollectionGameRequest, CreateCollectionRequest, UpdateCollectionRequest,
};
use arcade_service::{CollectionDetailResponse, CollectionResponse, CollectionService};

use crate::extractors::{AuthUser, OptionalAuthUser, Pagination, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Public collections, newest first
///
/// GET /collections
pub async fn list_collections(
    State(state): State<AppState>,
    pagination: Pagination,
) -> ApiResult<Json<Vec<CollectionResponse>>> {
    let service = CollectionService::new(state.service_context());
    let response = service.list_public(pagination.limit).await?;
    Ok(Json(response))
}

/// Collection page by slug with its games
///
/// GET /c/{slug}
pub async fn get_collection_by_slug(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(slug): Path<String>,
) -> ApiResult<Json<CollectionDetailResponse>> {
    let service = CollectionService::new(state.service_context());
    let response = service.get_by_slug(&slug, auth.profile_id()).await?;
    Ok(Json(response))
}

/// Create a collection
///
/// POST /collections
pub async fn create_collection(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCollectionRequest>,
) -> ApiResult<Created<Json<CollectionResponse>>> {
    state.check_quota(&format!("write:{}", auth.profile_id), Quota::WRITES)?;

    let service = CollectionService::new(state.service_context());
    let response = service.create(auth.profile_id, request).await?;
    Ok(Created(Json(response)))
}

/// Update a collection (owner only)
///
/// PATCH /collections/{collection_id}
pub async fn update_collection(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(collection_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateCollectionRequest>,
) -> ApiResult<Json<CollectionResponse>> {
    let collection_id = collection_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid collection_id format"))?;

    state.check_quota(&format!("write:{}", auth.profile_id), Quota::WRITES)?;

    let service = CollectionService::new(state.service_context());
    let response = service
        .update(collection_id, auth.profile_id, request)
        .await?;
    Ok(Json(response))
}

/// Delete a collection (owner only)
///
/// DELETE /collections/{collection_id}
pub async fn delete_collection(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(collection_id): Path<String>,
) -> ApiResult<NoContent> {
    let collection_id = collection_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid collection_id format"))?;

    let service = CollectionService::new(state.service_context());
    service.delete(collection_id, auth.profile_id).await?;
    Ok(NoContent)
}

/// Add a game to a collection (owner only)
///
/// POST /collections/{collection_id}/games
pub async fn add_collection_game(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(collection_id): Path<String>,
    Json(request): Json<AddCollectionGameRequest>,
) -> ApiResult<NoContent> {
    let collection_id = collection_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid collection_id format"))?;

    state.check_quota(&format!("write:{}", auth.profile_id), Quota::WRITES)?;

    let service = CollectionService::new(state.service_context());
    service
        .add_game(collection_id, auth.profile_id, request)
        .await?;
    Ok(NoContent)
}

/// Remove a game from a collection (owner only)
///
/// DELETE /collections/{collection_id}/games/{game_id}
pub async fn remove_collection_game(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((collection_id, game_id)): Path<(String, String)>,
) -> ApiResult<NoContent> {
    let collection_id = collection_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid collection_id format"))?;
    let game_id = game_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid game_id format"))?;

    let service = CollectionService::new(state.service_context());
    service
        .remove_game(collection_id, auth.profile_id, game_id)
        .await?;
    Ok(NoContent)
}
