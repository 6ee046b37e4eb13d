//! Route definitions
//!
//! All API routes organized by resource and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{
    auth, collections, comments, contact, games, health, library, reactions, reports, users,
};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (mounted at the root, outside the API prefix)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(game_routes())
        .merge(collection_routes())
        .merge(misc_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
}

/// Profile and follow routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/users/@me", patch(users::update_current_user))
        .route("/users/@me/creator", post(users::become_creator))
        .route("/users/@me/games", get(games::my_games))
        .route("/users/@me/library", get(library::my_library))
        .route("/users/:user_id/follow", get(users::get_follow_state))
        .route("/users/:user_id/follow", post(users::toggle_follow))
        .route("/profiles/:handle", get(users::get_profile))
        .route("/creators", get(users::list_creators))
}

/// Game routes
fn game_routes() -> Router<AppState> {
    Router::new()
        // Browse
        .route("/games", get(games::list_games))
        .route("/games", post(games::create_game))
        .route("/games/trending", get(games::trending))
        .route("/g/:slug", get(games::get_game_by_slug))
        // Creator CRUD
        .route("/games/:game_id", patch(games::update_game))
        .route("/games/:game_id", delete(games::delete_game))
        // Engagement
        .route("/games/:game_id/play", post(games::record_play))
        .route("/games/:game_id/reaction", get(reactions::get_reaction))
        .route("/games/:game_id/reaction", put(reactions::set_reaction))
        .route("/games/:game_id/bookmark", get(library::get_bookmark_state))
        .route("/games/:game_id/bookmark", post(library::toggle_bookmark))
        // Comments
        .route("/games/:game_id/comments", get(comments::list_comments))
        .route("/games/:game_id/comments", post(comments::create_comment))
        .route("/comments/:comment_id", delete(comments::delete_comment))
}

/// Collection routes
fn collection_routes() -> Router<AppState> {
    Router::new()
        .route("/collections", get(collections::list_collections))
        .route("/collections", post(collections::create_collection))
        .route("/c/:slug", get(collections::get_collection_by_slug))
        .route("/collections/:collection_id", patch(collections::update_collection))
        .route("/collections/:collection_id", delete(collections::delete_collection))
        .route("/collections/:collection_id/games", post(collections::add_collection_game))
        .route(
            "/collections/:collection_id/games/:game_id",
            delete(collections::remove_collection_game),
        )
}

/// Reports, moderation, and the contact form
fn misc_routes() -> Router<AppState> {
    Router::new()
        .route("/reports", post(reports::create_report))
        .route("/admin/reports", get(reports::list_reports))
        .route("/admin/reports/:report_id/resolve", post(reports::resolve_report))
        .route("/contact", post(contact::submit_contact))
}
