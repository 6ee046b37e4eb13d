//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL (JWT_SECRET optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;

/// Register a fresh account and return its tokens
async fn register(server: &TestServer) -> AuthResponse {
    let request = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

/// Register a fresh creator account with a published game
async fn creator_with_game(server: &TestServer) -> (AuthResponse, GameResponse) {
    let auth = register(server).await;

    let response = server
        .post_auth_empty("/api/v1/users/@me/creator", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth("/api/v1/games", &auth.access_token, &CreateGameRequest::unique())
        .await
        .unwrap();
    let created: GameCreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .patch_auth(
            &format!("/api/v1/games/{}", created.game.id),
            &auth.access_token,
            &json!({"status": "published"}),
        )
        .await
        .unwrap();
    let game: GameResponse = assert_json(response, StatusCode::OK).await.unwrap();

    (auth, game)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_account() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.handle, request.handle);
    assert_eq!(auth.token_type, "Bearer");
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
    assert!(!auth.user.is_creator);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();

    server.post("/api/v1/auth/register", &request).await.unwrap();

    // Same email, different handle
    request.handle = format!("{}x", request.handle);
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login_round_trip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register_req).await.unwrap();

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.handle, register_req.handle);

    // The access token works against /users/@me
    let response = server
        .get_auth("/api/v1/users/@me", &auth.access_token)
        .await
        .unwrap();
    let me: CurrentProfile = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.email, register_req.email);
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nobody@example.com".to_string(),
        password: "WrongPass1".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .post(
            "/api/v1/auth/refresh",
            &json!({"refresh_token": auth.refresh_token}),
        )
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(refreshed.user.id, auth.user.id);
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .post(
            "/api/v1/auth/refresh",
            &json!({"refresh_token": auth.access_token}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_auth_endpoints_are_rate_limited() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nobody@example.com".to_string(),
        password: "WrongPass1".to_string(),
    };

    // Auth quota is 5 per minute per IP; the sixth attempt is throttled
    for _ in 0..5 {
        let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(response.headers().contains_key("retry-after"));
}

// ============================================================================
// Game Tests
// ============================================================================

#[tokio::test]
async fn test_create_game_requires_creator() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .post_auth("/api/v1/games", &auth.access_token, &CreateGameRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_game_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, game) = creator_with_game(&server).await;

    assert_eq!(game.status, "published");

    // Public game page by slug
    let response = server.get(&format!("/api/v1/g/{}", game.slug)).await.unwrap();
    let fetched: GameResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, game.id);
    assert_eq!(fetched.score.tier, "NEW");

    // Shows up in the creator's own games
    let response = server
        .get_auth("/api/v1/users/@me/games", &auth.access_token)
        .await
        .unwrap();
    let mine: Vec<GameResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(mine.iter().any(|g| g.id == game.id));
}

#[tokio::test]
async fn test_blocked_embed_url_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    server
        .post_auth_empty("/api/v1/users/@me/creator", &auth.access_token)
        .await
        .unwrap();

    let mut request = CreateGameRequest::unique();
    request.embed_url = "https://itch.io/embed/123456".to_string();

    let response = server
        .post_auth("/api/v1/games", &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_draft_game_hidden_from_public() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    server
        .post_auth_empty("/api/v1/users/@me/creator", &auth.access_token)
        .await
        .unwrap();

    let response = server
        .post_auth("/api/v1/games", &auth.access_token, &CreateGameRequest::unique())
        .await
        .unwrap();
    let created: GameCreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Anonymous fetch of a draft 404s
    let response = server
        .get(&format!("/api/v1/g/{}", created.game.slug))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Reaction and Scoring Tests
// ============================================================================

#[tokio::test]
async fn test_reaction_updates_score() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_creator, game) = creator_with_game(&server).await;
    let fan = register(&server).await;

    // Favorite: weight 3
    let response = server
        .put_auth(
            &format!("/api/v1/games/{}/reaction", game.id),
            &fan.access_token,
            &json!({"reaction": "favorite"}),
        )
        .await
        .unwrap();
    let state: ReactionStateResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(state.reaction, "favorite");

    let score = state.score.expect("score block");
    assert_eq!(score.favorite_count, 1);
    assert_eq!(score.total_reactions, 1);
    assert_eq!(score.weighted_score, 3);
    assert_eq!(score.tier, "NEW");

    // Switching to like moves the count instead of adding a second one
    let response = server
        .put_auth(
            &format!("/api/v1/games/{}/reaction", game.id),
            &fan.access_token,
            &json!({"reaction": "like"}),
        )
        .await
        .unwrap();
    let state: ReactionStateResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let score = state.score.expect("score block");
    assert_eq!(score.favorite_count, 0);
    assert_eq!(score.like_count, 1);
    assert_eq!(score.weighted_score, 1);

    // Toggling off returns the aggregate to zero
    let response = server
        .put_auth(
            &format!("/api/v1/games/{}/reaction", game.id),
            &fan.access_token,
            &json!({"reaction": "none"}),
        )
        .await
        .unwrap();
    let state: ReactionStateResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let score = state.score.expect("score block");
    assert_eq!(score.total_reactions, 0);
    assert_eq!(score.weighted_score, 0);

    let response = server
        .get_auth(
            &format!("/api/v1/games/{}/reaction", game.id),
            &fan.access_token,
        )
        .await
        .unwrap();
    let state: ReactionStateResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(state.reaction, "none");
}

#[tokio::test]
async fn test_unknown_reaction_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_creator, game) = creator_with_game(&server).await;
    let fan = register(&server).await;

    let response = server
        .put_auth(
            &format!("/api/v1/games/{}/reaction", game.id),
            &fan.access_token,
            &json!({"reaction": "dislike"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Play Tracking Tests
// ============================================================================

#[tokio::test]
async fn test_play_count_throttled_per_player() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_creator, game) = creator_with_game(&server).await;
    let player = register(&server).await;

    // Both plays succeed, only the first is recorded (1 per minute per game)
    for _ in 0..2 {
        let response = server
            .post_auth_empty(
                &format!("/api/v1/games/{}/play", game.id),
                &player.access_token,
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server.get(&format!("/api/v1/g/{}", game.slug)).await.unwrap();
    let fetched: GameResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.score.play_count, 1);
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_creator, game) = creator_with_game(&server).await;
    let commenter = register(&server).await;

    let response = server
        .post_auth(
            &format!("/api/v1/games/{}/comments", game.id),
            &commenter.access_token,
            &json!({"body": "  great game  "}),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.body, "great game");
    assert!(comment.parent_id.is_none());

    // Reply
    let response = server
        .post_auth(
            &format!("/api/v1/games/{}/comments", game.id),
            &commenter.access_token,
            &json!({"body": "replying to myself", "parent_id": comment.id}),
        )
        .await
        .unwrap();
    let reply: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(reply.parent_id.as_deref(), Some(comment.id.as_str()));

    // Listing shows both, oldest first
    let response = server
        .get(&format!("/api/v1/games/{}/comments", game.id))
        .await
        .unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].id, comment.id);

    // Only the author may delete
    let stranger = register(&server).await;
    let response = server
        .delete_auth(
            &format!("/api/v1/comments/{}", comment.id),
            &stranger.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/v1/comments/{}", comment.id),
            &commenter.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Follow and Bookmark Tests
// ============================================================================

#[tokio::test]
async fn test_follow_toggle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server).await;
    let bob = register(&server).await;

    let response = server
        .post_auth_empty(
            &format!("/api/v1/users/{}/follow", bob.user.id),
            &alice.access_token,
        )
        .await
        .unwrap();
    let state: FollowStateResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(state.following);
    assert_eq!(state.follower_count, 1);

    // Toggle off
    let response = server
        .post_auth_empty(
            &format!("/api/v1/users/{}/follow", bob.user.id),
            &alice.access_token,
        )
        .await
        .unwrap();
    let state: FollowStateResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!state.following);
    assert_eq!(state.follower_count, 0);
}

#[tokio::test]
async fn test_cannot_follow_self() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server).await;

    let response = server
        .post_auth_empty(
            &format!("/api/v1/users/{}/follow", alice.user.id),
            &alice.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_bookmark_and_library() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_creator, game) = creator_with_game(&server).await;
    let reader = register(&server).await;

    let response = server
        .post_auth_empty(
            &format!("/api/v1/games/{}/bookmark", game.id),
            &reader.access_token,
        )
        .await
        .unwrap();
    let state: BookmarkStateResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(state.bookmarked);

    let response = server
        .get_auth("/api/v1/users/@me/library", &reader.access_token)
        .await
        .unwrap();
    let library: Vec<GameResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(library.iter().any(|g| g.id == game.id));
}

// ============================================================================
// Contact Tests
// ============================================================================

#[tokio::test]
async fn test_contact_form() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/api/v1/contact",
            &json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Hello",
                "message": "Love the portal"
            }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_contact_form_rate_limited_by_ip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let body = json!({
        "name": "Ada",
        "email": "ada@example.com",
        "subject": "Hello",
        "message": "Love the portal"
    });

    // Contact quota is 3 per hour per IP
    for _ in 0..3 {
        let response = server.post("/api/v1/contact", &body).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = server.post("/api/v1/contact", &body).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}
