//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use arcade_common::{AppConfig, AppError, JwtService};
use arcade_core::SnowflakeGenerator;
use arcade_db::{
    create_pool, PgBookmarkRepository, PgCollectionRepository, PgCommentRepository,
    PgContactRepository, PgFollowRepository, PgGameRepository, PgProfileRepository,
    PgReactionRepository, PgReportRepository, PgScoreRepository,
};
use arcade_limiter::RateLimiter;
use arcade_service::{Mailer, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(
        router,
        &state.config().cors,
        state.config().app.env.is_production(),
    );
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = arcade_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    arcade_db::run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Migrations applied");

    // Shared services
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));
    let mailer = Arc::new(Mailer::new(config.mail.clone()));
    let rate_limiter = RateLimiter::new();

    // Repositories
    let profile_repo = Arc::new(PgProfileRepository::new(pool.clone()));
    let game_repo = Arc::new(PgGameRepository::new(pool.clone()));
    let comment_repo = Arc::new(PgCommentRepository::new(pool.clone()));
    let reaction_repo = Arc::new(PgReactionRepository::new(pool.clone()));
    let score_repo = Arc::new(PgScoreRepository::new(pool.clone()));
    let follow_repo = Arc::new(PgFollowRepository::new(pool.clone()));
    let bookmark_repo = Arc::new(PgBookmarkRepository::new(pool.clone()));
    let collection_repo = Arc::new(PgCollectionRepository::new(pool.clone()));
    let report_repo = Arc::new(PgReportRepository::new(pool.clone()));
    let contact_repo = Arc::new(PgContactRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .profile_repo(profile_repo)
        .game_repo(game_repo)
        .comment_repo(comment_repo)
        .reaction_repo(reaction_repo)
        .score_repo(score_repo)
        .follow_repo(follow_repo)
        .bookmark_repo(bookmark_repo)
        .collection_repo(collection_repo)
        .report_repo(report_repo)
        .contact_repo(contact_repo)
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator)
        .mailer(mailer)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, rate_limiter, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let sweep_interval = Duration::from_secs(config.limiter.sweep_interval_secs);

    // Create app state
    let state = create_app_state(config).await?;

    // The sweep task runs for the lifetime of the server and stops with it
    let sweeper = state.rate_limiter().start_sweeper(sweep_interval);

    // Build application
    let app = create_app(state);

    // Run server
    let result = run_server(app, addr).await;

    sweeper.shutdown();
    result
}
