//! Application state
//!
//! Holds the shared state for the Axum application: the service context, the
//! rate limiter, and configuration.

use std::sync::Arc;

use arcade_common::{AppConfig, JwtService};
use arcade_limiter::{Quota, RateLimiter};
use arcade_service::ServiceContext;

use crate::response::ApiError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Process-wide write-endpoint rate limiter
    rate_limiter: RateLimiter,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, rate_limiter: RateLimiter, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            rate_limiter,
            config: Arc::new(config),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the rate limiter
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the JWT service from the service context
    pub fn jwt_service(&self) -> &JwtService {
        self.service_context.jwt_service()
    }

    /// Admit a keyed request against a quota, or fail with a 429
    pub fn check_quota(&self, key: &str, quota: Quota) -> Result<(), ApiError> {
        let decision = self.rate_limiter.check(key, quota);
        if decision.allowed {
            Ok(())
        } else {
            Err(ApiError::RateLimited {
                reset_at: decision.reset_at,
            })
        }
    }

    /// Like [`check_quota`](Self::check_quota), but returns whether the hit
    /// was admitted instead of failing (silent-drop endpoints)
    pub fn quota_allows(&self, key: &str, quota: Quota) -> bool {
        self.rate_limiter.check(key, quota).allowed
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("rate_limiter", &self.rate_limiter)
            .field("config", &"AppConfig")
            .finish()
    }
}
