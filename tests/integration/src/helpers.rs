//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use arcade_api::{create_app, create_app_state};
use arcade_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, JwtConfig, LimiterConfig,
    MailConfig, ServerConfig, SnowflakeConfig,
};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Check that the test environment is configured; returns false (skip) if not
pub async fn check_test_env() -> bool {
    let _ = dotenvy::dotenv();
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping integration test: DATABASE_URL not set");
        return false;
    }
    true
}

/// Build a config for tests from the environment
pub fn test_config() -> Result<AppConfig> {
    let _ = dotenvy::dotenv();

    Ok(AppConfig {
        app: AppSettings {
            name: "arcade-test".to_string(),
            env: Environment::Development,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: std::env::var("DATABASE_URL")?,
            max_connections: 5,
            min_connections: 1,
        },
        jwt: JwtConfig {
            secret: std::env::var("JWT_SECRET").unwrap_or_else(|_| "test-secret".to_string()),
            access_token_expiry: 900,
            refresh_token_expiry: 604_800,
        },
        cors: CorsConfig::default(),
        limiter: LimiterConfig {
            sweep_interval_secs: 60,
        },
        mail: MailConfig::default(),
        snowflake: SnowflakeConfig { worker_id: 1 },
    })
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server on an ephemeral port
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        let app = create_app(state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .ok();
        });

        // Wait for the server to accept connections
        tokio::time::sleep(Duration::from_millis(50)).await;

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make an authenticated GET request
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// Make a POST request with a JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make an authenticated POST request with a JSON body
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make an authenticated POST request with no body
    pub async fn post_auth_empty(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(&serde_json::json!({}))
            .send()
            .await?)
    }

    /// Make an authenticated PUT request with a JSON body
    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .put(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make an authenticated PATCH request with a JSON body
    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .patch(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make an authenticated DELETE request
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }
}

/// Assert a response status, consuming the response
pub async fn assert_status(response: Response, expected: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected {
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("expected status {expected}, got {status}: {body}");
    }
    Ok(())
}

/// Assert a response status and deserialize its JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected: StatusCode,
) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;
    if status != expected {
        anyhow::bail!("expected status {expected}, got {status}: {body}");
    }
    Ok(serde_json::from_str(&body)?)
}
