//! Integration test support
//!
//! Spawns the full API server against a real PostgreSQL instance and drives
//! it over HTTP. Tests are skipped when the environment is not configured.

pub mod fixtures;
pub mod helpers;

pub use helpers::{assert_json, assert_status, check_test_env, TestServer};
