//! Domain layer for the Shendegard platform
//!
//! This module contains the typed settings model shared by every consumer.

pub mod models;

pub use models::{ApiKeyConfig, AppConfig, CacheConfig, RateLimitConfig, Settings};
