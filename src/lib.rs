//! Shendegard - NLP-Powered Multilingual Threat Intelligence Platform
//!
//! This crate contains the platform's configuration core: a layered settings
//! resolver that merges compiled-in defaults, an optional YAML file, and
//! typed environment overrides into one immutable [`Settings`] value, plus
//! the CLI used to initialize and inspect a deployment's configuration.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the typed settings model
//! - **Infrastructure Layer** (`infrastructure`): configuration resolution
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use shendegard::ConfigLoader;
//!
//! fn main() -> anyhow::Result<()> {
//!     let settings = ConfigLoader::load()?;
//!     println!("{} v{}", settings.app.name, settings.app.version);
//!     Ok(())
//! }
//! ```
//!
//! Resolution happens once at startup; consumers receive the resolved value
//! by injection and never read the file or environment themselves.

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{ApiKeyConfig, AppConfig, CacheConfig, RateLimitConfig, Settings};
pub use infrastructure::config::{ConfigError, ConfigLoader, Violation, DEFAULT_CONFIG_PATH};
