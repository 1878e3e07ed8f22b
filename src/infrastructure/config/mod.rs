//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - YAML file loading
//! - Environment variable overrides via an explicit binding table
//! - Configuration validation
//! - Type-safe settings structs

pub mod bindings;
pub mod loader;

pub use bindings::{EnvBinding, EnvValue, ValueKind, ENV_BINDINGS};
pub use loader::{ConfigError, ConfigLoader, Violation, DEFAULT_CONFIG_PATH};
