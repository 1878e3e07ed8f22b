use std::path::Path;

use figment::providers::{Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::bindings::{EnvBinding, ENV_BINDINGS};
use crate::domain::models::Settings;

/// Default configuration file location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {field} (from {var}): expected {expected}")]
    InvalidOverride {
        /// Environment variable that supplied the value
        var: &'static str,
        /// Dotted path of the target field
        field: &'static str,
        /// Raw value as found in the environment
        value: String,
        /// Description of the expected type
        expected: &'static str,
    },

    #[error("Failed to assemble configuration: {0}")]
    Assemble(#[from] figment::Error),

    #[error("Configuration validation failed: {}", format_violations(.violations))]
    Validation {
        /// Every rule the resolved tree broke, not just the first
        violations: Vec<Violation>,
    },
}

/// A single failed validation rule.
#[derive(Debug, Clone)]
pub struct Violation {
    /// Dotted path of the offending field
    pub field: &'static str,
    /// Why the value was rejected
    pub reason: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Layered configuration resolver.
///
/// Precedence (lowest to highest):
/// 1. Compiled-in defaults (`Settings::default()`)
/// 2. `config/config.yaml` (optional; unreadable or malformed files are
///    downgraded to a warning and the layer is skipped)
/// 3. Environment variables, applied row by row from [`ENV_BINDINGS`]
///    (highest priority; later rows win a collision)
///
/// Resolution is synchronous and one-shot: it runs once at startup and the
/// returned [`Settings`] value is handed to consumers as-is. A process that
/// needs different configuration restarts and resolves afresh.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Resolve settings from the default file location, the environment,
    /// and compiled-in defaults.
    pub fn load() -> Result<Settings, ConfigError> {
        Self::resolve(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Resolve settings using a specific configuration file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Settings, ConfigError> {
        Self::resolve(path.as_ref())
    }

    fn resolve(path: &Path) -> Result<Settings, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));

        if let Some(raw) = read_config_file(path) {
            match serde_yaml::from_str::<serde_yaml::Value>(&raw) {
                Ok(serde_yaml::Value::Mapping(_)) => {
                    figment = figment.merge(Yaml::string(&raw));
                }
                Ok(serde_yaml::Value::Null) => {
                    debug!(file = %path.display(), "configuration file is empty, skipping layer");
                }
                Ok(_) => {
                    warn!(
                        file = %path.display(),
                        "configuration file is not a mapping, skipping layer"
                    );
                }
                Err(err) => {
                    warn!(
                        file = %path.display(),
                        error = %err,
                        "could not parse configuration file, skipping layer"
                    );
                }
            }
        }

        for binding in ENV_BINDINGS {
            figment = apply_override(figment, binding)?;
        }

        let settings: Settings = figment.extract()?;
        Self::validate(&settings)?;

        info!(
            app = %settings.app.name,
            version = %settings.app.version,
            debug = settings.app.debug,
            "configuration resolved"
        );
        Ok(settings)
    }

    /// Validate a resolved settings tree.
    ///
    /// Collects every broken rule rather than stopping at the first, so a
    /// misconfigured deployment can be fixed in one pass.
    pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
        let mut violations = Vec::new();

        if settings.app.name.trim().is_empty() {
            violations.push(Violation {
                field: "app.name",
                reason: "must not be empty".to_string(),
            });
        }

        let ports = [
            ("app.port", settings.app.port),
            ("cache.port", settings.cache.port),
        ];
        for (field, port) in ports {
            if port == 0 {
                violations.push(Violation {
                    field,
                    reason: "port must be non-zero".to_string(),
                });
            }
        }

        let ttls = [
            ("cache.ttl_ip", settings.cache.ttl_ip),
            ("cache.ttl_domain", settings.cache.ttl_domain),
            ("cache.ttl_hash", settings.cache.ttl_hash),
            ("cache.ttl_url", settings.cache.ttl_url),
        ];
        for (field, ttl) in ttls {
            if ttl == 0 {
                violations.push(Violation {
                    field,
                    reason: "TTL must be at least 1 second".to_string(),
                });
            }
        }

        if settings.rate_limit.requests_per_minute == 0 {
            violations.push(Violation {
                field: "rate_limit.requests_per_minute",
                reason: "must be positive".to_string(),
            });
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation { violations })
        }
    }
}

fn read_config_file(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(raw) => Some(raw),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!(file = %path.display(), "no configuration file, using defaults and environment");
            None
        }
        Err(err) => {
            warn!(
                file = %path.display(),
                error = %err,
                "could not read configuration file, skipping layer"
            );
            None
        }
    }
}

/// Merge one environment override into the figment, if the variable is set.
///
/// A set-but-empty variable is ignored so that clearing a variable to the
/// empty string behaves like unsetting it. A non-empty value that fails
/// typed parsing is fatal: startup must not continue on a half-applied
/// override.
fn apply_override(figment: Figment, binding: &EnvBinding) -> Result<Figment, ConfigError> {
    let Ok(raw) = std::env::var(binding.var) else {
        return Ok(figment);
    };

    if raw.is_empty() {
        debug!(var = binding.var, "ignoring empty environment override");
        return Ok(figment);
    }

    let value = binding
        .parse(&raw)
        .ok_or_else(|| ConfigError::InvalidOverride {
            var: binding.var,
            field: binding.target,
            value: raw,
            expected: binding.kind.expects(),
        })?;

    Ok(figment.merge(Serialized::default(binding.target, value)))
}
