use serde::{Deserialize, Serialize};

/// Fully resolved application settings for Shendegard.
///
/// Every field carries a compiled-in default, so the tree deserializes to a
/// fully populated value from any partial source. Resolution layers sources
/// in fixed precedence (defaults, then the YAML file, then environment
/// overrides); consumers receive the resolved value by injection and treat
/// it as read-only for the process lifetime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    /// Core application settings
    #[serde(default)]
    pub app: AppConfig,

    /// Redis cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    /// External threat intelligence API credentials
    #[serde(default)]
    pub api_keys: ApiKeyConfig,
}

/// Core application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    /// Application name used in logs and API metadata
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version advertised to clients
    #[serde(default = "default_app_version")]
    pub version: String,

    /// Enable debug mode
    #[serde(default)]
    pub debug: bool,

    /// Bind address for the HTTP layer
    #[serde(default = "default_app_host")]
    pub host: String,

    /// Bind port for the HTTP layer
    #[serde(default = "default_app_port")]
    pub port: u16,
}

fn default_app_name() -> String {
    "Shendegard".to_string()
}

fn default_app_version() -> String {
    "1.0.0".to_string()
}

fn default_app_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_app_port() -> u16 {
    8000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
            debug: false,
            host: default_app_host(),
            port: default_app_port(),
        }
    }
}

/// Redis cache configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CacheConfig {
    /// Redis host
    #[serde(default = "default_cache_host")]
    pub host: String,

    /// Redis port
    #[serde(default = "default_cache_port")]
    pub port: u16,

    /// Redis password, absent when the instance is unauthenticated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Redis database index
    #[serde(default)]
    pub db: u32,

    /// Cache TTL in seconds for IP lookups (1 hour)
    #[serde(default = "default_ttl_ip")]
    pub ttl_ip: u64,

    /// Cache TTL in seconds for domain lookups (24 hours)
    #[serde(default = "default_ttl_domain")]
    pub ttl_domain: u64,

    /// Cache TTL in seconds for file hash lookups (1 week)
    #[serde(default = "default_ttl_hash")]
    pub ttl_hash: u64,

    /// Cache TTL in seconds for URL lookups (1 hour)
    #[serde(default = "default_ttl_url")]
    pub ttl_url: u64,
}

fn default_cache_host() -> String {
    "localhost".to_string()
}

const fn default_cache_port() -> u16 {
    6379
}

const fn default_ttl_ip() -> u64 {
    3600
}

const fn default_ttl_domain() -> u64 {
    86400
}

const fn default_ttl_hash() -> u64 {
    604_800
}

const fn default_ttl_url() -> u64 {
    3600
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            host: default_cache_host(),
            port: default_cache_port(),
            password: None,
            db: 0,
            ttl_ip: default_ttl_ip(),
            ttl_domain: default_ttl_domain(),
            ttl_hash: default_ttl_hash(),
            ttl_url: default_ttl_url(),
        }
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RateLimitConfig {
    /// Requests allowed per minute per client
    #[serde(default = "default_requests_per_minute")]
    pub requests_per_minute: u32,

    /// Additional burst capacity above the per-minute budget
    #[serde(default = "default_burst_allowance")]
    pub burst_allowance: u32,

    /// Whether rate limiting is enforced
    #[serde(default = "default_true")]
    pub enabled: bool,
}

const fn default_requests_per_minute() -> u32 {
    60
}

const fn default_burst_allowance() -> u32 {
    10
}

const fn default_true() -> bool {
    true
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_minute: default_requests_per_minute(),
            burst_allowance: default_burst_allowance(),
            enabled: default_true(),
        }
    }
}

/// External threat intelligence API credentials.
///
/// Each credential is independently optional; an absent key stays `None`
/// and is never conflated with an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ApiKeyConfig {
    /// VirusTotal API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virustotal: Option<String>,

    /// AbuseIPDB API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abuseipdb: Option<String>,

    /// AlienVault OTX API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otx: Option<String>,
}
