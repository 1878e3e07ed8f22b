//! Environment variable binding table.
//!
//! Each recognized variable maps to exactly one dotted settings path with a
//! declared value kind, so the override naming convention is data rather
//! than string-splitting logic scattered through the loader.

use serde::Serialize;

/// Expected type of an environment override value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Passed through verbatim
    Text,
    /// Parsed as a signed integer
    Integer,
    /// Parsed from canonical truthy/falsy tokens
    Boolean,
}

impl ValueKind {
    /// Human-readable name used in error messages.
    pub const fn expects(self) -> &'static str {
        match self {
            Self::Text => "a string",
            Self::Integer => "an integer",
            Self::Boolean => "a boolean (true/false, yes/no, on/off, 1/0)",
        }
    }
}

/// A typed environment override value, serialized untagged so it merges
/// into the settings tree as a plain scalar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EnvValue {
    /// Boolean override
    Boolean(bool),
    /// Integer override
    Integer(i64),
    /// String override
    Text(String),
}

/// One environment variable mapped to one settings field.
#[derive(Debug, Clone, Copy)]
pub struct EnvBinding {
    /// Environment variable name
    pub var: &'static str,
    /// Dotted path of the target field in the settings tree
    pub target: &'static str,
    /// Expected value type
    pub kind: ValueKind,
}

impl EnvBinding {
    /// Parse a raw environment value according to the binding's kind.
    ///
    /// Returns `None` when the raw string does not conform; the caller turns
    /// that into a fatal configuration error naming variable and field.
    pub fn parse(&self, raw: &str) -> Option<EnvValue> {
        match self.kind {
            ValueKind::Text => Some(EnvValue::Text(raw.to_string())),
            ValueKind::Integer => raw.trim().parse().ok().map(EnvValue::Integer),
            ValueKind::Boolean => parse_bool(raw).map(EnvValue::Boolean),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// All recognized environment overrides, in application order.
///
/// The table is applied top to bottom and a later row wins a collision, so
/// the provider-prefix credential rows at the end take precedence over the
/// generic `API_KEYS__` delimiter form when both are set.
pub const ENV_BINDINGS: &[EnvBinding] = &[
    // App settings use the bare field-name convention
    EnvBinding { var: "APP_NAME", target: "app.name", kind: ValueKind::Text },
    EnvBinding { var: "VERSION", target: "app.version", kind: ValueKind::Text },
    EnvBinding { var: "DEBUG", target: "app.debug", kind: ValueKind::Boolean },
    EnvBinding { var: "HOST", target: "app.host", kind: ValueKind::Text },
    EnvBinding { var: "PORT", target: "app.port", kind: ValueKind::Integer },
    // Nested groups use the GROUP__FIELD delimiter convention
    EnvBinding { var: "CACHE__HOST", target: "cache.host", kind: ValueKind::Text },
    EnvBinding { var: "CACHE__PORT", target: "cache.port", kind: ValueKind::Integer },
    EnvBinding { var: "CACHE__PASSWORD", target: "cache.password", kind: ValueKind::Text },
    EnvBinding { var: "CACHE__DB", target: "cache.db", kind: ValueKind::Integer },
    EnvBinding { var: "CACHE__TTL_IP", target: "cache.ttl_ip", kind: ValueKind::Integer },
    EnvBinding { var: "CACHE__TTL_DOMAIN", target: "cache.ttl_domain", kind: ValueKind::Integer },
    EnvBinding { var: "CACHE__TTL_HASH", target: "cache.ttl_hash", kind: ValueKind::Integer },
    EnvBinding { var: "CACHE__TTL_URL", target: "cache.ttl_url", kind: ValueKind::Integer },
    EnvBinding {
        var: "RATE_LIMIT__REQUESTS_PER_MINUTE",
        target: "rate_limit.requests_per_minute",
        kind: ValueKind::Integer,
    },
    EnvBinding {
        var: "RATE_LIMIT__BURST_ALLOWANCE",
        target: "rate_limit.burst_allowance",
        kind: ValueKind::Integer,
    },
    EnvBinding { var: "RATE_LIMIT__ENABLED", target: "rate_limit.enabled", kind: ValueKind::Boolean },
    EnvBinding { var: "API_KEYS__VIRUSTOTAL", target: "api_keys.virustotal", kind: ValueKind::Text },
    EnvBinding { var: "API_KEYS__ABUSEIPDB", target: "api_keys.abuseipdb", kind: ValueKind::Text },
    EnvBinding { var: "API_KEYS__OTX", target: "api_keys.otx", kind: ValueKind::Text },
    // Provider-prefix credential convention, applied last so it wins
    EnvBinding { var: "API_KEY_VIRUSTOTAL", target: "api_keys.virustotal", kind: ValueKind::Text },
    EnvBinding { var: "API_KEY_ABUSEIPDB", target: "api_keys.abuseipdb", kind: ValueKind::Text },
    EnvBinding { var: "API_KEY_OTX", target: "api_keys.otx", kind: ValueKind::Text },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(kind: ValueKind) -> EnvBinding {
        EnvBinding { var: "TEST", target: "test", kind }
    }

    #[test]
    fn test_boolean_token_forms() {
        let b = binding(ValueKind::Boolean);
        for raw in ["1", "true", "TRUE", "yes", "Yes", "on", " ON "] {
            assert_eq!(b.parse(raw), Some(EnvValue::Boolean(true)), "{raw}");
        }
        for raw in ["0", "false", "no", "off", "OFF"] {
            assert_eq!(b.parse(raw), Some(EnvValue::Boolean(false)), "{raw}");
        }
        assert_eq!(b.parse("enabled"), None);
        assert_eq!(b.parse("2"), None);
    }

    #[test]
    fn test_integer_parsing() {
        let b = binding(ValueKind::Integer);
        assert_eq!(b.parse("999"), Some(EnvValue::Integer(999)));
        assert_eq!(b.parse(" 42 "), Some(EnvValue::Integer(42)));
        assert_eq!(b.parse("-1"), Some(EnvValue::Integer(-1)));
        assert_eq!(b.parse("12.5"), None);
        assert_eq!(b.parse("lots"), None);
    }

    #[test]
    fn test_text_passthrough() {
        let b = binding(ValueKind::Text);
        assert_eq!(b.parse("abc123"), Some(EnvValue::Text("abc123".to_string())));
    }

    #[test]
    fn test_each_variable_bound_once() {
        let mut vars: Vec<&str> = ENV_BINDINGS.iter().map(|b| b.var).collect();
        vars.sort_unstable();
        let before = vars.len();
        vars.dedup();
        assert_eq!(before, vars.len(), "duplicate variable in binding table");
    }

    #[test]
    fn test_credential_prefix_rows_come_last() {
        let first_prefix = ENV_BINDINGS
            .iter()
            .position(|b| b.var.starts_with("API_KEY_") && !b.var.starts_with("API_KEYS__"))
            .unwrap();
        assert!(ENV_BINDINGS[first_prefix..]
            .iter()
            .all(|b| b.target.starts_with("api_keys.")));
    }
}
