//! Client configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL of the inventory session API when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Runtime configuration for the session API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Session API base URL, no trailing slash.
    pub base_url: String,
}

impl ClientConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `STOCKROOM_BASE_URL`: session API base URL, default `http://localhost:5000`
    #[must_use]
    pub fn from_env() -> Self {
        Self { base_url: resolve_base_url(std::env::var("STOCKROOM_BASE_URL").ok().as_deref()) }
    }

    /// Build config from an explicit base URL (CLI flags, tests).
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self { base_url: resolve_base_url(Some(base_url)) }
    }
}

/// Normalize an optional base URL override, falling back to the default.
/// Trailing slashes are trimmed so path concatenation stays predictable.
fn resolve_base_url(raw: Option<&str>) -> String {
    match raw {
        Some(value) if !value.trim().is_empty() => value.trim().trim_end_matches('/').to_string(),
        _ => DEFAULT_BASE_URL.to_string(),
    }
}
