//! Endpoint configuration for the player API.

/// Address of the local player API when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Environment variable that overrides [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV_VAR: &str = "FANTASY_HELPER_URL";

/// Where the player API lives.
///
/// # Examples
///
/// ```rust
/// use fantasy_helper::ApiConfig;
///
/// let config = ApiConfig::new("http://localhost:9000/");
/// assert_eq!(config.base_url(), "http://localhost:9000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config for `base_url`. Trailing slashes are dropped so that
    /// endpoint paths can be appended directly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the config from an explicit value, then `FANTASY_HELPER_URL`,
    /// then the default.
    pub fn resolve(explicit: Option<String>) -> Self {
        Self::resolve_with(explicit, std::env::var(BASE_URL_ENV_VAR).ok())
    }

    fn resolve_with(explicit: Option<String>, from_env: Option<String>) -> Self {
        explicit
            .or(from_env.filter(|v| !v.trim().is_empty()))
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_localhost() {
        assert_eq!(ApiConfig::default().base_url(), "http://localhost:4000");
    }

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let config = ApiConfig::new("http://127.0.0.1:8080//");
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_explicit_value_overrides_env() {
        let config = ApiConfig::resolve_with(
            Some("http://explicit:1".to_string()),
            Some("http://env:2".to_string()),
        );
        assert_eq!(config.base_url(), "http://explicit:1");
    }

    #[test]
    fn test_env_value_used_without_explicit() {
        let config = ApiConfig::resolve_with(None, Some("http://env:2".to_string()));
        assert_eq!(config.base_url(), "http://env:2");
    }

    #[test]
    fn test_blank_env_value_falls_back_to_default() {
        let config = ApiConfig::resolve_with(None, Some("  ".to_string()));
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn test_nothing_set_uses_default() {
        assert_eq!(ApiConfig::resolve_with(None, None), ApiConfig::default());
    }
}
