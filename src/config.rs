//! Client configuration.

use std::time::Duration;

/// Default API host.
pub const DEFAULT_API_BASE: &str = "https://webapi.400gb.com";

/// Origin header the API expects on every request.
pub const DEFAULT_ORIGIN: &str = "https://545c.com";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Endpoints and transport settings for [`crate::CtfileClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every request path is appended to, without a trailing slash.
    pub api_base: String,
    /// Value sent in the `Origin` header.
    pub origin: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Join a request path (or a provider-supplied relative resource) onto the API base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base, "https://webapi.400gb.com");
        assert_eq!(config.origin, "https://545c.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_api_base_trailing_slash_trimmed() {
        let config = ClientConfig::default().with_api_base("http://127.0.0.1:1234/");
        assert_eq!(config.endpoint("/getdir.php"), "http://127.0.0.1:1234/getdir.php");
    }
}
