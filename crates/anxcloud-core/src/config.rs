//! Configuration for Anexia API clients.
//!
//! A configuration names the API base URL, the API token and a handful of transport
//! settings. It can be built explicitly or loaded from the environment.

use crate::Error;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://engine.anexia-it.com";

/// Environment variable holding the API token.
pub const TOKEN_ENV_NAME: &str = "ANEXIA_TOKEN";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV_NAME: &str = "ANEXIA_BASE_URL";

/// Default connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Configuration for an Anexia API client.
///
/// No request timeout is set by default: callers bound individual calls themselves, for
/// example with `tokio::time::timeout`.
#[derive(Debug, Validate)]
pub struct AnxcloudConfig {
    #[validate(url)]
    base_url: String,

    token: SecretString,

    tls_verify: bool,

    #[validate(range(min = 1, max = 300))]
    connect_timeout_secs: u64,

    request_timeout: Option<Duration>,

    enable_compression: bool,
}

impl AnxcloudConfig {
    /// Create a new configuration for the given endpoint and token.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the token is empty.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            base_url: base_url.into(),
            token: SecretString::from(token.into()),
            tls_verify: true,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout: None,
            enable_compression: true,
        };

        config.check()?;
        Ok(config)
    }

    /// Load the configuration from `ANEXIA_TOKEN` and `ANEXIA_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not set or the base URL is invalid.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is missing or the base URL is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_ENV_NAME)
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| Error::Config(format!("{TOKEN_ENV_NAME} is not set")))?;
        let base_url = lookup(BASE_URL_ENV_NAME)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self::new(base_url, token)
    }

    /// Validate all settings.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting.
    pub fn check(&self) -> Result<(), Error> {
        self.validate()
            .map_err(|e| Error::Config(format!("Invalid configuration: {e}")))?;

        if self.token.expose_secret().trim().is_empty() {
            return Err(Error::Config("API token must not be empty".into()));
        }
        Ok(())
    }

    /// Enable or disable TLS certificate verification.
    #[must_use]
    pub const fn with_tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    /// Set the connect timeout in seconds.
    #[must_use]
    pub const fn with_connect_timeout_secs(mut self, seconds: u64) -> Self {
        self.connect_timeout_secs = seconds;
        self
    }

    /// Bound every request to the given duration.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Enable or disable response compression.
    #[must_use]
    pub const fn with_compression(mut self, enabled: bool) -> Self {
        self.enable_compression = enabled;
        self
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The API token.
    #[must_use]
    pub const fn token(&self) -> &SecretString {
        &self.token
    }

    /// Whether TLS certificates are verified.
    #[must_use]
    pub const fn tls_verify(&self) -> bool {
        self.tls_verify
    }

    /// Connect timeout as a Duration.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Per-request timeout, if configured.
    #[must_use]
    pub const fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// Whether gzip response compression is negotiated.
    #[must_use]
    pub const fn compression(&self) -> bool {
        self.enable_compression
    }

    /// Parse the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_base_url(&self) -> Result<Url, Error> {
        Url::parse(&self.base_url).map_err(|e| Error::Config(format!("Invalid base URL: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_config_new() {
        let config = AnxcloudConfig::new("https://engine.example.com", "token").unwrap();
        assert_eq!(config.base_url(), "https://engine.example.com");
        assert_eq!(config.token().expose_secret(), "token");
        assert!(config.tls_verify());
        assert!(config.compression());
        assert_eq!(
            config.connect_timeout(),
            Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)
        );
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_config_invalid_url() {
        let result = AnxcloudConfig::new("not-a-url", "token");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_config_empty_token() {
        let result = AnxcloudConfig::new(DEFAULT_BASE_URL, "  ");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_config_builder() {
        let config = AnxcloudConfig::new(DEFAULT_BASE_URL, "token")
            .unwrap()
            .with_tls_verify(false)
            .with_connect_timeout_secs(3)
            .with_request_timeout(Duration::from_secs(45))
            .with_compression(false);

        assert!(!config.tls_verify());
        assert_eq!(config.connect_timeout(), Duration::from_secs(3));
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(45)));
        assert!(!config.compression());
    }

    #[test]
    fn test_config_connect_timeout_range() {
        let config = AnxcloudConfig::new(DEFAULT_BASE_URL, "token")
            .unwrap()
            .with_connect_timeout_secs(0);
        assert!(config.check().is_err());

        let config = config.with_connect_timeout_secs(301);
        assert!(config.check().is_err());

        let config = config.with_connect_timeout_secs(30);
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_config_debug_redacts_token() {
        let config = AnxcloudConfig::new(DEFAULT_BASE_URL, "very-secret").unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("very-secret"));
    }

    #[test]
    fn test_from_lookup_uses_default_base_url() {
        let config = AnxcloudConfig::from_lookup(lookup(&[(TOKEN_ENV_NAME, "abc")])).unwrap();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.token().expose_secret(), "abc");
    }

    #[test]
    fn test_from_lookup_overrides_base_url() {
        let config = AnxcloudConfig::from_lookup(lookup(&[
            (TOKEN_ENV_NAME, "abc"),
            (BASE_URL_ENV_NAME, "http://localhost:8080"),
        ]))
        .unwrap();
        assert_eq!(config.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_from_lookup_requires_token() {
        let err = AnxcloudConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, Error::Config("ANEXIA_TOKEN is not set".into()));
    }

    #[test]
    fn test_parse_base_url() {
        let config = AnxcloudConfig::new("https://engine.example.com:8443", "token").unwrap();
        let url = config.parse_base_url().unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("engine.example.com"));
        assert_eq!(url.port(), Some(8443));
    }
}
