//! Configuration types for the client core.
//!
//! # Overview
//!
//! - [`StarrConfig`]: the immutable settings shared by every request a
//!   client makes (credential, base URL, timeout)
//! - [`StarrConfigBuilder`]: builder for [`StarrConfig`]
//! - [`ApiKey`], [`BaseUrl`], [`BasicAuth`]: validated newtypes
//! - [`ApiVersion`], [`App`]: which API version a backend speaks
//!
//! # Example
//!
//! ```rust
//! use starr::{ApiKey, BaseUrl, StarrConfig};
//! use std::time::Duration;
//!
//! let config = StarrConfig::builder()
//!     .api_key(ApiKey::new("0123456789abcdef").unwrap())
//!     .url(BaseUrl::new("http://localhost:7878").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.timeout(), Duration::from_secs(10));
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiKey, BaseUrl, BasicAuth};
pub use version::{ApiVersion, App, API_ROOT};

use std::time::Duration;

use crate::error::ConfigError;

/// Timeout applied to every request when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for one *arr instance.
///
/// The credential and base URL are fixed at construction and never change,
/// so a config (and every client built from it) can be shared across tasks
/// without locking.
#[derive(Clone, Debug)]
pub struct StarrConfig {
    api_key: ApiKey,
    url: BaseUrl,
    timeout: Duration,
    basic_auth: Option<BasicAuth>,
    user_agent_prefix: Option<String>,
}

impl StarrConfig {
    /// Creates a new builder for constructing a `StarrConfig`.
    #[must_use]
    pub fn builder() -> StarrConfigBuilder {
        StarrConfigBuilder::new()
    }

    /// Shorthand for the common case: key, URL and default timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the key or URL fails validation.
    pub fn new(api_key: impl Into<String>, url: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder()
            .api_key(ApiKey::new(api_key)?)
            .url(BaseUrl::new(url)?)
            .build()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn url(&self) -> &BaseUrl {
        &self.url
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the basic-auth credentials, if configured.
    #[must_use]
    pub const fn basic_auth(&self) -> Option<&BasicAuth> {
        self.basic_auth.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify StarrConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StarrConfig>();
};

/// Builder for [`StarrConfig`].
///
/// `api_key` and `url` are required.
///
/// # Defaults
///
/// - `timeout`: [`DEFAULT_TIMEOUT`] (30 seconds); a zero duration also
///   selects the default
/// - `basic_auth`: `None`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct StarrConfigBuilder {
    api_key: Option<ApiKey>,
    url: Option<BaseUrl>,
    timeout: Option<Duration>,
    basic_auth: Option<BasicAuth>,
    user_agent_prefix: Option<String>,
}

impl StarrConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the base URL (required).
    #[must_use]
    pub fn url(mut self, url: BaseUrl) -> Self {
        self.url = Some(url);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets HTTP basic-auth credentials.
    #[must_use]
    pub fn basic_auth(mut self, auth: BasicAuth) -> Self {
        self.basic_auth = Some(auth);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StarrConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` or `url`
    /// is not set.
    pub fn build(self) -> Result<StarrConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let url = self
            .url
            .ok_or(ConfigError::MissingRequiredField { field: "url" })?;
        let timeout = self
            .timeout
            .filter(|t| !t.is_zero())
            .unwrap_or(DEFAULT_TIMEOUT);

        Ok(StarrConfig {
            api_key,
            url,
            timeout,
            basic_auth: self.basic_auth,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let result = StarrConfig::builder()
            .url(BaseUrl::new("http://localhost:7878").unwrap())
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_requires_url() {
        let result = StarrConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "url" })
        ));
    }

    #[test]
    fn test_builder_defaults() {
        let config = StarrConfig::new("key", "http://localhost:7878").unwrap();
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert!(config.basic_auth().is_none());
        assert!(config.user_agent_prefix().is_none());
        assert_eq!(config.url().as_ref(), "http://localhost:7878");
    }

    #[test]
    fn test_zero_timeout_selects_default() {
        let config = StarrConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .url(BaseUrl::new("http://localhost:7878").unwrap())
            .timeout(Duration::ZERO)
            .build()
            .unwrap();
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_builder_with_all_options() {
        let config = StarrConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .url(BaseUrl::new("https://nas.local/lidarr").unwrap())
            .timeout(Duration::from_secs(5))
            .basic_auth(BasicAuth::new("admin", "pass"))
            .user_agent_prefix("unpackerr/0.14")
            .build()
            .unwrap();

        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.basic_auth().unwrap().username(), "admin");
        assert_eq!(config.user_agent_prefix(), Some("unpackerr/0.14"));
    }

    #[test]
    fn test_new_propagates_validation_errors() {
        assert!(matches!(
            StarrConfig::new("", "http://localhost"),
            Err(ConfigError::EmptyApiKey)
        ));
        assert!(matches!(
            StarrConfig::new("key", "localhost"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }
}
