//! Validated newtype wrappers for configuration values.
//!
//! These wrappers validate their contents on construction so a client can
//! never be built around an empty key or a malformed URL.

use crate::error::ConfigError;
use std::fmt;

/// A validated *arr API key.
///
/// The key is sent with every request and is never printed: the `Debug`
/// implementation masks it.
///
/// # Example
///
/// ```rust
/// use starr::ApiKey;
///
/// let key = ApiKey::new("0123456789abcdef").unwrap();
/// assert_eq!(key.as_ref(), "0123456789abcdef");
/// assert_eq!(format!("{key:?}"), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key. Surrounding whitespace is removed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// HTTP basic-auth credentials for apps sitting behind an authenticating
/// reverse proxy.
///
/// The password is masked in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    /// Creates a new credential pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the user name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"*****")
            .finish()
    }
}

/// A validated base URL for one *arr instance.
///
/// The URL must use the `http` or `https` scheme and carry a host. It may
/// include a path prefix when the app is served under a URL base (e.g.
/// `http://nas.local/radarr`). Trailing slashes are removed, so endpoint
/// paths can be appended without producing `//`.
///
/// # Example
///
/// ```rust
/// use starr::BaseUrl;
///
/// let url = BaseUrl::new("http://nas.local:7878/radarr/").unwrap();
/// assert_eq!(url.as_ref(), "http://nas.local:7878/radarr");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "nas.local");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no scheme, an
    /// unsupported scheme, no host, or carries a query or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let url = raw.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: raw.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() || url.contains(['?', '#']) {
            return Err(invalid());
        }

        // Authority runs to the path prefix; the host follows any userinfo
        let authority_end = url[host_start..]
            .find('/')
            .map_or(url.len(), |i| host_start + i);
        let host_start = url[host_start..authority_end]
            .rfind('@')
            .map_or(host_start, |i| host_start + i + 1);
        let host = &url[host_start..authority_end];
        let host_end = if host.starts_with('[') {
            let close = host.find(']').ok_or_else(invalid)?;
            host_start + close + 1
        } else {
            host.find(':').map_or(authority_end, |i| host_start + i)
        };
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "http").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Joins an absolute path (starting with `/`) onto this base.
    #[must_use]
    pub fn join(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.url)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_and_blank() {
        assert_eq!(ApiKey::new(""), Err(ConfigError::EmptyApiKey));
        assert_eq!(ApiKey::new("   "), Err(ConfigError::EmptyApiKey));
    }

    #[test]
    fn test_api_key_trims_whitespace() {
        let key = ApiKey::new(" abc\n").unwrap();
        assert_eq!(key.as_ref(), "abc");
    }

    #[test]
    fn test_api_key_debug_is_masked() {
        let key = ApiKey::new("super-secret").unwrap();
        let debug = format!("{key:?}");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_basic_auth_debug_masks_password() {
        let auth = BasicAuth::new("admin", "hunter2");
        let debug = format!("{auth:?}");
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_base_url_strips_trailing_slashes() {
        let url = BaseUrl::new("http://localhost:8989//").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:8989");
        assert_eq!(url.host_name(), "localhost");
    }

    #[test]
    fn test_base_url_keeps_path_prefix() {
        let url = BaseUrl::new("https://media.example.com/sonarr").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "media.example.com");
        assert_eq!(
            url.join("/api/v3/series"),
            "https://media.example.com/sonarr/api/v3/series"
        );
    }

    #[test]
    fn test_base_url_host_skips_userinfo_and_keeps_ipv6_brackets() {
        let url = BaseUrl::new("http://[::1]:7878").unwrap();
        assert_eq!(url.host_name(), "[::1]");

        let url = BaseUrl::new("http://user:pw@nas.local:8989/sonarr").unwrap();
        assert_eq!(url.host_name(), "nas.local");

        let url = BaseUrl::new("https://[fe80::2]/radarr").unwrap();
        assert_eq!(url.host_name(), "[fe80::2]");
        assert_eq!(url.join("/api/v3/tag"), "https://[fe80::2]/radarr/api/v3/tag");
    }

    #[test]
    fn test_base_url_rejects_invalid_values() {
        for bad in [
            "",
            "localhost:7878",
            "ftp://localhost",
            "http://",
            "http://:7878",
            "http://localhost/?x=1",
            "http://user@",
            "http://[::1:7878",
        ] {
            assert!(
                matches!(BaseUrl::new(bad), Err(ConfigError::InvalidBaseUrl { .. })),
                "{bad} should be rejected"
            );
        }
    }
}
