//! HTTP client for *arr API communication.
//!
//! This module provides the [`HttpClient`] type, which owns the transport,
//! attaches the credential and default headers to every request, and hands
//! each response to the status classifier.

use std::collections::HashMap;
use std::time::Instant;

use base64::Engine as _;

use crate::clients::errors::{classify, ReqError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUrl, StarrConfig};
use crate::error::ConfigError;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// HTTP client for making requests to one *arr instance.
///
/// The client handles:
/// - URL construction from the configured base URL and the request endpoint
/// - Default headers: `Accept`, `User-Agent`, the API key and optional
///   basic auth
/// - The per-request timeout from [`StarrConfig::timeout`]
/// - Status classification of every response
///
/// It never retries and keeps no state between calls beyond what the
/// underlying connection pool does on its own.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `http://localhost:7878`).
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &StarrConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("{user_agent_prefix}starr-rs v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            API_KEY_HEADER.to_string(),
            config.api_key().as_ref().to_string(),
        );

        if let Some(auth) = config.basic_auth() {
            let token = base64::engine::general_purpose::STANDARD
                .encode(format!("{}:{}", auth.username(), auth.password()));
            default_headers.insert("Authorization".to_string(), format!("Basic {token}"));
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConfigError::HttpClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.url().clone(),
            default_headers,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request and classifies the response.
    ///
    /// Only responses with a 2xx status are returned as `Ok`; their bodies
    /// are left undecoded for the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ReqError`] if:
    /// - the request fails validation (`InvalidRequest`)
    /// - the transport fails or the body cannot be read (`Transport`)
    /// - the status is outside 200-299 (`NotFound` / `Status`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, ReqError> {
        request.verify()?;

        let path = request.endpoint.path_and_query();
        let url = self.base_url.join(&path);

        let mut builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            builder = builder.header(key, value);
        }

        if let Some(body) = request.body {
            // Field values may hold passwords and API keys
            tracing::trace!(bytes = body.len(), "request body");
            builder = builder
                .header("Content-Type", "application/json")
                .body(body);
        }

        tracing::debug!(method = %request.http_method, path = %path, "sending request");
        let started = Instant::now();

        let res = builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        tracing::debug!(
            method = %request.http_method,
            path = %path,
            status = code,
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "received response"
        );
        tracing::trace!(bytes = body.len(), "response body");

        classify(HttpResponse::new(code, headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, BasicAuth};

    fn create_test_config() -> StarrConfig {
        StarrConfig::new("mockAPIkey", "http://localhost:7878").unwrap()
    }

    #[test]
    fn test_client_construction() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(client.base_url().as_ref(), "http://localhost:7878");
    }

    #[test]
    fn test_api_key_header_injection() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.default_headers().get(API_KEY_HEADER),
            Some(&"mockAPIkey".to_string())
        );
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_no_authorization_header_without_basic_auth() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert!(client.default_headers().get("Authorization").is_none());
    }

    #[test]
    fn test_basic_auth_header() {
        let config = StarrConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .url(BaseUrl::new("http://localhost:7878").unwrap())
            .basic_auth(BasicAuth::new("Aladdin", "open sesame"))
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==".to_string())
        );
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = StarrConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .url(BaseUrl::new("http://localhost:7878").unwrap())
            .user_agent_prefix("notifiarr/0.8")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("notifiarr/0.8 | "));
        assert!(user_agent.contains("starr-rs v"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
