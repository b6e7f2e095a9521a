//! Generic request engine for the *arr APIs.
//!
//! This module provides the [`RestClient`] type: typed GET/POST/PUT/DELETE
//! on top of [`HttpClient`]. Responses are decoded only after the status
//! classifier has accepted them, so an error never leaves a half-filled
//! value behind.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse, ReqError};
use crate::config::{ApiVersion, App, StarrConfig};
use crate::error::ConfigError;
use crate::rest::{Endpoint, ResourceName};

/// Typed REST client for one *arr instance.
///
/// A single collection and a single entity are fetched through separate
/// entry points ([`get_many`](Self::get_many) and [`get_one`](Self::get_one)),
/// so the expected response shape is fixed by the call site. A body of the
/// other shape is a decode error, never coerced.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`; share it behind an `Arc` to issue
/// overlapping calls.
///
/// # Example
///
/// ```rust,ignore
/// use starr::{App, RestClient, StarrConfig, ResourceName};
///
/// const ROOT_FOLDER: ResourceName = ResourceName::new("rootFolder");
///
/// let config = StarrConfig::new("api-key", "http://localhost:7878")?;
/// let client = RestClient::for_app(&config, App::Radarr)?;
///
/// let folders: Vec<serde_json::Value> = client.get_many(client.endpoint(ROOT_FOLDER)).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// The API version being used.
    api_version: ApiVersion,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new client speaking the given API version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the transport cannot be
    /// created.
    pub fn new(config: &StarrConfig, api_version: ApiVersion) -> Result<Self, ConfigError> {
        let http_client = HttpClient::new(config)?;
        tracing::debug!(
            url = %config.url(),
            version = %api_version,
            "created REST client"
        );

        Ok(Self {
            http_client,
            api_version,
        })
    }

    /// Creates a new client for an app, using that app's API version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the transport cannot be
    /// created.
    pub fn for_app(config: &StarrConfig, app: App) -> Result<Self, ConfigError> {
        Self::new(config, app.api_version())
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Starts an endpoint for `resource` under this client's API version.
    #[must_use]
    pub fn endpoint(&self, resource: ResourceName) -> Endpoint {
        Endpoint::new(self.api_version.clone(), resource)
    }

    /// Fetches a single JSON object and decodes it into `T`.
    ///
    /// # Errors
    ///
    /// Returns a status or transport [`ReqError`] if the call fails, and a
    /// decode error if the body is not a `T` (including when it is a list).
    pub async fn get_one<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ReqError> {
        let response = self.send(HttpMethod::Get, endpoint, None::<&()>).await?;
        decode(&response)
    }

    /// Fetches a JSON array and decodes it into a `Vec<T>`.
    ///
    /// # Errors
    ///
    /// Returns a status or transport [`ReqError`] if the call fails, and a
    /// decode error if the body is not an array of `T`.
    pub async fn get_many<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
    ) -> Result<Vec<T>, ReqError> {
        let response = self.send(HttpMethod::Get, endpoint, None::<&()>).await?;
        decode(&response)
    }

    /// Sends `body` with POST and decodes the returned entity.
    ///
    /// # Errors
    ///
    /// Returns an encode error if `body` cannot be serialized, plus any
    /// error [`get_one`](Self::get_one) can return.
    pub async fn post<B, T>(&self, endpoint: Endpoint, body: &B) -> Result<T, ReqError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(HttpMethod::Post, endpoint, Some(body)).await?;
        decode(&response)
    }

    /// Sends `body` with PUT and decodes the returned entity.
    ///
    /// # Errors
    ///
    /// Returns an encode error if `body` cannot be serialized, plus any
    /// error [`get_one`](Self::get_one) can return.
    pub async fn put<B, T>(&self, endpoint: Endpoint, body: &B) -> Result<T, ReqError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(HttpMethod::Put, endpoint, Some(body)).await?;
        decode(&response)
    }

    /// Sends a DELETE. Whatever body a 2xx response carries is ignored.
    ///
    /// # Errors
    ///
    /// Returns a status or transport [`ReqError`] if the call fails. Check
    /// [`ReqError::is_not_found`] for idempotent deletes.
    pub async fn delete(&self, endpoint: Endpoint) -> Result<(), ReqError> {
        self.send(HttpMethod::Delete, endpoint, None::<&()>)
            .await
            .map(drop)
    }

    /// Sends a request and returns the raw, already-classified response.
    ///
    /// # Errors
    ///
    /// Returns an encode error if `body` cannot be serialized, and a status
    /// or transport [`ReqError`] if the call fails.
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        endpoint: Endpoint,
        body: Option<&B>,
    ) -> Result<HttpResponse, ReqError> {
        let mut builder = HttpRequest::builder(method, endpoint);
        if let Some(body) = body {
            builder = builder.json(body)?;
        }
        let request = builder.build()?;

        self.http_client.request(request).await
    }
}

/// Decodes a successful response body into `T`.
fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ReqError> {
    serde_json::from_str(&response.body).map_err(|e| ReqError::decode(e, &response.body))
}
