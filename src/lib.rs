//! # starr
//!
//! Shared REST client core for the *arr media-management apps: Lidarr,
//! Prowlarr, Radarr, Readarr, Sonarr and Whisparr.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`StarrConfig`] and [`StarrConfigBuilder`]
//! - Validated newtypes for the API key, base URL and optional basic auth
//! - Versioned endpoint building with [`Endpoint`]
//! - An async request engine, [`RestClient`], with typed `get_one`,
//!   `get_many`, `post`, `put` and `delete`
//! - Status classification into [`ReqError`], comparable by [`ErrorKind`]
//! - A field codec for plugin-defined settings ([`FieldInput`],
//!   [`FieldOutput`], [`FieldValue`])
//! - The [`RestResource`] trait binding resources to CRUD calls
//!
//! ## Quick Start
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
//! assert_eq!(config.url().as_ref(), "http://localhost:7878");
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use starr::{App, RestClient, StarrConfig};
//! use starr::rest::RestResource;
//! use starr::rest::resources::RootFolder;
//!
//! let config = StarrConfig::new("api-key", "http://localhost:7878")?;
//! let client = RestClient::for_app(&config, App::Radarr)?;
//!
//! // GET /api/v3/rootFolder
//! let folders = RootFolder::all(&client).await?;
//!
//! // GET /api/v3/rootFolder/1
//! match RootFolder::find(&client, 1).await {
//!     Ok(folder) => println!("{}", folder.path),
//!     Err(e) if e.is_not_found() => println!("no such folder"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: clients are `Send + Sync` and hold no mutable state
//! - **One round trip per call**: no retries, caching or rate limiting

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    ApiKey, ApiVersion, App, BaseUrl, BasicAuth, StarrConfig, StarrConfigBuilder, API_ROOT,
    DEFAULT_TIMEOUT,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ErrorKind, HttpClient, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, ReqError, RestClient, TransportFailure,
};

// Re-export REST types
pub use rest::resources::PlayTime;
pub use rest::{
    deserialize_null_default, find_field, Endpoint, FieldInput, FieldOutput, FieldValue,
    ResourceName, RestResource, SelectOption,
};
