//! Configuration error types.
//!
//! This module contains the errors raised while building a
//! [`StarrConfig`](crate::StarrConfig) or one of its validated newtypes.
//! Request-time failures live in [`ReqError`](crate::ReqError).
//!
//! # Example
//!
//! ```rust
//! use starr::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring a client.
///
/// Every constructor in [`config`](crate::config) validates its input and
/// returns one of these variants instead of panicking.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Copy it from Settings -> General in the app.")]
    EmptyApiKey,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Expected an http or https URL such as 'http://localhost:7878'.")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected 'v' followed by digits (e.g., 'v3').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// App name is not one of the supported backends.
    #[error("Unknown app '{name}'. Expected one of: lidarr, prowlarr, radarr, readarr, sonarr, whisparr.")]
    InvalidApp {
        /// The name that was provided.
        name: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to build HTTP client: {reason}")]
    HttpClientBuild {
        /// Why the transport refused the configuration.
        reason: String,
    },
}
