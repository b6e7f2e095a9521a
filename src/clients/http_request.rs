//! HTTP request types.
//!
//! This module provides the [`HttpRequest`] type and its builder. Request
//! bodies are always JSON, encoded the same way every time: UTF-8, fields
//! in struct declaration order, terminated by a single `\n`.

use std::fmt;

use serde::Serialize;

use crate::clients::errors::{InvalidHttpRequestError, ReqError};
use crate::rest::Endpoint;

/// HTTP methods used by the *arr APIs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Read a resource or collection.
    Get,
    /// Create a resource.
    Post,
    /// Replace a resource.
    Put,
    /// Remove a resource.
    Delete,
}

impl HttpMethod {
    /// Returns `true` for methods that must carry a body.
    #[must_use]
    pub const fn has_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

/// Serializes a request body to its wire form.
///
/// # Errors
///
/// Returns an [`ErrorKind::Encode`](crate::ErrorKind::Encode) error if the
/// value cannot be represented as JSON (e.g. a map with non-string keys).
pub fn encode_json<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>, ReqError> {
    let mut bytes = serde_json::to_vec(body).map_err(ReqError::encode)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// A request to be sent to an *arr backend.
///
/// # Example
///
/// ```rust
/// use starr::{ApiVersion, Endpoint, HttpMethod, HttpRequest, ResourceName};
///
/// const TAG: ResourceName = ResourceName::new("tag");
///
/// let request = HttpRequest::builder(HttpMethod::Post, Endpoint::new(ApiVersion::V3, TAG))
///     .json(&serde_json::json!({"label": "4k"}))
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(request.body.as_deref(), Some(&b"{\"label\":\"4k\"}\n"[..]));
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// Where the request goes.
    pub endpoint: Endpoint,
    /// The encoded JSON body, if any.
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub const fn builder(method: HttpMethod, endpoint: Endpoint) -> HttpRequestBuilder {
        HttpRequestBuilder {
            http_method: method,
            endpoint,
            body: None,
        }
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if a POST or PUT has no body, or a
    /// GET or DELETE has one.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match (self.http_method.has_body(), self.body.is_some()) {
            (true, false) => Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            }),
            (false, true) => Err(InvalidHttpRequestError::UnexpectedBody {
                method: self.http_method.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    endpoint: Endpoint,
    body: Option<Vec<u8>>,
}

impl HttpRequestBuilder {
    /// Encodes `body` as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns an encode error if serialization fails.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ReqError> {
        self.body = Some(encode_json(body)?);
        Ok(self)
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            endpoint: self.endpoint,
            body: self.body,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiVersion;
    use crate::rest::ResourceName;
    use serde::Serialize;

    const ROOT_FOLDER: ResourceName = ResourceName::new("rootFolder");

    fn endpoint() -> Endpoint {
        Endpoint::new(ApiVersion::V3, ROOT_FOLDER)
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        path: String,
        free_space: i64,
        accessible: bool,
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_encode_json_keeps_declaration_order_and_newline() {
        let body = encode_json(&Sample {
            path: "/movies".to_string(),
            free_space: 42,
            accessible: true,
        })
        .unwrap();
        assert_eq!(
            String::from_utf8(body).unwrap(),
            "{\"path\":\"/movies\",\"freeSpace\":42,\"accessible\":true}\n"
        );
    }

    #[test]
    fn test_encode_json_rejects_non_string_keys() {
        let mut map = std::collections::HashMap::new();
        map.insert(vec![1u8], 1);
        let err = encode_json(&map).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Encode);
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, endpoint())
            .build()
            .unwrap();
        assert_eq!(request.http_method, HttpMethod::Get);
        assert!(request.body.is_none());
    }

    #[test]
    fn test_verify_requires_body_for_post_and_put() {
        for method in [HttpMethod::Post, HttpMethod::Put] {
            let result = HttpRequest::builder(method, endpoint()).build();
            assert!(matches!(
                result,
                Err(InvalidHttpRequestError::MissingBody { .. })
            ));
        }
    }

    #[test]
    fn test_verify_rejects_body_on_delete() {
        let result = HttpRequest::builder(HttpMethod::Delete, endpoint())
            .json(&serde_json::json!({}))
            .unwrap()
            .build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::UnexpectedBody { method }) if method == "DELETE"
        ));
    }
}
