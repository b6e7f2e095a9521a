//! Request error types and the status classifier.
//!
//! Every failure a request can end in is reported as a single
//! [`ReqError`]. Its [`ErrorKind`] says what went wrong:
//!
//! - **404**: [`ErrorKind::NotFound`]
//! - **Any other status outside 200-299**: [`ErrorKind::Status`] with the code
//! - **Connection refused, timeout, unreadable body**: [`ErrorKind::Transport`]
//! - **2xx body that does not match the expected type**: [`ErrorKind::Decode`]
//! - **Request body that cannot be serialized**: [`ErrorKind::Encode`]
//!
//! Two errors compare equal when their kinds match. Message text and the
//! response body are carried for humans and never take part in the
//! comparison, so "is this a 404" is one portable check for every backend
//! and every resource:
//!
//! ```rust
//! use starr::{ErrorKind, ReqError};
//!
//! let err = ReqError::from_status(404, r#"{"message":"NotFound"}"#);
//! assert!(err.is_not_found());
//! assert_eq!(err, ReqError::from_status(404, "something else entirely"));
//! assert_eq!(err.status_code(), Some(404));
//! assert_eq!(err, ErrorKind::NotFound);
//! ```

use std::fmt;

use thiserror::Error;

use crate::clients::http_response::HttpResponse;

/// Longest response body excerpt carried in an error message.
const MAX_MESSAGE_LEN: usize = 256;

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request was given a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that must not carry a body.
        method: String,
    },
}

/// Why a request never produced a usable HTTP response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransportFailure {
    /// The connection could not be established.
    Connect,
    /// The configured deadline elapsed.
    Timeout,
    /// The response could not be read as an HTTP response with a body.
    Malformed,
    /// Any other transport-level failure (TLS, redirect loop, ...).
    Other,
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Connect => "connection failed",
            Self::Timeout => "request timed out",
            Self::Malformed => "malformed response",
            Self::Other => "transport error",
        })
    }
}

/// The kind of failure carried by a [`ReqError`].
///
/// This is the identity of an error: two [`ReqError`]s are equal exactly
/// when their kinds are.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The backend answered 404.
    NotFound,
    /// The backend answered with another status outside 200-299.
    Status {
        /// The HTTP status code.
        code: u16,
    },
    /// No usable response was received.
    Transport(TransportFailure),
    /// A 2xx body did not match the destination type.
    Decode,
    /// The request body could not be serialized.
    Encode,
    /// The request was rejected before sending.
    InvalidRequest,
}

impl ErrorKind {
    /// Classifies a non-2xx status code.
    #[must_use]
    pub const fn from_status(code: u16) -> Self {
        if code == 404 {
            Self::NotFound
        } else {
            Self::Status { code }
        }
    }

    /// Folds `Status { code: 404 }` into [`ErrorKind::NotFound`].
    #[must_use]
    pub const fn normalized(self) -> Self {
        match self {
            Self::Status { code } => Self::from_status(code),
            other => other,
        }
    }

    /// Returns the HTTP status code for status-level kinds.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::NotFound => Some(404),
            Self::Status { code } => Some(*code),
            _ => None,
        }
    }
}

/// A failed request.
///
/// See the [module documentation](self) for the classification rules.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ReqError {
    kind: ErrorKind,
    message: String,
    body: Option<String>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ReqError {
    /// Creates an error of the given kind with a message.
    ///
    /// A `Status` kind with code 404 is stored as [`ErrorKind::NotFound`].
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind: kind.normalized(),
            message: message.into(),
            body: None,
            source: None,
        }
    }

    /// Creates an error of the given kind wrapping an underlying cause.
    #[must_use]
    pub fn with_source(
        kind: ErrorKind,
        context: &str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind: kind.normalized(),
            message: format!("{context}: {source}"),
            body: None,
            source: Some(Box::new(source)),
        }
    }

    /// Creates an error for a non-2xx status code and its response body.
    ///
    /// The message is taken from the body's `message` field (or the
    /// `errorMessage`s of a validation failure list) when present, and from
    /// a trimmed excerpt of the raw body otherwise.
    #[must_use]
    pub fn from_status(code: u16, body: &str) -> Self {
        let detail = extract_message(body);
        let message = if detail.is_empty() {
            format!("invalid status code {code} >= 300")
        } else {
            format!("invalid status code {code} >= 300: {detail}")
        };

        Self {
            kind: ErrorKind::from_status(code),
            message,
            body: Some(body.to_string()),
            source: None,
        }
    }

    /// Creates a transport error.
    #[must_use]
    pub fn transport(
        failure: TransportFailure,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::with_source(
            ErrorKind::Transport(failure),
            &failure.to_string(),
            source,
        )
    }

    /// Creates a decode error for a 2xx body that did not fit the destination.
    #[must_use]
    pub fn decode(source: serde_json::Error, body: &str) -> Self {
        let mut error = Self::with_source(ErrorKind::Decode, "decoding response body", source);
        error.body = Some(body.to_string());
        error
    }

    /// Creates an encode error for a request body that could not be serialized.
    #[must_use]
    pub fn encode(source: serde_json::Error) -> Self {
        Self::with_source(ErrorKind::Encode, "encoding request body", source)
    }

    /// Returns the error kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the HTTP status code, if the backend answered at all.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        self.kind.status_code()
    }

    /// Returns `true` if the backend answered 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound)
    }

    /// Returns `true` if no usable response was received.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport(_))
    }

    /// Returns the response body for status and decode errors.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

impl PartialEq for ReqError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for ReqError {}

impl PartialEq<ErrorKind> for ReqError {
    fn eq(&self, other: &ErrorKind) -> bool {
        self.kind == other.normalized()
    }
}

impl From<InvalidHttpRequestError> for ReqError {
    fn from(err: InvalidHttpRequestError) -> Self {
        Self::with_source(ErrorKind::InvalidRequest, "invalid request", err)
    }
}

impl From<reqwest::Error> for ReqError {
    fn from(err: reqwest::Error) -> Self {
        let failure = if err.is_timeout() {
            TransportFailure::Timeout
        } else if err.is_connect() {
            TransportFailure::Connect
        } else if err.is_body() || err.is_decode() {
            TransportFailure::Malformed
        } else {
            TransportFailure::Other
        };
        Self::transport(failure, err)
    }
}

/// Passes 2xx responses through and turns everything else into a [`ReqError`].
///
/// # Errors
///
/// Returns a status-level [`ReqError`] for any code outside 200-299.
pub fn classify(response: HttpResponse) -> Result<HttpResponse, ReqError> {
    if response.is_ok() {
        Ok(response)
    } else {
        Err(ReqError::from_status(response.code, &response.body))
    }
}

/// Pulls a human-readable message out of an error body.
fn extract_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => {
            if let Some(message) = map.get("message").and_then(serde_json::Value::as_str) {
                return message.to_string();
            }
        }
        // Validation failures come back as a list of per-property errors
        Ok(serde_json::Value::Array(items)) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("errorMessage").and_then(serde_json::Value::as_str))
                .collect();
            if !messages.is_empty() {
                return messages.join("; ");
            }
        }
        _ => {}
    }

    truncate(trimmed, MAX_MESSAGE_LEN)
}

fn truncate(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}
