//! HTTP client types for *arr API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: async transport with the credential and default headers
//! - [`HttpRequest`] / [`HttpResponse`]: one request and its raw response
//! - [`HttpMethod`]: GET, POST, PUT, DELETE
//! - [`ReqError`] / [`ErrorKind`]: every way a request can fail
//! - [`rest::RestClient`]: typed get/post/put/delete on top of `HttpClient`
//!
//! # Behavior
//!
//! Each call is one round trip. There are no retries, no rate limiting and
//! no caching; the timeout configured in
//! [`StarrConfig`](crate::StarrConfig) applies to every request.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{classify, ErrorKind, InvalidHttpRequestError, ReqError, TransportFailure};
pub use http_client::{HttpClient, API_KEY_HEADER, SDK_VERSION};
pub use http_request::{encode_json, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use rest::RestClient;
