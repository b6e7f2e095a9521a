//! Typed REST layer over [`HttpClient`](crate::clients::HttpClient).
//!
//! [`RestClient`] turns endpoints and serializable values into requests and
//! decodes successful responses into caller-chosen types.

mod client;

pub use client::RestClient;
