//! Endpoint path construction for the *arr APIs.
//!
//! Every request targets `/{api_root}/{version}/{resource}[/{id}][?{query}]`.
//! [`Endpoint`] assembles that path from its parts and normalizes the
//! separators, so callers never concatenate strings by hand.
//!
//! # Example
//!
//! ```rust
//! use starr::{ApiVersion, Endpoint, ResourceName};
//!
//! const ROOT_FOLDER: ResourceName = ResourceName::new("rootFolder");
//!
//! let endpoint = Endpoint::new(ApiVersion::V3, ROOT_FOLDER).id(2);
//! assert_eq!(endpoint.path(), "/api/v3/rootFolder/2");
//!
//! let endpoint = Endpoint::new(ApiVersion::V3, ROOT_FOLDER);
//! assert_eq!(endpoint.path(), "/api/v3/rootFolder");
//! ```

use std::fmt;

use crate::config::{ApiVersion, BaseUrl, API_ROOT};

/// The name of a backend resource, such as `rootFolder` or `system/status`.
///
/// Construct it in a `const` so an empty name fails the build:
///
/// ```compile_fail
/// use starr::ResourceName;
///
/// const NOTHING: ResourceName = ResourceName::new("");
/// let _ = NOTHING;
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResourceName(&'static str);

impl ResourceName {
    /// Creates a resource name.
    ///
    /// # Panics
    ///
    /// Panics if `name` has no characters other than `/`. In a `const`
    /// item this is a compile error.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        let bytes = name.as_bytes();
        let mut i = 0;
        let mut has_segment = false;
        while i < bytes.len() {
            if bytes[i] != b'/' {
                has_segment = true;
            }
            i += 1;
        }
        assert!(has_segment, "resource name must not be empty");
        Self(name)
    }

    /// Returns the name as written.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The target of one request: path segments plus ordered query parameters.
///
/// Endpoints are built per call and consumed by the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    api_root: &'static str,
    api_version: ApiVersion,
    resource: ResourceName,
    id: Option<i64>,
    query: Vec<(String, String)>,
}

impl Endpoint {
    /// Creates a collection endpoint under the default `api` root.
    #[must_use]
    pub const fn new(api_version: ApiVersion, resource: ResourceName) -> Self {
        Self {
            api_root: API_ROOT,
            api_version,
            resource,
            id: None,
            query: Vec::new(),
        }
    }

    /// Replaces the `api` root segment.
    #[must_use]
    pub const fn api_root(mut self, root: &'static str) -> Self {
        self.api_root = root;
        self
    }

    /// Targets a single entity. An id of zero means "no id".
    #[must_use]
    pub const fn id(mut self, id: i64) -> Self {
        self.id = if id == 0 { None } else { Some(id) };
        self
    }

    /// Appends a query parameter, keeping insertion order.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Sets a query parameter in place if the key exists, otherwise appends it.
    #[must_use]
    pub fn set_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.query.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.query.push((key, value)),
        }
        self
    }

    /// Returns the resource this endpoint targets.
    #[must_use]
    pub const fn resource(&self) -> ResourceName {
        self.resource
    }

    /// Returns the entity id, if one is set.
    #[must_use]
    pub const fn entity_id(&self) -> Option<i64> {
        self.id
    }

    /// Returns the query parameters in insertion order.
    #[must_use]
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Renders the path, starting with `/` and free of empty segments.
    #[must_use]
    pub fn path(&self) -> String {
        let id = self.id.map(|id| id.to_string());
        let segments = [
            self.api_root,
            self.api_version.as_str(),
            self.resource.as_str(),
            id.as_deref().unwrap_or_default(),
        ];

        let mut path = String::new();
        for segment in segments
            .iter()
            .flat_map(|s| s.split('/'))
            .filter(|s| !s.is_empty())
        {
            path.push('/');
            path.push_str(segment);
        }
        path
    }

    /// Renders the percent-encoded query string, or `None` without parameters.
    #[must_use]
    pub fn query_string(&self) -> Option<String> {
        if self.query.is_empty() {
            return None;
        }

        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        Some(query)
    }

    /// Renders the path followed by `?query` when there is one.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        match self.query_string() {
            Some(query) => format!("{}?{query}", self.path()),
            None => self.path(),
        }
    }

    /// Renders the absolute URL against `base`.
    #[must_use]
    pub fn url(&self, base: &BaseUrl) -> String {
        base.join(&self.path_and_query())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path_and_query())
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceName>();
    assert_send_sync::<Endpoint>();
};

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT_FOLDER: ResourceName = ResourceName::new("rootFolder");
    const SYSTEM_STATUS: ResourceName = ResourceName::new("/system/status/");

    #[test]
    fn test_path_with_id() {
        let endpoint = Endpoint::new(ApiVersion::V3, ROOT_FOLDER).id(2);
        assert_eq!(endpoint.path(), "/api/v3/rootFolder/2");
    }

    #[test]
    fn test_path_without_id() {
        let endpoint = Endpoint::new(ApiVersion::V3, ROOT_FOLDER);
        assert_eq!(endpoint.path(), "/api/v3/rootFolder");
        assert_eq!(endpoint.entity_id(), None);
    }

    #[test]
    fn test_zero_id_is_absent() {
        let endpoint = Endpoint::new(ApiVersion::V1, ROOT_FOLDER).id(0);
        assert_eq!(endpoint.path(), "/api/v1/rootFolder");
    }

    #[test]
    fn test_path_normalizes_separators() {
        let endpoint = Endpoint::new(ApiVersion::V3, SYSTEM_STATUS).api_root("/api/");
        assert_eq!(endpoint.path(), "/api/v3/system/status");
    }

    #[test]
    fn test_negative_id_renders_base10() {
        let endpoint = Endpoint::new(ApiVersion::V3, ROOT_FOLDER).id(-7);
        assert_eq!(endpoint.path(), "/api/v3/rootFolder/-7");
    }

    #[test]
    fn test_query_string_preserves_insertion_order() {
        let endpoint = Endpoint::new(ApiVersion::V3, ROOT_FOLDER)
            .query_param("zeta", "1")
            .query_param("alpha", "2")
            .query_param("mid", "3");
        assert_eq!(endpoint.query_string().as_deref(), Some("zeta=1&alpha=2&mid=3"));
    }

    #[test]
    fn test_query_string_is_percent_encoded() {
        let endpoint =
            Endpoint::new(ApiVersion::V3, ROOT_FOLDER).query_param("term", "the matrix & more");
        assert_eq!(
            endpoint.query_string().as_deref(),
            Some("term=the%20matrix%20%26%20more")
        );
    }

    #[test]
    fn test_set_query_param_replaces_in_place() {
        let endpoint = Endpoint::new(ApiVersion::V3, ROOT_FOLDER)
            .query_param("a", "1")
            .query_param("forceSave", "false")
            .query_param("b", "2")
            .set_query_param("forceSave", "true")
            .set_query_param("c", "3");
        assert_eq!(
            endpoint.query_string().as_deref(),
            Some("a=1&forceSave=true&b=2&c=3")
        );
    }

    #[test]
    fn test_path_and_query() {
        let endpoint = Endpoint::new(ApiVersion::V3, ResourceName::new("downloadClient"))
            .id(3)
            .query_param("forceSave", "false");
        assert_eq!(
            endpoint.path_and_query(),
            "/api/v3/downloadClient/3?forceSave=false"
        );
        assert_eq!(endpoint.to_string(), endpoint.path_and_query());
    }

    #[test]
    fn test_no_query_string_without_params() {
        let endpoint = Endpoint::new(ApiVersion::V3, ROOT_FOLDER);
        assert!(endpoint.query_string().is_none());
        assert_eq!(endpoint.path_and_query(), "/api/v3/rootFolder");
    }

    #[test]
    fn test_url_joins_base_with_prefix() {
        let base = BaseUrl::new("http://localhost:7878/radarr/").unwrap();
        let endpoint = Endpoint::new(ApiVersion::V3, ROOT_FOLDER).id(1);
        assert_eq!(
            endpoint.url(&base),
            "http://localhost:7878/radarr/api/v3/rootFolder/1"
        );
    }

    #[test]
    #[should_panic(expected = "resource name must not be empty")]
    fn test_empty_resource_name_panics_at_runtime() {
        let name = String::from("/");
        let leaked: &'static str = Box::leak(name.into_boxed_str());
        let _ = ResourceName::new(leaked);
    }
}
