//! HTTP response type.

use std::collections::HashMap;

/// A response received from an *arr backend.
///
/// The body is kept as raw text; decoding into a typed destination happens
/// only after the status has been classified as a success.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` for status codes 200-299.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header (case-insensitive name).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns `true` if the body holds nothing but whitespace.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ok_range() {
        let ok = |code| HttpResponse::new(code, HashMap::new(), String::new()).is_ok();
        assert!(ok(200));
        assert!(ok(201));
        assert!(ok(299));
        assert!(!ok(199));
        assert!(!ok(300));
        assert!(!ok(404));
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            vec!["application/json; charset=utf-8".to_string()],
        );
        let response = HttpResponse::new(200, headers, "{}".to_string());

        assert_eq!(
            response.header("Content-Type"),
            Some("application/json; charset=utf-8")
        );
        assert!(response.header("X-Missing").is_none());
    }

    #[test]
    fn test_is_empty_ignores_whitespace() {
        let response = HttpResponse::new(200, HashMap::new(), " \n".to_string());
        assert!(response.is_empty());
    }
}
