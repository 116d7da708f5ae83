//! Incoming HTTP request type.

use std::borrow::Cow;

use bytes::Bytes;
use http::HeaderMap;
use http::header::{HeaderName, HeaderValue};

use crate::pattern::Params;

/// An incoming HTTP request with its body fully buffered.
///
/// The router fills in [`params`](Request::params) just before the handler
/// runs. They live exactly as long as the request value does.
#[derive(Debug)]
pub struct Request {
    pub(crate) method: String,
    pub(crate) path: String,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
    pub(crate) params: Params,
}

impl Request {
    /// A request with no headers and an empty body.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            headers: HeaderMap::new(),
            body: Bytes::new(),
            params: Params::default(),
        }
    }

    /// Builds a request from hyper's parts.
    ///
    /// The path is percent-decoded before routing, so `/t%6Fdos` reaches the
    /// `/todos` route and captures arrive decoded. A path that does not decode
    /// to UTF-8 is kept as received.
    pub(crate) fn from_parts(parts: http::request::Parts, body: Bytes) -> Self {
        let raw = parts.uri.path();
        let path = urlencoding::decode(raw).map_or_else(|_| raw.to_owned(), Cow::into_owned);

        Self {
            method: parts.method.as_str().to_owned(),
            path,
            headers: parts.headers,
            body,
            params: Params::default(),
        }
    }

    /// Replaces the body. Handy when building requests by hand.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Adds a header. Invalid header names or values are ignored.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (HeaderName::from_bytes(name.as_bytes()), HeaderValue::from_str(value)) {
            self.headers.insert(name, value);
        }
        self
    }

    pub fn method(&self) -> &str { &self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn headers(&self) -> &HeaderMap { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }
    pub fn params(&self) -> &Params { &self.params }

    /// Case-insensitive header lookup. Non-UTF-8 values read as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/todos/{id}`, `req.param("id")` on `/todos/42` returns
    /// `Some("42")`. Names the matched route did not declare return `None`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_uri(uri: &str) -> Request {
        let (parts, ()) = http::Request::builder().method("PUT").uri(uri).body(()).unwrap().into_parts();
        Request::from_parts(parts, Bytes::from_static(b"{}"))
    }

    #[test]
    fn from_parts_decodes_the_path() {
        let req = from_uri("/todos/a%20b?verbose=1");
        assert_eq!(req.method(), "PUT");
        assert_eq!(req.path(), "/todos/a b");
        assert_eq!(req.body(), b"{}");
    }

    #[test]
    fn undecodable_path_is_kept_as_received() {
        assert_eq!(from_uri("/todos/%FF").path(), "/todos/%FF");
    }
}
