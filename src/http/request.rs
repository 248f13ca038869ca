use std::collections::HashMap;

/// HTTP request methods.
///
/// The standard method tokens are all parsed; the route table decides which
/// of them are actually served (anything unregistered resolves to 404).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// PATCH - Partial modification of a resource
    PATCH,
}

/// Represents a parsed HTTP request from a client.
///
/// Only ever constructed once the connection buffer holds the complete
/// message: the full header block plus exactly `Content-Length` body bytes.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request path, always starting with `/`
    pub path: String,
    /// HTTP version (typically "HTTP/1.1")
    pub version: String,
    /// Request headers, keys verbatim as received
    pub headers: HashMap<String, String>,
    /// Request body, length exactly the declared Content-Length
    pub body: Vec<u8>,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: Option<Method>,
    path: Option<String>,
    version: Option<String>,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Example
    ///
    /// ```
    /// # use courier::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            path: None,
            version: None,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            method: self.method.ok_or("method missing")?,
            path: self.path.ok_or("path missing")?,
            version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            headers: self.headers,
            body: self.body,
        })
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Request {
    /// Retrieves a header value by name, exactly as it was received.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// The first `/`-delimited path segment: the bytes between the first and
    /// second `/`, or everything after the first `/` when no second `/`
    /// exists. The bare root yields the empty segment.
    ///
    /// # Example
    ///
    /// ```
    /// # use courier::http::request::{Method, RequestBuilder};
    /// let req = RequestBuilder::new()
    ///     .method(Method::GET)
    ///     .path("/echo/foo/bar")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(req.route_segment(), "echo");
    /// assert_eq!(req.trailing_segments(), "foo/bar");
    /// ```
    pub fn route_segment(&self) -> &str {
        let trimmed = self.path.strip_prefix('/').unwrap_or(&self.path);
        match trimmed.find('/') {
            Some(i) => &trimmed[..i],
            None => trimmed,
        }
    }

    /// Everything after the second `/`, with the `/` separators between the
    /// remaining segments left in place. Empty when the path has at most one
    /// segment.
    pub fn trailing_segments(&self) -> &str {
        let trimmed = self.path.strip_prefix('/').unwrap_or(&self.path);
        match trimmed.find('/') {
            Some(i) => &trimmed[i + 1..],
            None => "",
        }
    }
}
