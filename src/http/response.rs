/// HTTP status codes the server emits.
///
/// - `Ok` (200): Request successful
/// - `Created` (201): Resource created successfully
/// - `NotFound` (404): Resource not found, and the uniform answer for any
///   store failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 404 Not Found
    NotFound,
}

/// Content type of plain-text responses.
pub const TEXT_PLAIN: &str = "text/plain";
/// Content type of file downloads.
pub const OCTET_STREAM: &str = "application/octet-stream";

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use courier::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// A complete HTTP response ready to be serialized.
///
/// Responses always carry a content type; `Content-Length` is derived from
/// the body at serialization time.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Value of the Content-Type header
    pub content_type: &'static str,
    /// Response body as bytes
    pub body: Vec<u8>,
}

impl Response {
    /// A response with the given status and no body.
    pub fn empty(status: StatusCode) -> Self {
        Self {
            status,
            content_type: TEXT_PLAIN,
            body: Vec::new(),
        }
    }

    /// A 200 OK plain-text response with the given body.
    pub fn text(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: TEXT_PLAIN,
            body: body.into(),
        }
    }

    /// A 200 OK octet-stream response carrying file contents.
    pub fn octet_stream(body: Vec<u8>) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: OCTET_STREAM,
            body,
        }
    }

    /// The uniform 404: empty plain-text body, no failure detail.
    pub fn not_found() -> Self {
        Self::empty(StatusCode::NotFound)
    }
}
