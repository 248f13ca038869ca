use crate::http::request::{Method, Request};
use std::collections::HashMap;

#[derive(Debug)]
pub enum ParseError {
    InvalidRequest,
    InvalidMethod,
    InvalidHeader,
    Incomplete,
}

/// Status line plus header fields, parsed from the bytes before the
/// header/body separator.
#[derive(Debug)]
pub struct RequestHead {
    pub method: Method,
    pub path: String,
    pub version: String,
    pub headers: HashMap<String, String>,
}

impl RequestHead {
    /// Declared body length; absent or non-numeric values count as zero.
    fn content_length(&self) -> usize {
        self.headers
            .get("Content-Length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }
}

/// Parses the header block: the status line split into exactly three tokens,
/// then one `key: value` field per line. Keys are stored verbatim, values
/// trimmed; a later duplicate key overwrites the earlier one.
pub fn parse_request_head(head: &[u8]) -> Result<RequestHead, ParseError> {
    let head_str = std::str::from_utf8(head).map_err(|_| ParseError::InvalidRequest)?;

    let mut lines = head_str.split("\r\n");

    // Status line
    let status_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let tokens: Vec<&str> = status_line.split_whitespace().collect();
    let [method_str, path, version] = tokens.as_slice() else {
        return Err(ParseError::InvalidRequest);
    };

    if !path.starts_with('/') {
        return Err(ParseError::InvalidRequest);
    }

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;

    // Headers
    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        let (key, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;

        headers.insert(key.trim().to_string(), value.trim().to_string());
    }

    Ok(RequestHead {
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
    })
}

/// Attempts to assemble one complete request from the accumulated buffer.
///
/// Returns the request plus the number of bytes it consumed, so the caller
/// can advance its buffer and keep any pipelined leftovers. Reports
/// `Incomplete` while the header/body separator is missing or fewer than
/// `Content-Length` body bytes have arrived.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;

    let head = parse_request_head(&buf[..headers_end])?;
    let content_length = head.content_length();

    let body_bytes = &buf[headers_end + 4..];
    if body_bytes.len() < content_length {
        return Err(ParseError::Incomplete);
    }

    let body = body_bytes[..content_length].to_vec();

    let request = Request {
        method: head.method,
        path: head.path,
        version: head.version,
        headers: head.headers,
        body,
    };

    let total_consumed = headers_end + 4 + content_length;
    Ok((request, total_consumed))
}

pub(crate) fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
