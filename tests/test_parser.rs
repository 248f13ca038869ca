use courier::http::parser::{ParseError, parse_http_request, parse_request_head};
use courier::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.version, "HTTP/1.1");
    assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_post_request_with_body() {
    let req = b"POST /files/a.txt HTTP/1.1\r\nHost: localhost\r\nContent-Length: 5\r\n\r\nhello";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::POST);
    assert_eq!(parsed.path, "/files/a.txt");
    assert_eq!(parsed.body, b"hello".to_vec());
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_multiple_headers() {
    let req =
        b"GET /path HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test-client\r\nAccept: */*\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
    assert_eq!(parsed.headers.get("User-Agent").unwrap(), "test-client");
    assert_eq!(parsed.headers.get("Accept").unwrap(), "*/*");
}

#[test]
fn test_parse_request_with_path_and_query_string() {
    let req = b"GET /search?q=rust HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.path, "/search?q=rust");
}

#[test]
fn test_parse_incomplete_request_missing_blank_line() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::Incomplete)));
}

#[test]
fn test_parse_incomplete_request_partial_body() {
    let req = b"POST /files/a HTTP/1.1\r\nContent-Length: 10\r\n\r\nhello";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::Incomplete)));
}

#[test]
fn test_parse_overlong_content_length_never_dispatches() {
    // The declared length exceeds what was sent; assembly must keep
    // reporting Incomplete however often it is retried.
    let mut buf = b"POST /files/a HTTP/1.1\r\nContent-Length: 100\r\n\r\n".to_vec();
    assert!(matches!(
        parse_http_request(&buf),
        Err(ParseError::Incomplete)
    ));

    buf.extend_from_slice(&[b'x'; 99]);
    assert!(matches!(
        parse_http_request(&buf),
        Err(ParseError::Incomplete)
    ));

    buf.push(b'x');
    let (parsed, consumed) = parse_http_request(&buf).unwrap();
    assert_eq!(parsed.body.len(), 100);
    assert_eq!(consumed, buf.len());
}

#[test]
fn test_parse_invalid_http_method() {
    let req = b"INVALID / HTTP/1.1\r\n\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::InvalidMethod)));
}

#[test]
fn test_parse_malformed_header() {
    let req = b"GET / HTTP/1.1\r\nBrokenHeader\r\n\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::InvalidHeader)));
}

#[test]
fn test_parse_status_line_with_two_tokens() {
    let req = b"GET /\r\nHost: example.com\r\n\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::InvalidRequest)));
}

#[test]
fn test_parse_status_line_with_four_tokens() {
    let req = b"GET / HTTP/1.1 extra\r\n\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::InvalidRequest)));
}

#[test]
fn test_parse_path_without_leading_slash() {
    let req = b"GET files HTTP/1.1\r\n\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::InvalidRequest)));
}

#[test]
fn test_parse_non_numeric_content_length_counts_as_zero() {
    let req = b"POST /files/a HTTP/1.1\r\nContent-Length: banana\r\n\r\ntrailing";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert!(parsed.body.is_empty());
    assert_eq!(consumed, req.len() - b"trailing".len());
}

#[test]
fn test_parse_request_with_empty_body() {
    let req = b"POST /files/a HTTP/1.1\r\nContent-Length: 0\r\n\r\n";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.body.len(), 0);
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_request_with_binary_body() {
    let req = b"POST /files/blob HTTP/1.1\r\nContent-Length: 4\r\n\r\n\x00\x01\x02\x03";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.body, vec![0, 1, 2, 3]);
}

#[test]
fn test_parse_various_http_methods() {
    let methods = vec![
        ("GET", Method::GET),
        ("POST", Method::POST),
        ("PUT", Method::PUT),
        ("DELETE", Method::DELETE),
        ("HEAD", Method::HEAD),
        ("OPTIONS", Method::OPTIONS),
        ("PATCH", Method::PATCH),
    ];

    for (method_str, expected_method) in methods {
        let req = format!("{} / HTTP/1.1\r\n\r\n", method_str);
        let (parsed, _) = parse_http_request(req.as_bytes()).unwrap();
        assert_eq!(parsed.method, expected_method);
    }
}

#[test]
fn test_parse_header_case_preservation() {
    let req = b"GET / HTTP/1.1\r\nContent-Type: application/json\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert!(parsed.headers.contains_key("Content-Type"));
    assert!(!parsed.headers.contains_key("content-type"));
}

#[test]
fn test_parse_duplicate_header_later_value_wins() {
    let req = b"GET / HTTP/1.1\r\nX-Tag: first\r\nX-Tag: second\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers.get("X-Tag").unwrap(), "second");
}

#[test]
fn test_parse_result_is_chunk_boundary_independent() {
    let req =
        b"POST /files/notes.txt HTTP/1.1\r\nHost: localhost\r\nContent-Length: 11\r\n\r\nhello world";

    // Every proper prefix is an incomplete message, never a wrong one.
    for split in 1..req.len() {
        assert!(
            matches!(parse_http_request(&req[..split]), Err(ParseError::Incomplete)),
            "prefix of {} bytes should report incomplete",
            split
        );
    }

    // The moment the last byte arrives the full request falls out.
    let (parsed, consumed) = parse_http_request(req).unwrap();
    assert_eq!(parsed.method, Method::POST);
    assert_eq!(parsed.body, b"hello world".to_vec());
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_leaves_pipelined_bytes_for_the_next_pass() {
    let two = b"GET / HTTP/1.1\r\n\r\nGET /echo/hi HTTP/1.1\r\n\r\n";

    let (first, consumed) = parse_http_request(two).unwrap();
    assert_eq!(first.path, "/");
    assert!(consumed < two.len());

    let (second, rest) = parse_http_request(&two[consumed..]).unwrap();
    assert_eq!(second.path, "/echo/hi");
    assert_eq!(consumed + rest, two.len());
}

#[test]
fn test_parse_request_head_alone() {
    let head = b"GET /user-agent HTTP/1.1\r\nUser-Agent: curl/8.0\r\nAccept: */*";
    let parsed = parse_request_head(head).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/user-agent");
    assert_eq!(parsed.version, "HTTP/1.1");
    assert_eq!(parsed.headers.get("User-Agent").unwrap(), "curl/8.0");
    assert_eq!(parsed.headers.len(), 2);
}

#[test]
fn test_parse_header_values_are_trimmed() {
    let req = b"GET / HTTP/1.1\r\nHost:   example.com  \r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
}
