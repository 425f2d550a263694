use staticd::http::parser::{ParseError, parse_request_line};

#[test]
fn test_parse_simple_get_request() {
    let req = parse_request_line("GET / HTTP/1.1\r\nHost: example.com\r\n\r\n").unwrap();

    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/");
    assert!(req.is_get());
}

#[test]
fn test_parse_only_first_line_is_inspected() {
    let req = parse_request_line("GET /a.html HTTP/1.1\r\nHost: b.html\r\n\r\n").unwrap();

    assert_eq!(req.path, "/a.html");
}

#[test]
fn test_parse_path_keeps_query_string() {
    let req = parse_request_line("GET /search?q=rust HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(req.path, "/search?q=rust");
}

#[test]
fn test_parse_non_get_method() {
    let req = parse_request_line("POST /api HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(req.method, "POST");
    assert!(!req.is_get());
}

#[test]
fn test_parse_method_match_is_exact_token() {
    let req = parse_request_line("GETX /f HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(req.method, "GETX");
    assert!(!req.is_get());
}

#[test]
fn test_parse_single_token_line_is_malformed() {
    let result = parse_request_line("GET\r\n\r\n");

    assert!(matches!(result, Err(ParseError::MalformedRequestLine)));
}

#[test]
fn test_parse_bare_method_name_is_malformed() {
    let result = parse_request_line("POST\r\n");

    assert!(matches!(result, Err(ParseError::MalformedRequestLine)));
}

#[test]
fn test_parse_empty_text_is_malformed() {
    let result = parse_request_line("");

    assert!(matches!(result, Err(ParseError::MalformedRequestLine)));
}

#[test]
fn test_parse_splits_on_single_spaces() {
    // Two spaces after the method leave an empty path token.
    let req = parse_request_line("GET  /x HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(req.path, "");
}

#[test]
fn test_parse_version_token_is_optional() {
    // Two tokens are enough; the version is never checked.
    let req = parse_request_line("GET /index.html\r\n\r\n").unwrap();

    assert_eq!(req.path, "/index.html");
}
