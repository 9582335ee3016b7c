use cassette_http::{
    HeaderMap, Request, error::FormatErrorKind, format_header_lines, format_request_description,
};

fn describe(method: &str, url: &str) -> String {
    let headers = HeaderMap::from_iter([("X-Test", "1234")]);
    let request = Request::new(method, url, headers).unwrap();

    format_request_description(&request).unwrap()
}

#[test]
fn test_format_as_request_description_with_headers() {
    let cases = [
        (
            "GET",
            "http://example.com/test?12=34",
            "GET /test?12=34 HTTP/1.1\r\nHost: example.com\r\nAccept: */*\r\nX-Test: 1234\r\n\r\n",
        ),
        (
            "GET",
            "http://example.com/",
            "GET / HTTP/1.1\r\nHost: example.com\r\nAccept: */*\r\nX-Test: 1234\r\n\r\n",
        ),
        (
            "GET",
            "http://example.com",
            "GET / HTTP/1.1\r\nHost: example.com\r\nAccept: */*\r\nX-Test: 1234\r\n\r\n",
        ),
    ];

    for (method, url, expected) in cases {
        assert_eq!(describe(method, url), expected, "{} {}", method, url);
    }
}

#[test]
fn test_format_request_description_no_headers() {
    let request = Request::new("DELETE", "https://api.example.com/v1/items/7", HeaderMap::new())
        .unwrap();

    assert_eq!(
        format_request_description(&request).unwrap(),
        "DELETE /v1/items/7 HTTP/1.1\r\nHost: api.example.com\r\nAccept: */*\r\n\r\n"
    );
}

#[test]
fn test_format_request_description_missing_host() {
    let request = Request::new("GET", "mailto:someone@example.com", HeaderMap::new()).unwrap();
    let error = format_request_description(&request).unwrap_err();

    assert_eq!(error.kind(), FormatErrorKind::MissingUrlComponent);
}

#[test]
fn test_format_header_lines_for_transport() {
    let mut headers = HeaderMap::new();
    headers.insert("Content-Type", "application/json");
    headers.merge("Accept", "text/html");
    headers.merge("Accept", "application/json");

    assert_eq!(
        format_header_lines(&headers),
        vec![
            "Content-Type: application/json".to_string(),
            "Accept: text/html, application/json".to_string(),
        ]
    );
}
