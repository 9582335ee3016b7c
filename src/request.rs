//! Request descriptions
//!
//! A request is rendered as the raw text a client would send for it, minus
//! any body. The text is used to describe and match recorded requests.
use std::{borrow::Cow, io::Write};

use serde::{Deserialize, Serialize};

use crate::{
    error::{FormatError, FormatErrorKind, GeneralError, ParseError, ParseErrorKind},
    fields::HeaderMap,
    parse::url::UrlRef,
};

/// A request to be described.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub method: String,
    /// The absolute URL exactly as supplied by the caller.
    pub url: String,
    pub headers: HeaderMap,
}

impl Request {
    /// Create a request after checking the URL is a valid absolute URL.
    ///
    /// The URL must be written out in full: text that a browser would repair
    /// first (surrounding whitespace, `http:host` without `//`) is rejected,
    /// since the description is taken from the URL text as given.
    pub fn new<M, U>(method: M, url: U, headers: HeaderMap) -> Result<Self, ParseError>
    where
        M: Into<String>,
        U: Into<String>,
    {
        let url = url.into();
        let parsed = url::Url::parse(&url)?;

        match crate::parse::url::url(&url) {
            Ok((_remain, sliced)) if parsed.host().is_none() || sliced.host().is_some() => {}
            _ => {
                return Err(ParseError::new(ParseErrorKind::InvalidUrl).with_snippet(url));
            }
        }

        Ok(Self {
            method: method.into(),
            url,
            headers,
        })
    }

    /// The value for the `Host` line: the URL host followed by the port when
    /// the URL states one explicitly.
    pub fn host(&self) -> Option<Cow<'_, str>> {
        let url = self.url_ref()?;
        let host = url.host()?;

        match url.port() {
            Some(port) => Some(Cow::Owned(format!("{}:{}", host, port))),
            None => Some(Cow::Borrowed(host)),
        }
    }

    /// The request target: the URL path, or `/` when it has none, followed by
    /// the query when present.
    pub fn path_and_query(&self) -> Cow<'_, str> {
        let Some(url) = self.url_ref() else {
            return Cow::Borrowed("/");
        };
        let path = if url.path.is_empty() { "/" } else { url.path };

        match url.query.filter(|query| !query.is_empty()) {
            Some(query) => Cow::Owned(format!("{}?{}", path, query)),
            None => Cow::Borrowed(path),
        }
    }

    /// Render the request line and headers.
    ///
    /// See [`format_request_description`].
    pub fn describe(&self) -> Result<String, FormatError> {
        let mut buf = Vec::new();

        match self.serialize_description(&mut buf) {
            Ok(()) => {}
            Err(GeneralError::Format(error)) => return Err(error),
            Err(error) => return Err(FormatError::other(Box::new(error))),
        }

        String::from_utf8(buf).map_err(|error| FormatError::other(Box::new(error)))
    }

    /// Write the request line and headers.
    pub fn serialize_description<W: Write>(&self, mut buf: W) -> Result<(), GeneralError> {
        let host = self.host().ok_or_else(|| {
            FormatError::new(FormatErrorKind::MissingUrlComponent).with_snippet(self.url.as_str())
        })?;

        buf.write_all(self.method.as_bytes())?;
        buf.write_all(b" ")?;
        buf.write_all(self.path_and_query().as_bytes())?;
        buf.write_all(b" HTTP/1.1\r\n")?;

        buf.write_all(b"Host: ")?;
        buf.write_all(host.as_bytes())?;
        buf.write_all(b"\r\n")?;
        buf.write_all(b"Accept: */*\r\n")?;

        for (name, value) in &self.headers {
            buf.write_all(name.as_bytes())?;
            buf.write_all(b": ")?;
            buf.write_all(value.as_bytes())?;
            buf.write_all(b"\r\n")?;
        }

        buf.write_all(b"\r\n")?;

        Ok(())
    }

    fn url_ref(&self) -> Option<UrlRef<'_>> {
        crate::parse::url::url(&self.url)
            .ok()
            .map(|(_remain, output)| output)
    }
}

/// Render a request as `<METHOD> <path> HTTP/1.1` followed by the `Host`
/// line, `Accept: */*`, the request's own headers and an empty line.
///
/// Method, host and query are emitted exactly as given. A URL without a
/// path renders as `/`. Fails when the URL has no host.
pub fn format_request_description(request: &Request) -> Result<String, FormatError> {
    let description = request.describe()?;

    tracing::trace!(method = %request.method, url = %request.url, "formatted request");

    Ok(description)
}

#[cfg(test)]
mod tests {
    use crate::error::ParseErrorKind;

    use super::*;

    fn request(method: &str, url: &str) -> Request {
        Request::new(method, url, HeaderMap::from_iter([("X-Test", "1234")])).unwrap()
    }

    #[test]
    fn test_describe_path_and_query() {
        assert_eq!(
            request("GET", "http://example.com/test?12=34").describe().unwrap(),
            "GET /test?12=34 HTTP/1.1\r\nHost: example.com\r\nAccept: */*\r\nX-Test: 1234\r\n\r\n"
        );
    }

    #[test]
    fn test_describe_root() {
        let expected =
            "GET / HTTP/1.1\r\nHost: example.com\r\nAccept: */*\r\nX-Test: 1234\r\n\r\n";

        assert_eq!(request("GET", "http://example.com/").describe().unwrap(), expected);
        assert_eq!(request("GET", "http://example.com").describe().unwrap(), expected);
    }

    #[test]
    fn test_describe_verbatim() {
        let request = Request::new(
            "post",
            "http://Example.COM:8080?b=2&a=%20#frag",
            HeaderMap::new(),
        )
        .unwrap();

        assert_eq!(
            request.describe().unwrap(),
            "post /?b=2&a=%20 HTTP/1.1\r\nHost: Example.COM:8080\r\nAccept: */*\r\n\r\n"
        );
    }

    #[test]
    fn test_describe_empty_query() {
        assert_eq!(request("GET", "http://example.com/a?").path_and_query(), "/a");
    }

    #[test]
    fn test_describe_header_order() {
        let headers = HeaderMap::from_iter([("Z", "1"), ("A", "2"), ("Z", "3")]);
        let request = Request::new("GET", "http://example.com/", headers).unwrap();

        assert_eq!(
            request.describe().unwrap(),
            "GET / HTTP/1.1\r\nHost: example.com\r\nAccept: */*\r\nZ: 1, 3\r\nA: 2\r\n\r\n"
        );
    }

    #[test]
    fn test_describe_missing_host() {
        let request = Request::new("GET", "file:///tmp/a", HeaderMap::new()).unwrap();
        let error = request.describe().unwrap_err();

        assert_eq!(error.kind(), FormatErrorKind::MissingUrlComponent);

        let request = Request {
            method: "GET".to_string(),
            url: "/relative".to_string(),
            headers: HeaderMap::new(),
        };
        let error = format_request_description(&request).unwrap_err();

        assert_eq!(error.kind(), FormatErrorKind::MissingUrlComponent);
    }

    #[test]
    fn test_request_new_invalid_url() {
        let error = Request::new("GET", "not a url", HeaderMap::new()).unwrap_err();
        assert_eq!(error.kind(), ParseErrorKind::InvalidUrl);
    }

    #[test]
    fn test_request_new_rejects_repaired_url() {
        for url in [
            " http://example.com",
            "http://example.com ",
            "\thttp://example.com/",
            "http:example.com",
            "http:/example.com/a",
        ] {
            let error = Request::new("GET", url, HeaderMap::new()).unwrap_err();
            assert_eq!(error.kind(), ParseErrorKind::InvalidUrl, "{:?}", url);
        }
    }

    #[test]
    fn test_request_new_accepted_urls_describe() {
        for url in [
            "http://example.com",
            "https://user@example.com:8443/a?b",
            "http://[::1]/",
        ] {
            let request = Request::new("GET", url, HeaderMap::new()).unwrap();
            assert!(request.describe().is_ok(), "{:?}", url);
        }
    }
}
