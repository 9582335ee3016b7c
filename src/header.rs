//! Header line folding
//!
//! Raw header lines, as they appear in a message, are folded into a
//! [`HeaderMap`] with one entry per distinct name. Repeated names have their
//! values joined by `", "` in the order they were encountered.
use crate::{error::ParseError, fields::HeaderMap};

/// A single raw `Name: Value` line without its line ending.
pub type HeaderLine = String;

/// Header lines in message order. Names may repeat.
pub type HeaderList = Vec<HeaderLine>;

/// Fold raw header lines into a name-value mapping.
///
/// Each line is split on its first colon only, so values containing colons
/// (URLs, JSON documents, timestamps) are kept intact. Names are matched
/// exactly; `Vary` and `vary` produce two entries.
///
/// Fails on the first line that has no colon or no name.
pub fn parse_headers<I, S>(lines: I) -> Result<HeaderMap, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut map = HeaderMap::new();

    for line in lines {
        let pair = crate::parse::parse_field_line(line.as_ref())?;

        if map.contains_name(pair.name) {
            tracing::trace!(name = pair.name, "merging repeated header");
        }

        map.merge(pair.name, pair.value);
    }

    Ok(map)
}

/// Render a header mapping as raw `Name: Value` lines.
///
/// This is the form transport libraries expect when headers are handed over
/// as a list of strings.
pub fn format_header_lines(headers: &HeaderMap) -> HeaderList {
    headers
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::error::ParseErrorKind;

    use super::*;

    #[test]
    fn test_parse_headers_basic() {
        let headers = parse_headers([
            "Content-Type: text/html",
            "Date: Fri, 19 Jun 2015 16:05:18 GMT",
            "Vary: Accept-Encoding",
            "Content-Length: 0",
        ])
        .unwrap();

        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec![
                ("Content-Type", "text/html"),
                ("Date", "Fri, 19 Jun 2015 16:05:18 GMT"),
                ("Vary", "Accept-Encoding"),
                ("Content-Length", "0"),
            ]
        );
    }

    #[test]
    fn test_parse_headers_multiple() {
        let headers = parse_headers([
            "Content-Type: text/html",
            "Date: Fri, 19 Jun 2015 16:05:18 GMT",
            "Vary: Accept, Accept-Language, Expect",
            "Vary: Accept-Encoding",
            "Content-Length: 0",
        ])
        .unwrap();

        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec![
                ("Content-Type", "text/html"),
                ("Date", "Fri, 19 Jun 2015 16:05:18 GMT"),
                ("Vary", "Accept, Accept-Language, Expect, Accept-Encoding"),
                ("Content-Length", "0"),
            ]
        );
    }

    #[test]
    fn test_parse_headers_including_colons() {
        let headers = parse_headers([r#"dropbox-api-result: {"name": "a_file.txt"}"#]).unwrap();

        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.get("dropbox-api-result"),
            Some(r#"{"name": "a_file.txt"}"#)
        );
    }

    #[test]
    fn test_parse_headers_three_repeats() {
        let headers = parse_headers(["Set-Cookie: a=1", "X: y", "Set-Cookie: b=2", "Set-Cookie: c=3"])
            .unwrap();

        assert_eq!(headers.get("Set-Cookie"), Some("a=1, b=2, c=3"));
        assert_eq!(headers.names().collect::<Vec<_>>(), vec!["Set-Cookie", "X"]);
    }

    #[test]
    fn test_parse_headers_case_distinct() {
        let headers = parse_headers(["Vary: a", "vary: b"]).unwrap();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("Vary"), Some("a"));
        assert_eq!(headers.get("vary"), Some("b"));
    }

    #[test]
    fn test_parse_headers_empty() {
        let headers = parse_headers(Vec::<String>::new()).unwrap();
        assert!(headers.is_empty());
    }

    #[test]
    fn test_parse_headers_malformed() {
        let error = parse_headers(["Content-Type: text/html", "garbage"]).unwrap_err();

        assert_eq!(error.kind(), ParseErrorKind::MalformedHeaderLine);
        assert_eq!(error.snippet().map(String::as_str), Some("garbage"));
    }

    #[test]
    fn test_format_header_lines() {
        let headers = parse_headers(["Vary: a", "X-Test: 1234", "Vary: b"]).unwrap();

        assert_eq!(
            format_header_lines(&headers),
            vec!["Vary: a, b".to_string(), "X-Test: 1234".to_string()]
        );
    }
}
