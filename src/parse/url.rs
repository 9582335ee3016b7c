use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_till, take_while, take_while1},
    combinator::{all_consuming, map, opt, recognize},
    sequence::{preceded, terminated},
};

/// Slices of an absolute URL as they appear in the original text.
///
/// Nothing is normalized: host case, percent-encoding and query parameter
/// order are exactly what the caller supplied. The scheme and fragment are
/// checked but not kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlRef<'a> {
    pub authority: Option<&'a str>,
    pub path: &'a str,
    pub query: Option<&'a str>,
}

impl<'a> UrlRef<'a> {
    /// The host portion of the authority with any userinfo and port removed.
    pub fn host(&self) -> Option<&'a str> {
        let (host, _port) = split_host_port(self.authority?);
        Some(host).filter(|host| !host.is_empty())
    }

    /// The explicit port of the authority, if any.
    pub fn port(&self) -> Option<&'a str> {
        let (_host, port) = split_host_port(self.authority?);
        port.filter(|port| !port.is_empty())
    }
}

/// Slice an absolute URL. Whitespace and control characters anywhere in the
/// text are rejected.
pub fn url(input: &str) -> IResult<&str, UrlRef<'_>> {
    let parts = (
        terminated(scheme, tag(":")),
        opt(preceded(tag("//"), authority)),
        path,
        opt(preceded(tag("?"), query)),
        opt(preceded(tag("#"), fragment)),
    );

    map(
        all_consuming(parts),
        |(_scheme, authority, path, query, _fragment)| UrlRef {
            authority,
            path,
            query,
        },
    )
    .parse(input)
}

fn scheme(input: &str) -> IResult<&str, &str> {
    recognize((
        take_while1(|c: char| c.is_ascii_alphabetic()),
        take_while(|c: char| c.is_ascii_alphanumeric() || "+-.".contains(c)),
    ))
    .parse(input)
}

fn authority(input: &str) -> IResult<&str, &str> {
    take_till(|c: char| c == '/' || c == '?' || c == '#' || is_excluded(c))(input)
}

fn path(input: &str) -> IResult<&str, &str> {
    take_till(|c: char| c == '?' || c == '#' || is_excluded(c))(input)
}

fn query(input: &str) -> IResult<&str, &str> {
    take_till(|c: char| c == '#' || is_excluded(c))(input)
}

fn fragment(input: &str) -> IResult<&str, &str> {
    take_till(is_excluded)(input)
}

fn is_excluded(c: char) -> bool {
    c.is_whitespace() || c.is_control()
}

fn split_host_port(authority: &str) -> (&str, Option<&str>) {
    let host_port = match authority.rsplit_once('@') {
        Some((_userinfo, host_port)) => host_port,
        None => authority,
    };

    if host_port.starts_with('[') {
        // IPv6 literal
        match host_port.split_once(']') {
            Some((host, remain)) => (
                &host_port[..host.len() + 1],
                remain.strip_prefix(':'),
            ),
            None => (host_port, None),
        }
    } else {
        match host_port.split_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (host_port, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_parts() {
        let (_remain, output) = url("http://example.com/test?12=34#top").unwrap();

        assert_eq!(output.authority, Some("example.com"));
        assert_eq!(output.host(), Some("example.com"));
        assert_eq!(output.port(), None);
        assert_eq!(output.path, "/test");
        assert_eq!(output.query, Some("12=34"));
    }

    #[test]
    fn test_url_whitespace_rejected() {
        assert!(url(" http://example.com").is_err());
        assert!(url("http://example.com ").is_err());
        assert!(url("http://exa mple.com/").is_err());
        assert!(url("http://example.com/a\nb").is_err());
        assert!(url("http://example.com/#a b").is_err());
    }

    #[test]
    fn test_url_no_path() {
        let (_remain, output) = url("http://example.com").unwrap();

        assert_eq!(output.host(), Some("example.com"));
        assert_eq!(output.path, "");
        assert_eq!(output.query, None);

        let (_remain, output) = url("http://example.com?a=b").unwrap();
        assert_eq!(output.path, "");
        assert_eq!(output.query, Some("a=b"));
    }

    #[test]
    fn test_url_host_verbatim() {
        let (_remain, output) = url("HTTPS://user:pw@Example.COM:8443/A%20b?B=2&a=1").unwrap();

        assert_eq!(output.host(), Some("Example.COM"));
        assert_eq!(output.port(), Some("8443"));
        assert_eq!(output.path, "/A%20b");
        assert_eq!(output.query, Some("B=2&a=1"));
    }

    #[test]
    fn test_url_ipv6() {
        let (_remain, output) = url("http://[::1]:8080/").unwrap();

        assert_eq!(output.host(), Some("[::1]"));
        assert_eq!(output.port(), Some("8080"));
    }

    #[test]
    fn test_url_no_host() {
        let (_remain, output) = url("file:///tmp/a").unwrap();
        assert_eq!(output.host(), None);

        let (_remain, output) = url("mailto:someone@example.com").unwrap();
        assert_eq!(output.authority, None);
        assert_eq!(output.host(), None);

        assert!(url("/relative/path").is_err());
    }
}
