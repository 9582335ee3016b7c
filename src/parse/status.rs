use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_while},
    character::complete::digit1,
    combinator::{map, opt, recognize, verify},
    sequence::terminated,
};

#[derive(Debug)]
pub struct StatusLineRef<'a> {
    pub http_version: &'a [u8],
    pub status_code: &'a [u8],
    pub reason_phrase: &'a [u8],
}

impl StatusLineRef<'_> {
    pub fn status_code(&self) -> Option<u16> {
        crate::parse::parse_u16_strict(self.status_code)
    }
}

pub fn status_line_terminated(input: &[u8]) -> IResult<&[u8], StatusLineRef<'_>> {
    terminated(status_line, tag("\r\n")).parse(input)
}

pub fn status_line(input: &[u8]) -> IResult<&[u8], StatusLineRef<'_>> {
    alt((status_line_strict, status_line_non_strict)).parse(input)
}

fn status_line_strict(input: &[u8]) -> IResult<&[u8], StatusLineRef<'_>> {
    let parts = (http_version, tag(" "), status_code, tag(" "), reason_phrase);

    #[allow(clippy::type_complexity)]
    map(parts, |output: (&[u8], &[u8], &[u8], &[u8], &[u8])| {
        StatusLineRef {
            http_version: output.0,
            status_code: output.2,
            reason_phrase: output.4,
        }
    })
    .parse(input)
}

fn status_line_non_strict(input: &[u8]) -> IResult<&[u8], StatusLineRef<'_>> {
    // Some servers omit the space before an empty reason phrase.
    let parts = (http_version, tag(" "), status_code);

    map(parts, |output: (&[u8], &[u8], &[u8])| StatusLineRef {
        http_version: output.0,
        status_code: output.2,
        reason_phrase: b"",
    })
    .parse(input)
}

fn http_version(input: &[u8]) -> IResult<&[u8], &[u8]> {
    // Accepts both "HTTP/1.1" and the minor-less "HTTP/2" form that some
    // clients write into recordings.
    recognize((
        tag_no_case("HTTP"),
        tag("/"),
        one_digit,
        opt((tag("."), one_digit)),
    ))
    .parse(input)
}

fn one_digit(input: &[u8]) -> IResult<&[u8], &[u8]> {
    verify(digit1, |i: &[u8]| i.len() == 1).parse(input)
}

fn status_code(input: &[u8]) -> IResult<&[u8], &[u8]> {
    verify(digit1, |i: &[u8]| i.len() == 3).parse(input)
}

fn reason_phrase(input: &[u8]) -> IResult<&[u8], &[u8]> {
    take_while(|b: u8| {
        b.is_ascii_graphic() || b == b' ' || b == b'\t' || crate::parse::fields::is_obs_text(b)
    })(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line() {
        let (remain, output) = status_line(b"HTTP/1.1 201 Created\r\n").unwrap();

        assert_eq!(remain, b"\r\n");
        assert_eq!(output.http_version, b"HTTP/1.1");
        assert_eq!(output.status_code, b"201");
        assert_eq!(output.status_code(), Some(201));
        assert_eq!(output.reason_phrase, b"Created");
    }

    #[test]
    fn test_status_line_reason_with_spaces() {
        let (_remain, output) = status_line(b"HTTP/1.0 404 Not Found").unwrap();

        assert_eq!(output.http_version, b"HTTP/1.0");
        assert_eq!(output.reason_phrase, b"Not Found");
    }

    #[test]
    fn test_status_line_lenient() {
        let (_remain, output) = status_line(b"http/1.1 200 OK").unwrap();
        assert_eq!(output.http_version, b"http/1.1");

        let (_remain, output) = status_line(b"HTTP/2 204").unwrap();
        assert_eq!(output.http_version, b"HTTP/2");
        assert_eq!(output.reason_phrase, b"");
    }

    #[test]
    fn test_status_line_invalid() {
        assert!(status_line(b"ICY 200 OK").is_err());
        assert!(status_line(b"HTTP/1.1 20 OK").is_err());
        assert!(status_line(b"HTTP/11.1 200 OK").is_err());
        assert!(status_line(b"").is_err());
    }
}
