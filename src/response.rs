//! Raw HTTP response parsing
//!
//! A recorded exchange may contain interim `1xx` responses (most commonly
//! `100 Continue`) in front of the real response. These are removed before
//! the final response is split into its status line, header lines and body.
use std::borrow::Cow;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    error::{ParseError, ParseErrorKind},
    fields::HeaderMap,
    header::HeaderList,
};

/// Text when the bytes are valid UTF-8, opaque bytes otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Hstring {
    Text(String),
    Opaque(Vec<u8>),
}

impl Hstring {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Opaque(vec) => vec,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        match self {
            Hstring::Text(text) => text.into(),
            Hstring::Opaque(vec) => String::from_utf8_lossy(vec),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(..))
    }

    pub fn as_text(&self) -> Option<&str> {
        if let Self::Text(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque(..))
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Text(text) => text.into_bytes(),
            Self::Opaque(vec) => vec,
        }
    }
}

impl From<String> for Hstring {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Hstring {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<Vec<u8>> for Hstring {
    fn from(v: Vec<u8>) -> Self {
        match String::from_utf8(v) {
            Ok(v) => Self::Text(v),
            Err(e) => Self::Opaque(e.into_bytes()),
        }
    }
}

impl From<&[u8]> for Hstring {
    fn from(v: &[u8]) -> Self {
        Self::from(v.to_vec())
    }
}

/// The `(status, headers, body)` triple of a parsed response.
///
/// The status line and header lines are kept exactly as they appeared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResponse {
    pub status: String,
    pub headers: HeaderList,
    /// `None` when nothing follows the header block.
    pub body: Option<Hstring>,
}

impl RawResponse {
    pub fn into_parts(self) -> (String, HeaderList, Option<Hstring>) {
        (self.status, self.headers, self.body)
    }

    /// Fold the header lines into a mapping.
    pub fn fold_headers(&self) -> Result<HeaderMap, ParseError> {
        crate::header::parse_headers(&self.headers)
    }
}

/// Decomposed status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLine {
    pub http_version: String,
    pub status_code: u16,
    pub reason_phrase: String,
}

impl StatusLine {
    pub fn new<R: Into<String>>(status_code: u16, reason_phrase: R) -> Self {
        Self {
            http_version: "HTTP/1.1".to_string(),
            status_code,
            reason_phrase: reason_phrase.into(),
        }
    }

    /// Parse a line such as `HTTP/1.1 201 Created`.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let output = crate::parse::parse_status_line(line.as_bytes())?;

        Ok(Self {
            http_version: String::from_utf8(output.http_version.to_vec())?,
            status_code: output
                .status_code()
                .ok_or_else(|| ParseError::new(ParseErrorKind::MalformedStatusLine))?,
            reason_phrase: String::from_utf8(output.reason_phrase.to_vec())?,
        })
    }

    /// Returns whether the status is an interim (1xx) response that precedes
    /// the final response.
    pub fn is_interim(&self) -> bool {
        is_interim_code(self.status_code)
    }
}

impl Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:03} {}",
            self.http_version, self.status_code, self.reason_phrase
        )
    }
}

/// A parsed response with its status line decomposed and headers folded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub status: StatusLine,
    pub headers: HeaderMap,
    pub body: Option<Hstring>,
}

impl Response {
    pub fn parse<B: AsRef<[u8]>>(raw: B) -> Result<Self, ParseError> {
        Self::from_raw(parse_response(raw)?)
    }

    pub fn from_raw(raw: RawResponse) -> Result<Self, ParseError> {
        let headers = raw.fold_headers()?;

        Ok(Self {
            status: StatusLine::parse(&raw.status)?,
            headers,
            body: raw.body,
        })
    }

    /// Format the status line, for example `HTTP/1.1 200 OK`.
    pub fn format_status(&self) -> String {
        self.status.to_string()
    }

    /// Format the status line followed by the header lines and the
    /// terminating empty line.
    pub fn format_status_with_headers(&self) -> String {
        format!("{}\r\n{}\r\n", self.status, self.headers)
    }
}

/// Options for [`ResponseParser`].
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ResponseParserConfig {
    /// Remove leading `1xx` responses. When disabled, a leading interim
    /// response is returned as if it were the final response.
    pub skip_interim_responses: bool,

    /// Maximum length in bytes of the final response's status line and header
    /// lines.
    pub max_header_len: Option<usize>,
}

impl Default for ResponseParserConfig {
    fn default() -> Self {
        Self {
            skip_interim_responses: true,
            max_header_len: None,
        }
    }
}

/// Splits raw response bytes into status line, header lines and body.
#[derive(Debug, Clone, Default)]
pub struct ResponseParser {
    config: ResponseParserConfig,
}

impl ResponseParser {
    pub fn new(config: ResponseParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResponseParserConfig {
        &self.config
    }

    pub fn parse<B: AsRef<[u8]>>(&self, raw: B) -> Result<RawResponse, ParseError> {
        let raw = raw.as_ref();
        let mut position = 0;

        if self.config.skip_interim_responses {
            while let Some(len) = interim_block_len(&raw[position..]) {
                tracing::debug!(position, len, "skipping interim response");
                position += len;
            }

            if position > 0 && position == raw.len() {
                return Err(ParseError::new(ParseErrorKind::MalformedStatusLine)
                    .with_position(position as u64));
            }
        }

        let input = &raw[position..];
        let (header_block, body) = match crate::parse::split_header_block(input) {
            Some(parts) => parts,
            None => (input, b"".as_slice()),
        };

        if let Some(limit) = self.config.max_header_len {
            if header_block.len() > limit {
                return Err(ParseError::new(ParseErrorKind::InputTooLong)
                    .with_position(position as u64));
            }
        }

        let header_block = std::str::from_utf8(header_block).map_err(|error| {
            ParseError::from(error)
                .offset_position(position)
                .with_snippet_bytes(header_block)
        })?;
        let mut lines = header_block.split(crate::parse::LINE_ENDING);
        let status = lines.next().unwrap_or_default();

        crate::parse::parse_status_line(status.as_bytes())
            .map_err(|error| error.with_position(position as u64))?;

        let headers = lines
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect::<HeaderList>();

        let body = if body.is_empty() {
            None
        } else {
            Some(Hstring::from(body))
        };

        tracing::debug!(
            status,
            header_count = headers.len(),
            body_len = body.as_ref().map(Hstring::len),
            "parsed response"
        );

        Ok(RawResponse {
            status: status.to_string(),
            headers,
            body,
        })
    }
}

/// Parse raw response bytes with the default configuration.
///
/// Leading interim responses are discarded. The status line and header lines
/// of the final response are returned verbatim; an empty body is `None`.
pub fn parse_response<B: AsRef<[u8]>>(raw: B) -> Result<RawResponse, ParseError> {
    ResponseParser::default().parse(raw)
}

fn is_interim_code(code: u16) -> bool {
    (100..200).contains(&code)
}

/// Length of the interim response block at the start of the input, including
/// its terminating empty line.
fn interim_block_len(input: &[u8]) -> Option<usize> {
    let (line_len, code) = crate::parse::scan_status_line(input)?;

    if !is_interim_code(code) {
        return None;
    }

    // An interim response carries no body, so its block ends at the first
    // empty line. The status line's own ending may be the start of it.
    match crate::parse::split_header_block(&input[line_len - 2..]) {
        Some((_block, remain)) => Some(input.len() - remain.len()),
        None => Some(input.len()),
    }
}
