//! Parsing utilities.
use nom::Parser;

use crate::error::{ParseError, ParseErrorKind};

pub(crate) mod fields;
pub(crate) mod header_deliminator;
pub(crate) mod status;
pub(crate) mod url;

/// Header lines are separated by this sequence.
pub const LINE_ENDING: &str = "\r\n";

/// Split the data at the first header deliminator (an empty line).
///
/// Returns the header block without the deliminator and the remaining data.
/// Returns `None` when no deliminator is present.
pub fn split_header_block(data: &[u8]) -> Option<(&[u8], &[u8])> {
    match header_deliminator::header_block(data) {
        Ok((remain, block)) => Some((block, remain)),
        Err(_) => None,
    }
}

/// Returns the length of the status line at the start of the data,
/// including its line ending, and the parsed status code.
pub fn scan_status_line(data: &[u8]) -> Option<(usize, u16)> {
    match status::status_line_terminated(data) {
        Ok((remain, line)) => Some((data.len() - remain.len(), line.status_code()?)),
        Err(_) => None,
    }
}

/// Parse a complete status line without its line ending.
pub fn parse_status_line(line: &[u8]) -> Result<status::StatusLineRef<'_>, ParseError> {
    match nom::combinator::all_consuming(status::status_line).parse(line) {
        Ok((_remain, output)) => Ok(output),
        Err(error) => Err(ParseError::new(ParseErrorKind::MalformedStatusLine)
            .with_snippet_bytes(line)
            .with_source(ParseError::from(error))),
    }
}

/// Split a single `Name: Value` line.
pub fn parse_field_line(line: &str) -> Result<fields::FieldPairRef<'_>, ParseError> {
    match fields::field_pair(line) {
        Ok((_remain, output)) if !output.name.is_empty() => Ok(output),
        _ => Err(ParseError::new(ParseErrorKind::MalformedHeaderLine).with_snippet(line)),
    }
}

/// Parse a value into a `u16`.
///
/// Unlike [`str::parse()`], only ASCII digits are permitted.
pub fn parse_u16_strict(value: &[u8]) -> Option<u16> {
    if value.is_empty() || !value.iter().all(|c| c.is_ascii_digit()) {
        return None;
    }

    std::str::from_utf8(value).ok()?.parse().ok()
}
