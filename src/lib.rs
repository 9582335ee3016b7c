//! Minimal HTTP/1.1 response parser and request formatter for recorded
//! HTTP exchanges.
//!
//! The crate is sans-IO: every operation is a pure transformation of bytes
//! or strings already in memory.
//!
//! ```
//! use cassette_http::{header::parse_headers, response::parse_response};
//!
//! let raw = "HTTP/1.1 100 Continue\r\n\r\n\
//!     HTTP/1.1 200 OK\r\n\
//!     Vary: Accept\r\n\
//!     Vary: Accept-Encoding\r\n\
//!     \r\n";
//! let response = parse_response(raw)?;
//! assert_eq!(response.status, "HTTP/1.1 200 OK");
//! assert_eq!(response.body, None);
//!
//! let headers = parse_headers(&response.headers)?;
//! assert_eq!(headers.get("Vary"), Some("Accept, Accept-Encoding"));
//! # Ok::<(), cassette_http::error::ParseError>(())
//! ```
pub mod error;
pub mod fields;
pub mod header;
mod parse;
pub mod request;
pub mod response;

pub use error::{FormatError, GeneralError, ParseError};
pub use fields::HeaderMap;
pub use header::{HeaderLine, HeaderList, format_header_lines, parse_headers};
pub use request::{Request, format_request_description};
pub use response::{
    Hstring, RawResponse, Response, ResponseParser, ResponseParserConfig, StatusLine,
    parse_response,
};

#[cfg(feature = "bin")]
#[doc(hidden)]
pub mod app;
