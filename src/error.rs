//! Error representations
use std::{backtrace::Backtrace, fmt::Display, str::Utf8Error, string::FromUtf8Error};

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GeneralError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GeneralError {
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(..))
    }

    pub fn as_parse(&self) -> Option<&ParseError> {
        if let Self::Parse(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn try_into_parse(self) -> Result<ParseError, Self> {
        if let Self::Parse(v) = self {
            Ok(v)
        } else {
            Err(self)
        }
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(..))
    }

    pub fn as_format(&self) -> Option<&FormatError> {
        if let Self::Format(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn try_into_format(self) -> Result<FormatError, Self> {
        if let Self::Format(v) = self {
            Ok(v)
        } else {
            Err(self)
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(..))
    }

    pub fn as_io(&self) -> Option<&std::io::Error> {
        if let Self::Io(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

/// Error for parsing raw messages and header lines.
#[derive(Debug, thiserror::Error)]
pub struct ParseError {
    kind: ParseErrorKind,
    context: Box<ErrorContext>,
    backtrace: Option<Box<Backtrace>>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            context: Default::default(),
            backtrace: Some(Box::new(std::backtrace::Backtrace::capture())),
            source: None,
        }
    }

    pub fn other(error: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self::new(ParseErrorKind::Other).with_source(error)
    }

    pub fn with_position(mut self, value: u64) -> Self {
        self.context.position = Some(value);
        self
    }

    pub fn with_snippet<S: Into<String>>(mut self, value: S) -> Self {
        self.context.snippet = Some(value.into());
        self
    }

    /// Attach a snippet taken from the start of the given bytes.
    pub fn with_snippet_bytes(self, value: &[u8]) -> Self {
        self.with_snippet(snippet(value))
    }

    pub fn with_backtrace(mut self, backtrace: Backtrace) -> Self {
        self.backtrace = Some(Box::new(backtrace));
        self
    }

    pub fn with_source<T: Into<Box<dyn std::error::Error + Send + Sync>>>(
        mut self,
        source: T,
    ) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Shift the recorded position by the offset of the sub-slice the error
    /// was raised on.
    pub fn offset_position(mut self, offset: usize) -> Self {
        if let Some(position) = &mut self.context.position {
            *position += offset as u64;
        }
        self
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    pub fn backtrace(&self) -> Option<&Backtrace> {
        self.backtrace.as_deref()
    }

    pub fn position(&self) -> Option<u64> {
        self.context.position
    }

    pub fn snippet(&self) -> Option<&String> {
        self.context.snippet.as_ref()
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse error: {}{}", self.kind, self.context)?;

        Ok(())
    }
}

impl From<ParseErrorKind> for ParseError {
    fn from(value: ParseErrorKind) -> Self {
        Self::new(value)
    }
}

impl From<nom::Err<nom::error::Error<&[u8]>>> for ParseError {
    fn from(value: nom::Err<nom::error::Error<&[u8]>>) -> Self {
        match value {
            nom::Err::Incomplete(_needed) => ParseError::new(ParseErrorKind::IncompleteInput),
            nom::Err::Error(error) | nom::Err::Failure(error) => {
                ParseError::new(ParseErrorKind::Syntax)
                    .with_snippet_bytes(error.input)
                    .with_source(nom::error::Error::new(error.input.len(), error.code))
            }
        }
    }
}

impl From<FromUtf8Error> for ParseError {
    fn from(value: FromUtf8Error) -> Self {
        ParseError::new(ParseErrorKind::InvalidUtf8)
            .with_position(value.utf8_error().valid_up_to() as u64)
    }
}

impl From<Utf8Error> for ParseError {
    fn from(value: Utf8Error) -> Self {
        ParseError::new(ParseErrorKind::InvalidUtf8).with_position(value.valid_up_to() as u64)
    }
}

impl From<url::ParseError> for ParseError {
    fn from(value: url::ParseError) -> Self {
        ParseError::new(ParseErrorKind::InvalidUrl).with_source(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParseErrorKind {
    IncompleteInput,
    Syntax,
    /// Input does not start with `HTTP/<version> <code> <reason>` once
    /// interim responses are removed.
    MalformedStatusLine,
    /// A header line has no `:` delimiter or no name.
    MalformedHeaderLine,
    InvalidUtf8,
    InvalidUrl,
    InputTooLong,
    Other,
}

impl Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncompleteInput => write!(f, "incomplete input"),
            Self::Syntax => write!(f, "syntax error"),
            Self::MalformedStatusLine => write!(f, "malformed status line"),
            Self::MalformedHeaderLine => write!(f, "malformed header line"),
            Self::InvalidUtf8 => write!(f, "invalid UTF-8"),
            Self::InvalidUrl => write!(f, "invalid URL"),
            Self::InputTooLong => write!(f, "input too long"),
            Self::Other => write!(f, "other"),
        }
    }
}

#[derive(Debug, Default)]
struct ErrorContext {
    position: Option<u64>,
    snippet: Option<String>,
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(position) = self.position {
            write!(f, " position {}", position)?;
        }

        if let Some(snippet) = &self.snippet {
            write!(f, " near '{}'", snippet)?;
        }

        Ok(())
    }
}

/// Error for rendering a request description.
#[derive(Debug, thiserror::Error)]
pub struct FormatError {
    kind: FormatErrorKind,
    backtrace: Option<Box<Backtrace>>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
    context: Box<ErrorContext>,
}

impl FormatError {
    pub fn new(kind: FormatErrorKind) -> Self {
        Self {
            kind,
            backtrace: Some(Box::new(std::backtrace::Backtrace::capture())),
            source: None,
            context: Box::new(ErrorContext::default()),
        }
    }

    pub fn other(error: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self::new(FormatErrorKind::Other).with_source(error)
    }

    pub fn with_source<T: Into<Box<dyn std::error::Error + Send + Sync>>>(
        mut self,
        source: T,
    ) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_snippet<S: Into<String>>(mut self, value: S) -> Self {
        self.context.snippet = Some(value.into());
        self
    }

    pub fn kind(&self) -> FormatErrorKind {
        self.kind
    }

    pub fn backtrace(&self) -> Option<&Backtrace> {
        self.backtrace.as_deref()
    }

    pub fn snippet(&self) -> Option<&String> {
        self.context.snippet.as_ref()
    }
}

impl Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "format error: {}{}", self.kind, self.context)
    }
}

impl From<FormatErrorKind> for FormatError {
    fn from(value: FormatErrorKind) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FormatErrorKind {
    /// The request URL has no host to put in the `Host` line.
    MissingUrlComponent,
    Other,
}

impl Display for FormatErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::MissingUrlComponent => "missing URL component",
            Self::Other => "other",
        };

        f.write_str(value)
    }
}

fn snippet(input: &[u8]) -> String {
    input[0..input.len().min(32)].escape_ascii().to_string()
}
