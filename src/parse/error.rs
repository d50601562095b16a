use std::io;

use thiserror::Error;

use crate::parse::request::ParseState;

/// Error for when an HTTP request head can't be parsed. Every variant is fatal to the request.
#[derive(Debug, Error)]
pub enum ParsingError {
    /// The request line is malformed.
    #[error("invalid request line: {0}")]
    Format(#[from] FormatError),
    /// A header field is malformed.
    #[error("invalid header field: {0}")]
    HeaderFormat(#[from] HeaderFormatError),
    /// Parsing was invoked again on a request that is already complete.
    #[error("request is already parsed")]
    AlreadyParsed,
    /// The byte source ended early or failed.
    #[error("{0}")]
    Stream(#[from] StreamError),
}

impl ParsingError {
    /// True if the source closed cleanly before sending a single byte.
    pub fn is_closed(&self) -> bool {
        matches!(self, ParsingError::Stream(StreamError::Closed))
    }
}

impl From<io::Error> for ParsingError {
    fn from(err: io::Error) -> Self {
        ParsingError::Stream(StreamError::Io(err))
    }
}

/// A malformed request line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// The line does not split into method, target and version.
    #[error("expected 3 space separated parts, found {0}")]
    PartCount(usize),
    /// Method is unrecognized.
    #[error("invalid method {0:?}")]
    InvalidMethod(String),
    /// Message has an unsupported HTTP version.
    #[error("invalid version {0:?}")]
    InvalidVersion(String),
    /// Data is not valid UTF8.
    #[error("request line is not valid utf-8")]
    InvalidUtf8,
}

/// A malformed header field line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderFormatError {
    #[error("missing colon")]
    MissingColon,
    #[error("empty key")]
    EmptyKey,
    /// Whitespace between the name and the colon, as in `Host : x`.
    #[error("illegal space before colon")]
    SpaceBeforeColon,
    #[error("invalid character {0:?} in key")]
    InvalidKeyCharacter(char),
    /// Value is not valid UTF8.
    #[error("value is not valid utf-8")]
    InvalidValue,
}

/// Failure of the byte source before a request completed.
#[derive(Debug, Error)]
pub enum StreamError {
    /// End of stream before any byte arrived.
    #[error("stream closed before any data was received")]
    Closed,
    /// End of stream with a partial request.
    #[error("incomplete request: stream ended in state {state:?} with {buffered} unparsed bytes")]
    Incomplete {
        state: ParseState,
        buffered: usize,
    },
    /// The request head grew past the size limit before it was complete.
    #[error("request head is larger than {limit} bytes")]
    TooLarge {
        limit: usize,
    },
    /// The underlying reader failed.
    #[error("io: {0}")]
    Io(#[from] io::Error),
}
