use std::mem;

use log::{debug, trace};

use crate::common::header::HeaderMap;
use crate::common::request::{Request, RequestLine};
use crate::parse::error::ParsingError;
use crate::parse::headers::parse_header_into;
use crate::parse::request_line::try_parse_request_line;

/// How far a request has been parsed. States only ever move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ParseState {
    /// Nothing parsed yet, waiting for the request line.
    Initialized,
    /// The request line is parsed, headers are being read.
    RequestLineParsed,
    /// The blank line after the headers was read. The request head is complete.
    HeadersDone,
}

/// Incremental parser for a request head.
///
/// The parser never reads by itself. It is handed whatever bytes are buffered and reports how many
/// of them it used; the caller drops those bytes and keeps the rest for the next call.
#[derive(Debug)]
pub struct RequestParser {
    state: ParseState,
    request_line: Option<RequestLine>,
    headers: HeaderMap,
    consumed: usize,
}

impl Default for RequestParser {
    fn default() -> Self {
        RequestParser::new()
    }
}

impl RequestParser {
    /// Creates a new request parser.
    pub fn new() -> RequestParser {
        RequestParser {
            state: ParseState::Initialized,
            request_line: None,
            headers: HeaderMap::new(),
            consumed: 0,
        }
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    /// Total bytes consumed over every call to [`RequestParser::parse`].
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// True once the blank line ending the headers has been parsed.
    pub fn is_done(&self) -> bool {
        self.state == ParseState::HeadersDone
    }

    /// Parses as much of the given data as possible and returns the number of bytes consumed.
    ///
    /// Returns 0 when more data is needed. Errors are fatal to the request, and calling this again
    /// after the headers are done is an error.
    pub fn parse(&mut self, data: &[u8]) -> Result<usize, ParsingError> {
        if self.is_done() {
            return Err(ParsingError::AlreadyParsed);
        }

        let mut total = 0;

        while !self.is_done() {
            let n = self.parse_single(&data[total..])?;
            if n == 0 {
                break;
            }
            total += n;
            self.consumed += n;
        }

        Ok(total)
    }

    /// Advances at most one line.
    fn parse_single(&mut self, data: &[u8]) -> Result<usize, ParsingError> {
        match self.state {
            ParseState::Initialized => match try_parse_request_line(data)? {
                None => Ok(0),
                Some((n, line)) => {
                    debug!("Parsed request line: {} {} {}", line.method, line.target, line.version);
                    self.request_line = Some(line);
                    self.state = ParseState::RequestLineParsed;
                    Ok(n)
                }
            },
            ParseState::RequestLineParsed => {
                let (n, done) = parse_header_into(&mut self.headers, data)?;
                if done {
                    trace!("Headers done after {} fields", self.headers.len());
                    self.state = ParseState::HeadersDone;
                } else if n > 0 {
                    trace!("Parsed header line of {} bytes", n);
                }
                Ok(n)
            }
            ParseState::HeadersDone => Err(ParsingError::AlreadyParsed),
        }
    }

    /// Takes the parsed request once the headers are done. Returns None before that, or if the
    /// request was already taken.
    pub fn take_request(&mut self) -> Option<Request> {
        if !self.is_done() {
            return None;
        }

        let request_line = self.request_line.take()?;
        let headers = mem::take(&mut self.headers);

        Some(Request { request_line, headers })
    }
}
