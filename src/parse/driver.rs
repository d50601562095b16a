use std::io::{ErrorKind, Read};

use log::{debug, trace};

use crate::common::request::Request;
use crate::parse::error::{ParsingError, StreamError};
use crate::parse::request::{ParseState, RequestParser};

/// Default number of bytes requested from the reader at a time.
pub const READ_CHUNK_SIZE: usize = 8;

/// Default limit on the size of a request head, request line and headers included.
pub const MAX_HEAD_SIZE: usize = 8192;

/// Reads a request head from the given reader.
pub fn read_request(reader: impl Read) -> Result<Request, ParsingError> {
    Accumulator::new(reader).read_request()
}

/// Drives a [`RequestParser`] over a blocking reader.
///
/// Bytes are read in fixed size chunks into a buffer. After each read the parser is handed the
/// whole buffer and the bytes it consumed are dropped from the front, so whatever is left over is
/// always the unparsed tail.
pub struct Accumulator<R: Read> {
    reader: R,
    buffer: Vec<u8>,
    chunk_size: usize,
    max_head_size: usize,
    received: usize,
    parser: RequestParser,
}

impl<R: Read> Accumulator<R> {
    /// Creates an accumulator that reads [`READ_CHUNK_SIZE`] bytes at a time.
    pub fn new(reader: R) -> Accumulator<R> {
        Accumulator::with_chunk_size(reader, READ_CHUNK_SIZE)
    }

    /// Creates an accumulator that reads at most `chunk_size` bytes at a time.
    ///
    /// # Panics
    ///
    /// Panics if the chunk size is zero.
    pub fn with_chunk_size(reader: R, chunk_size: usize) -> Accumulator<R> {
        assert!(chunk_size > 0);

        Accumulator {
            reader,
            buffer: Vec::with_capacity(chunk_size),
            chunk_size,
            max_head_size: MAX_HEAD_SIZE,
            received: 0,
            parser: RequestParser::new(),
        }
    }

    /// Sets the most bytes the request head may take. Defaults to [`MAX_HEAD_SIZE`].
    pub fn with_max_head_size(mut self, max_head_size: usize) -> Accumulator<R> {
        self.max_head_size = max_head_size;
        self
    }

    /// Reads the request head, returning it once the blank line after the headers is parsed.
    ///
    /// Bytes after the blank line stay buffered. Calling this again once a request was returned is
    /// an error.
    pub fn read_request(&mut self) -> Result<Request, ParsingError> {
        if self.parser.is_done() {
            return Err(ParsingError::AlreadyParsed);
        }

        loop {
            let read = self.fill_more()?;

            let consumed = self.parser.parse(&self.buffer)?;
            self.consume(consumed);

            // until the head is done everything buffered belongs to it
            let head_size = if self.parser.is_done() {
                self.parser.consumed()
            } else {
                self.parser.consumed() + self.buffer.len()
            };
            if head_size > self.max_head_size {
                return Err(StreamError::TooLarge { limit: self.max_head_size }.into());
            }

            if self.parser.is_done() {
                debug!("Read request head of {} bytes", self.parser.consumed());
                return self.parser.take_request().ok_or(ParsingError::AlreadyParsed);
            }

            if read == 0 {
                return Err(self.end_of_stream().into());
            }
        }
    }

    /// Total bytes consumed by the parser so far.
    pub fn consumed(&self) -> usize {
        self.parser.consumed()
    }

    pub fn state(&self) -> ParseState {
        self.parser.state()
    }

    /// Bytes read from the reader but not consumed by the parser.
    pub fn buffered(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Reads up to one chunk onto the end of the buffer, retrying interrupted reads. Returns the
    /// number of bytes read, which is 0 at end of stream.
    fn fill_more(&mut self) -> std::io::Result<usize> {
        let start = self.buffer.len();
        self.buffer.resize(start + self.chunk_size, 0);

        let result = loop {
            match self.reader.read(&mut self.buffer[start..]) {
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                result => break result,
            }
        };

        let read = *result.as_ref().unwrap_or(&0);
        self.buffer.truncate(start + read);
        self.received += read;

        trace!("Read {} bytes, {} buffered", read, self.buffer.len());
        result
    }

    /// Drops the given number of bytes from the front of the buffer.
    fn consume(&mut self, amt: usize) {
        self.buffer.drain(..amt);
    }

    fn end_of_stream(&self) -> StreamError {
        if self.received == 0 {
            StreamError::Closed
        } else {
            StreamError::Incomplete { state: self.parser.state(), buffered: self.buffer.len() }
        }
    }
}
