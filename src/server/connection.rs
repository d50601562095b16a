use std::io::Read;
use std::net::SocketAddr;

use crate::common::request::Request;
use crate::parse::error::ParsingError;
use crate::parse::Accumulator;
use crate::server::connection::ReadRequestResult::{Closed, Error, Ready};

/// The result of attempting to read a request.
#[derive(Debug)]
pub enum ReadRequestResult {
    /// A new request has been parsed.
    Ready(Request),
    /// An error occurred while trying to read a request.
    Error(ParsingError),
    /// The connection was closed before any data was sent.
    Closed,
}

/// A connection to a client.
pub struct Connection<S: Read> {
    /// The address of the client.
    pub addr: SocketAddr,
    accumulator: Accumulator<S>,
}

impl<S: Read> Connection<S> {
    /// Creates a new connection out of the given address and stream, reading at most `chunk_size`
    /// bytes at a time.
    pub fn new(addr: SocketAddr, stream: S, chunk_size: usize) -> Connection<S> {
        Connection { addr, accumulator: Accumulator::with_chunk_size(stream, chunk_size) }
    }

    /// Reads a request from the underlying stream. Blocks until the request head is complete or
    /// the stream ends.
    pub fn read_request(&mut self) -> ReadRequestResult {
        match self.accumulator.read_request() {
            Ok(request) => Ready(request),
            Err(err) if err.is_closed() => Closed,
            Err(err) => Error(err),
        }
    }
}
