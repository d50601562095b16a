pub use driver::{read_request, Accumulator, MAX_HEAD_SIZE, READ_CHUNK_SIZE};

/// Parsing errors.
pub mod error;
/// Incremental request parser and its states.
pub mod request;
/// Blocking driver that feeds a reader into a request parser.
pub mod driver;
/// Parser for request lines.
pub mod request_line;
/// Parser for header fields.
pub mod headers;

/// Parser for CRLF lines.
mod crlf_line;

/// Utility for testing parsers.
#[cfg(test)]
mod test_util;
