/// Command-line argument parser
pub mod args;
/// HTTP data types.
pub mod common;
/// Components for parsing HTTP request heads.
pub mod parse;
/// Components for listening on TCP and reading a request per connection.
pub mod server;

/// Utility components.
pub mod util;
