/// HTTP header data types and functions.
pub mod header;
/// HTTP method data type and functions.
pub mod method;
/// HTTP request data types.
pub mod request;
/// HTTP version data type and functions.
pub mod version;
