use crate::common::header::HeaderMap;
use crate::common::method::Method;
use crate::common::version::Version;

/// The first line of an HTTP request.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RequestLine {
    /// The method.
    pub method: Method,
    /// The request target, exactly as sent.
    pub target: String,
    /// The version token.
    pub version: Version,
}

/// An HTTP request head: the request line and its headers.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Request {
    /// The request line.
    pub request_line: RequestLine,
    /// The headers.
    pub headers: HeaderMap,
}

impl Request {
    pub fn method(&self) -> Method {
        self.request_line.method
    }

    pub fn target(&self) -> &str {
        &self.request_line.target
    }

    pub fn version(&self) -> Version {
        self.request_line.version
    }
}
