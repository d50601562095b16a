use std::fmt::{Display, Formatter};

/// HTTP version token "1.1"
pub const HTTP_VERSION_1_1: &str = "1.1";
/// HTTP version token "2"
pub const HTTP_VERSION_2: &str = "2";
/// HTTP version token "3"
pub const HTTP_VERSION_3: &str = "3";

/// An HTTP version accepted in a request line. Only the token is recorded, no framing differs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Version {
    Http11,
    Http2,
    Http3,
}

impl Version {
    /// Converts the version token found after the slash, e.g. the `1.1` of `HTTP/1.1`.
    pub fn try_from_token(raw: &str) -> Option<Version> {
        match raw {
            HTTP_VERSION_1_1 => Some(Version::Http11),
            HTTP_VERSION_2 => Some(Version::Http2),
            HTTP_VERSION_3 => Some(Version::Http3),
            _ => None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Version::Http11 => HTTP_VERSION_1_1,
            Version::Http2 => HTTP_VERSION_2,
            Version::Http3 => HTTP_VERSION_3,
        }
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
