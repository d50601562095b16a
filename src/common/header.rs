use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use crate::common::header::Header::{Custom, Standard};

/// A header name, always lowercase. Is either a "Standard" header with a static string, or a "Custom" header with a uniquely allocated String.
/// The "Standard" variant is to reuse memory for frequently seen headers.
#[derive(PartialEq, Eq, Hash, Debug, Clone)]
pub enum Header {
    Standard(&'static str),
    Custom(String),
}

impl Header {
    pub fn as_str(&self) -> &str {
        match self {
            Header::Standard(str) => str,
            Header::Custom(str) => str.as_str()
        }
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Standard(s) => f.write_str(s),
            Custom(s) => f.write_str(s)
        }
    }
}

macro_rules! standard_headers {
    (
        $(
            $(#[$docs:meta])*
            ($name:ident, $value:expr);
        )+
    ) => {
        $(
            $(#[$docs])*
            pub const $name: Header = Header::Standard($value);
        )+


        impl From<String> for Header {
            /// Gets a header from the given string representing the header name.
            fn from(mut value: String) -> Header {
                value.make_ascii_lowercase();
                match value.as_str() {
                    $(
                    $value => $name,
                    )+
                    _ => Header::Custom(value)
                }
            }
        }
    }
}

impl From<&str> for Header {
    /// Gets a header from the given string representing the header name.
    fn from(value: &str) -> Header {
        Header::from(value.to_string())
    }
}

impl From<&Header> for Header {
    fn from(value: &Header) -> Header {
        value.clone()
    }
}

standard_headers! {
    (ACCEPT, "accept");
    (ACCEPT_ENCODING, "accept-encoding");
    (ACCEPT_LANGUAGE, "accept-language");
    (AUTHORIZATION, "authorization");
    (CACHE_CONTROL, "cache-control");
    (CONNECTION, "connection");
    (CONTENT_ENCODING, "content-encoding");
    (CONTENT_LENGTH, "content-length");
    (CONTENT_TYPE, "content-type");
    (COOKIE, "cookie");
    (DATE, "date");
    (EXPECT, "expect");
    (FORWARDED, "forwarded");
    (HOST, "host");
    (IF_MODIFIED_SINCE, "if-modified-since");
    (IF_NONE_MATCH, "if-none-match");
    (ORIGIN, "origin");
    (RANGE, "range");
    (REFERER, "referer");
    (TE, "te");
    (TRANSFER_ENCODING, "transfer-encoding");
    (UPGRADE, "upgrade");
    (USER_AGENT, "user-agent");
    (VIA, "via");
}

/// Creates a map of headers. Repeated headers are merged in the order given.
/// ```
/// use httpfromtcp::common::header::{CONNECTION, CONTENT_TYPE, CONTENT_LENGTH, Header, TRANSFER_ENCODING};
/// use httpfromtcp::header_map;
///
/// let headers = header_map![
///    (CONNECTION, "keep-alive"),
///    (CONTENT_LENGTH, "5"),
///    ("custom-header", "hello"),
///    ("coNtEnt-TyPE", "something"),
///    ("Transfer-encoding", "chunked"),
///    ("custom-header", "again")
/// ];
///
/// assert_eq!(headers.get(&CONNECTION), Some("keep-alive"));
/// assert_eq!(headers.get(&CONTENT_LENGTH), Some("5"));
/// assert_eq!(headers.get(&CONTENT_TYPE), Some("something"));
/// assert_eq!(headers.get("Custom-Header"), Some("hello, again"));
/// assert_eq!(headers.get(&TRANSFER_ENCODING), Some("chunked"));
/// ```
#[macro_export]
macro_rules! header_map {
    () => { $crate::common::header::HeaderMap::new() };
    ($(($header:expr, $value:expr)),+ $(,)?) => {
        $crate::common::header::HeaderMap::from_pairs(vec![
            $(($header.into(), $value.into()),)+
        ])
    }
}

/// An ordered map of headers to values.
///
/// Every header holds exactly one value. Adding a header that is already present appends
/// `", "` and the new value to the stored one, so repeated fields keep their arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: Vec<(Header, String)>,
    index: HashMap<Header, usize>,
}

impl HeaderMap {
    /// Creates an empty header map.
    pub fn new() -> HeaderMap {
        HeaderMap::default()
    }

    /// Gets a header map from the given vector of header and value pairs.
    pub fn from_pairs(header_values: Vec<(Header, String)>) -> HeaderMap {
        header_values.into_iter().fold(HeaderMap::new(), |mut m, (header, value)| {
            m.insert_or_merge(header, value);
            m
        })
    }

    /// Adds a header to the map, merging the value into an existing entry with the same name.
    pub fn insert_or_merge(&mut self, k: impl Into<Header>, v: impl Into<String>) {
        let k = k.into();
        let v = v.into();

        match self.index.get(&k) {
            Some(&i) => {
                let existing = &mut self.entries[i].1;
                existing.push_str(", ");
                existing.push_str(&v);
            }
            None => {
                self.index.insert(k.clone(), self.entries.len());
                self.entries.push((k, v));
            }
        }
    }

    /// Gets the value for the given header. The lookup is case-insensitive.
    pub fn get(&self, k: impl Into<Header>) -> Option<&str> {
        let i = self.index.get(&k.into())?;
        Some(self.entries[*i].1.as_str())
    }

    /// Checks if the map contains the given header.
    pub fn contains(&self, k: impl Into<Header>) -> bool {
        self.index.contains_key(&k.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the headers in the order they were first added.
    pub fn iter(&self) -> impl Iterator<Item = (&Header, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }
}
