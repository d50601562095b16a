use std::fmt::{Display, Formatter};

macro_rules! methods {
    (
        $(
            $(#[$docs:meta])*
            $name:ident;
        )+
    ) => {
        /// An HTTP method.
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum Method {
            $(
                $(#[$docs])*
                $name,
            )+
        }

        impl Method {
            /// All methods accepted in a request line.
            pub const ALL: &'static [Method] = &[$(Method::$name,)+];

            /// Converts the given string to a method. Methods are case sensitive. Returns None if no Method matches.
            pub fn try_from_str(s: &str) -> Option<Method> {
                match s {
                    $(
                    stringify!($name) => Some(Method::$name),
                    )+
                    _ => None
                }
            }

            /// The method as it appears on the wire.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(
                    Method::$name => stringify!($name),
                    )+
                }
            }
        }
    }
}

methods! {
    /// GET method.
    GET;
    /// PUT method.
    PUT;
    /// POST method.
    POST;
    /// DELETE method.
    DELETE;
    /// PATCH method.
    PATCH;
    /// HEAD method.
    HEAD;
    /// OPTIONS method.
    OPTIONS;
    /// TRACE method.
    TRACE;
    /// CONNECT method.
    CONNECT;
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
