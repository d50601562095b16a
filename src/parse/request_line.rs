use crate::common::method::Method;
use crate::common::request::RequestLine;
use crate::common::version::Version;
use crate::parse::crlf_line::split_crlf_line;
use crate::parse::error::FormatError;

/// Tries to parse the request line at the start of the given data.
///
/// Returns `Ok(None)` when no CRLF is buffered yet. Otherwise returns the number of bytes the line
/// occupied, CRLF included, and the parsed line. Nothing is consumed on error.
pub fn try_parse_request_line(data: &[u8]) -> Result<Option<(usize, RequestLine)>, FormatError> {
    let Some((line, consumed)) = split_crlf_line(data) else {
        return Ok(None);
    };

    let line = std::str::from_utf8(line).map_err(|_| FormatError::InvalidUtf8)?;

    Ok(Some((consumed, parse_request_line(line)?)))
}

/// Parses the given string as the first line of a request, without its CRLF.
fn parse_request_line(line: &str) -> Result<RequestLine, FormatError> {
    let parts: Vec<&str> = line.split(' ').collect();

    let [method_raw, target, version_raw] = parts[..] else {
        return Err(FormatError::PartCount(parts.len()));
    };

    let method = parse_method(method_raw)?;
    let version = parse_version(version_raw)?;

    Ok(RequestLine { method, target: target.to_string(), version })
}

/// Parses the given string into a method. If the method is not recognized, will return an error.
fn parse_method(raw: &str) -> Result<Method, FormatError> {
    Method::try_from_str(raw).ok_or_else(|| FormatError::InvalidMethod(raw.to_string()))
}

/// Parses a `<name>/<token>` version. Only the token after the first slash is checked.
fn parse_version(raw: &str) -> Result<Version, FormatError> {
    raw.split_once('/')
        .and_then(|(_, token)| Version::try_from_token(token))
        .ok_or_else(|| FormatError::InvalidVersion(raw.to_string()))
}
