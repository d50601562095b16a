use crate::common::header::{Header, HeaderMap};
use crate::parse::crlf_line::{split_crlf_line, CRLF};
use crate::parse::error::HeaderFormatError;

/// One parsed line of the header section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderField {
    /// A `key: value` field with a lowercased key and a trimmed value.
    Field { key: Header, value: String },
    /// The blank line that terminates the header section.
    End,
}

/// Tries to parse one header field, or the terminating blank line, at the start of the given data.
///
/// Returns `Ok(None)` when no CRLF is buffered yet. Otherwise returns the number of bytes the line
/// occupied, CRLF included. Nothing is consumed on error.
pub fn try_parse_header_field(data: &[u8]) -> Result<Option<(usize, HeaderField)>, HeaderFormatError> {
    if data.starts_with(CRLF) {
        return Ok(Some((CRLF.len(), HeaderField::End)));
    }

    let Some((line, consumed)) = split_crlf_line(data) else {
        return Ok(None);
    };

    let (key, value) = parse_header(line.trim_ascii())?;

    Ok(Some((consumed, HeaderField::Field { key, value })))
}

/// Parses one field into the given headers, merging repeated keys. Returns the number of bytes
/// consumed and whether the terminating blank line was reached.
pub fn parse_header_into(headers: &mut HeaderMap, data: &[u8]) -> Result<(usize, bool), HeaderFormatError> {
    match try_parse_header_field(data)? {
        None => Ok((0, false)),
        Some((consumed, HeaderField::End)) => Ok((consumed, true)),
        Some((consumed, HeaderField::Field { key, value })) => {
            headers.insert_or_merge(key, value);
            Ok((consumed, false))
        }
    }
}

/// Parses the given trimmed line as a header. Splits the line at the first ':'.
fn parse_header(line: &[u8]) -> Result<(Header, String), HeaderFormatError> {
    let colon = line.iter().position(|&b| b == b':').ok_or(HeaderFormatError::MissingColon)?;

    let key = match &line[..colon] {
        [] => return Err(HeaderFormatError::EmptyKey),
        [.., b' '] => return Err(HeaderFormatError::SpaceBeforeColon),
        key => key.to_ascii_lowercase(),
    };

    if let Some(&bad) = key.iter().find(|&&b| !is_tchar(b)) {
        return Err(HeaderFormatError::InvalidKeyCharacter(bad as char));
    }

    let value = std::str::from_utf8(line[colon + 1..].trim_ascii())
        .map_err(|_| HeaderFormatError::InvalidValue)?;

    Ok((Header::from(String::from_utf8_lossy(&key).into_owned()), value.to_string()))
}

/// Checks if the given byte may appear in a header name once lowercased.
pub fn is_tchar(ch: u8) -> bool {
    matches!(ch,
        b'0'..=b'9' |
        b'a'..=b'z' |
        b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' |
        b'*' | b'+' | b'-' | b'.' |
        b'^' | b'_' | b'`' | b'|' | b'~'
    )
}
