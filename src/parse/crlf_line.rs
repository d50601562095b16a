/// CRLF line terminator.
pub const CRLF: &[u8; 2] = b"\r\n";

/// Finds the index of the first CRLF in the given data.
pub fn find_crlf(data: &[u8]) -> Option<usize> {
    data.windows(CRLF.len()).position(|w| w == CRLF)
}

/// Splits off the first CRLF terminated line. Returns the line without its CRLF and the number of
/// bytes the line occupies including the CRLF, or None if no complete line is buffered yet.
pub fn split_crlf_line(data: &[u8]) -> Option<(&[u8], usize)> {
    let end = find_crlf(data)?;
    Some((&data[..end], end + CRLF.len()))
}

#[cfg(test)]
mod tests {
    use crate::parse::crlf_line::{find_crlf, split_crlf_line};

    #[test]
    fn test_find_crlf() {
        assert_eq!(find_crlf(b""), None);
        assert_eq!(find_crlf(b"\r"), None);
        assert_eq!(find_crlf(b"\r\n"), Some(0));
        assert_eq!(find_crlf(b" \r"), None);
        assert_eq!(find_crlf(b" \r\n"), Some(1));
        assert_eq!(find_crlf(b"Header: localhost:8080\r\n"), Some(22));
    }

    #[test]
    fn lone_cr_before_crlf() {
        assert_eq!(find_crlf(b"a\rb\r\n"), Some(3));
        assert_eq!(find_crlf(b"\r\r\n"), Some(1));
    }

    #[test]
    fn lone_lf_is_not_a_terminator() {
        assert_eq!(find_crlf(b"hello\nthere"), None);
    }

    #[test]
    fn split_first_line_only() {
        assert_eq!(split_crlf_line(b"hello there\r\nhello again\r\n"), Some((&b"hello there"[..], 13)));
        assert_eq!(split_crlf_line(b"\r\nrest"), Some((&b""[..], 2)));
        assert_eq!(split_crlf_line(b"hello"), None);
    }
}
