use std::cmp::min;
use std::io::{Error, ErrorKind, Read};

/// Reader that hands out the given fragments in order. A single read never crosses a fragment
/// boundary, so the fragments decide exactly how the data arrives.
pub struct MockReader {
    pub data: Vec<Vec<u8>>,
    /// Error returned instead of end of stream once every fragment is read.
    pub fail_when_empty: Option<ErrorKind>,
    /// Number of `Interrupted` errors to return before the next read succeeds.
    pub interrupts: usize,
}

impl MockReader {
    pub fn from_strs(data: Vec<&str>) -> MockReader {
        MockReader::from_bytes(data.into_iter().map(str::as_bytes).collect())
    }

    /// Empty fragments are skipped since reading one would look like end of stream.
    pub fn from_bytes(data: Vec<&[u8]>) -> MockReader {
        let data = data.into_iter().filter(|s| !s.is_empty()).map(|s| s.to_vec()).collect();
        MockReader { data, fail_when_empty: None, interrupts: 0 }
    }

    /// Splits the given data into fragments of the given size. The last one may be shorter.
    pub fn chunked(data: &[u8], size: usize) -> MockReader {
        MockReader::from_bytes(data.chunks(size).collect())
    }
}

impl Read for MockReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if self.interrupts > 0 {
            self.interrupts -= 1;
            return Err(Error::from(ErrorKind::Interrupted));
        }

        if self.data.is_empty() {
            return match self.fail_when_empty {
                None => Ok(0),
                Some(kind) => Err(Error::from(kind)),
            };
        }

        let next = &mut self.data[0];

        let amount = min(buf.len(), next.len());
        buf[..amount].copy_from_slice(&next[..amount]);
        next.drain(..amount);

        if next.is_empty() {
            self.data.remove(0);
        }

        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{ErrorKind, Read};

    use crate::util::mock::MockReader;

    fn test_read(reader: &mut impl Read, expected: &str, buf_size: usize) {
        let mut buf = vec![0u8; buf_size];
        let len = reader.read(&mut buf).unwrap();
        assert_eq!(expected, String::from_utf8_lossy(&buf[..len]));
    }

    #[test]
    fn mock_reader() {
        let mut reader = MockReader::from_strs(vec!["hello", "world", "ok bye"]);

        test_read(&mut reader, "hello", 10);
        test_read(&mut reader, "w", 1);
        test_read(&mut reader, "orl", 3);
        test_read(&mut reader, "d", 3);
        test_read(&mut reader, "ok bye", 10);
        test_read(&mut reader, "", 10);
        test_read(&mut reader, "", 10);
    }

    #[test]
    fn chunked() {
        let mut reader = MockReader::chunked(b"abcdefg", 3);

        test_read(&mut reader, "abc", 10);
        test_read(&mut reader, "def", 10);
        test_read(&mut reader, "g", 10);
        test_read(&mut reader, "", 10);
    }

    #[test]
    fn fails_when_empty() {
        let mut reader = MockReader::from_strs(vec!["a"]);
        reader.fail_when_empty = Some(ErrorKind::ConnectionReset);

        test_read(&mut reader, "a", 4);
        assert_eq!(reader.read(&mut [0; 4]).unwrap_err().kind(), ErrorKind::ConnectionReset);
    }

    #[test]
    fn interrupts() {
        let mut reader = MockReader::from_strs(vec!["a"]);
        reader.interrupts = 2;

        assert_eq!(reader.read(&mut [0; 4]).unwrap_err().kind(), ErrorKind::Interrupted);
        assert_eq!(reader.read(&mut [0; 4]).unwrap_err().kind(), ErrorKind::Interrupted);
        test_read(&mut reader, "a", 4);
    }
}
