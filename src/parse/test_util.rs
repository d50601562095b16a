use std::fmt::Debug;

use crate::common::request::Request;
use crate::parse::driver::{Accumulator, READ_CHUNK_SIZE};
use crate::parse::error::ParsingError;
use crate::util::mock::MockReader;

/// Reads a request from the given data at every chunk size from 1 to the length of the data, both
/// as the size of the fragments the reader returns and as the size the accumulator asks for.
/// Every run must give the expected result. A successful run must also consume the same number of
/// bytes, and leave every byte after the head unparsed, either buffered or still in the reader.
pub fn test_all_chunk_sizes(data: &[u8], expected: Result<Request, ParsingError>) {
    let mut consumed = None;

    for size in 1..=data.len() {
        let accumulator = Accumulator::new(MockReader::chunked(data, size));
        test_accumulator(accumulator, data, &expected, &mut consumed, &format!("fragments of {}", size));

        let accumulator = Accumulator::with_chunk_size(MockReader::from_bytes(vec![data]), size);
        test_accumulator(accumulator, data, &expected, &mut consumed, &format!("chunk size {}", size));
    }
}

/// Reads a request from the given fragments with the default chunk size.
pub fn test_fragments(data: Vec<&[u8]>, expected: Result<Request, ParsingError>) {
    let context = format!("{:?}", data.iter().map(|d| String::from_utf8_lossy(d)).collect::<Vec<_>>());
    let all = data.concat();
    let accumulator = Accumulator::with_chunk_size(MockReader::from_bytes(data), READ_CHUNK_SIZE);
    test_accumulator(accumulator, &all, &expected, &mut None, &context);
}

/// Runs the accumulator and checks its result. On success the consumed count is checked against
/// `consumed`, which is set by the first successful run.
fn test_accumulator(mut accumulator: Accumulator<MockReader>, data: &[u8], expected: &Result<Request, ParsingError>,
                    consumed: &mut Option<usize>, context: &str) {
    let actual = accumulator.read_request();
    let succeeded = actual.is_ok();
    assert_results_equal(expected, actual, context);

    if !succeeded {
        return;
    }

    let n = accumulator.consumed();
    assert_eq!(*consumed.get_or_insert(n), n, "consumed count differs for {}", context);

    let mut rest = accumulator.buffered().to_vec();
    rest.extend(accumulator.into_inner().data.concat());
    assert_eq!(rest, &data[n..], "unparsed bytes differ for {}", context);
}

/// Errors are compared by their debug output since io errors can't be compared.
fn assert_results_equal<T: Debug + Eq, E: Debug>(expected: &Result<T, E>, actual: Result<T, E>, context: &str) {
    match (expected, actual) {
        (Ok(exp), Ok(act)) => assert_eq!(exp, &act, "{}", context),
        (exp, act) => assert_eq!(format!("{:?}", exp), format!("{:?}", act), "{}", context)
    }
}
