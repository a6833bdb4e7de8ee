use bytes::{Bytes, BytesMut};

use respwire::{parse, ContiguousBuffer, KeepResult, Marker, ParseOutcome};

#[test]
fn slice_is_its_own_contiguous_view() {
    let data: &[u8] = b"+OK\r\n";
    assert_eq!(data.contiguous(), data);
}

#[test]
fn vec_contiguous_view_matches_its_contents() {
    let data: Vec<u8> = b"+OK\r\n".to_vec();
    assert_eq!(data.contiguous(), b"+OK\r\n".as_slice());
}

#[test]
fn bytes_contiguous_view_matches_its_contents() {
    let data = Bytes::from_static(b"+OK\r\n");
    assert_eq!(data.contiguous(), b"+OK\r\n".as_slice());
}

#[test]
fn bytes_mut_contiguous_view_matches_its_contents() {
    let mut data = BytesMut::new();
    data.extend_from_slice(b"+OK\r\n");
    assert_eq!(data.contiguous(), b"+OK\r\n".as_slice());
}

/// Each `ContiguousBuffer` impl is meant to feed straight into `parse`
/// without copying, regardless of which caller buffer type produced it.
fn parse_via_contiguous<B: ContiguousBuffer + ?Sized>(buffer: &B) -> Marker<'_> {
    match parse::<KeepResult>(buffer.contiguous()) {
        ParseOutcome::Positive { result, .. } => result,
        other => panic!("expected Positive, got {other:?}"),
    }
}

#[test]
fn parses_correctly_through_every_buffer_impl() {
    let expected = Marker::SimpleString(b"OK");

    let slice: &[u8] = b"+OK\r\n";
    assert_eq!(parse_via_contiguous(slice), expected);

    let vec: Vec<u8> = b"+OK\r\n".to_vec();
    assert_eq!(parse_via_contiguous(&vec), expected);

    let bytes = Bytes::from_static(b"+OK\r\n");
    assert_eq!(parse_via_contiguous(&bytes), expected);

    let mut bytes_mut = BytesMut::new();
    bytes_mut.extend_from_slice(b"+OK\r\n");
    assert_eq!(parse_via_contiguous(&bytes_mut), expected);
}
