use respwire::{extract, parse, Error, Extracted, KeepResult, Marker, ParseOutcome};

fn parse_and_extract(bytes: &[u8]) -> Extracted {
    match parse::<KeepResult>(bytes) {
        ParseOutcome::Positive { result, .. } => extract(&result).expect("extraction failed"),
        other => panic!("expected Positive, got {other:?}"),
    }
}

#[test]
fn extracts_simple_string() {
    assert_eq!(
        parse_and_extract(b"+OK\r\n"),
        Extracted::String(b"OK".to_vec())
    );
}

#[test]
fn extracts_bulk_string_as_string() {
    assert_eq!(
        parse_and_extract(b"$4\r\nsome\r\n"),
        Extracted::String(b"some".to_vec())
    );
}

#[test]
fn extracts_error() {
    assert_eq!(
        parse_and_extract(b"-WRONGTYPE oops\r\n"),
        Extracted::Error(b"WRONGTYPE oops".to_vec())
    );
}

#[test]
fn extracts_valid_integer() {
    assert_eq!(parse_and_extract(b":42\r\n"), Extracted::Integer(42));
    assert_eq!(parse_and_extract(b":-42\r\n"), Extracted::Integer(-42));
    assert_eq!(parse_and_extract(b":0\r\n"), Extracted::Integer(0));
}

#[test]
fn rejects_non_decimal_integer_text() {
    let marker = Marker::Integer(b"-55abc");
    assert_eq!(extract(&marker), Err(Error::CountConversion));
}

#[test]
fn rejects_overflowing_integer_text() {
    let marker = Marker::Integer(b"99999999999999999999999");
    assert_eq!(extract(&marker), Err(Error::CountConversion));
}

#[test]
fn extracts_nil_bulk_and_array() {
    assert_eq!(parse_and_extract(b"$-1\r\n"), Extracted::Nil);
    assert_eq!(parse_and_extract(b"*-1\r\n"), Extracted::Nil);
}

#[test]
fn extracts_empty_array() {
    assert_eq!(parse_and_extract(b"*0\r\n"), Extracted::Array(vec![]));
}

#[test]
fn extracts_nested_array_recursively() {
    let extracted = parse_and_extract(b"*2\r\n*2\r\n:1\r\n:2\r\n$-1\r\n");
    assert_eq!(
        extracted,
        Extracted::Array(vec![
            Extracted::Array(vec![Extracted::Integer(1), Extracted::Integer(2)]),
            Extracted::Nil,
        ])
    );
}

#[test]
fn one_bad_integer_fails_the_whole_array() {
    let marker = Marker::Array(vec![
        Marker::Integer(b"5"),
        Marker::Integer(b"not-a-number"),
    ]);
    assert_eq!(extract(&marker), Err(Error::CountConversion));
}
