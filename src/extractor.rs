/*!
 * Extractor
 *
 * Walks a [`Marker`] tree and produces an owned [`Extracted`] tree, with
 * Integer markers decoded into actual `i64`s. This is the first point in
 * the pipeline that materializes payload bytes and validates numeric text
 * — deliberately kept out of the parser so the hot parsing path stays free
 * of string-to-int cost on replies the caller might not even inspect.
 */

use crate::error::Error;
use crate::marker::Marker;

/// An owned, fully-decoded RESP value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted {
    /// Bytes copied from a Simple String or bulk-string marker. Not
    /// required to be valid UTF-8, since RESP strings are binary-safe.
    String(Vec<u8>),
    /// Bytes copied from an Error marker.
    Error(Vec<u8>),
    /// A decoded signed 64-bit integer.
    Integer(i64),
    /// A null bulk string or null array.
    Nil,
    /// A recursively extracted array, in order.
    Array(Vec<Extracted>),
}

/// Extract an owned, decoded value from a borrowed [`Marker`] tree.
///
/// Total except for [`Marker::Integer`], whose text can be ill-formed (a
/// non-decimal or overflowing string) — RESP parsing is permissive at the
/// wire layer (spec: `:-55abc\r\n` parses fine) but this is where that
/// tolerance ends.
pub fn extract(marker: &Marker<'_>) -> Result<Extracted, Error> {
    match marker {
        Marker::SimpleString(view) => Ok(Extracted::String(view.to_vec())),
        Marker::Error(view) => Ok(Extracted::Error(view.to_vec())),
        Marker::Integer(view) => decode_integer(view).map(Extracted::Integer),
        Marker::Nil(_) => Ok(Extracted::Nil),
        Marker::Array(items) => items
            .iter()
            .map(extract)
            .collect::<Result<Vec<_>, _>>()
            .map(Extracted::Array),
    }
}

fn decode_integer(text: &[u8]) -> Result<i64, Error> {
    std::str::from_utf8(text)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or(Error::CountConversion)
}
