/*!
 * Marker model
 *
 * A [`Marker`] is a parsed RESP value expressed as byte-slice views into the
 * caller's buffer — never a copy of the payload. This is the crate's
 * defining performance property: nothing in the parsing path touches the
 * heap to hold payload bytes, only to hold the shape of nested arrays.
 */

/// One parsed RESP value, borrowing from the buffer it was parsed out of.
///
/// Every view excludes its own framing (tag byte, terminators), with one
/// exception: [`Marker::Nil`] retains the view over its count text (`-1`)
/// for round-trip and debug purposes, since a nil carries no payload of its
/// own to view instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker<'a> {
    /// A `+` simple string, or a non-negative `$` bulk string — RESP draws
    /// no distinction between the two once framing is stripped, so both
    /// produce this variant.
    SimpleString(&'a [u8]),

    /// A `-` error line.
    Error(&'a [u8]),

    /// A `:` integer line, as raw digit text. Numeric validity is the
    /// [`crate::extractor`]'s concern, not the parser's: RESP is tolerant
    /// of non-digit trailing bytes at the wire layer.
    Integer(&'a [u8]),

    /// A `$-1` (null bulk string) or `*-1` (null array). Carries the view
    /// over the count text (`-1`) rather than an empty slice.
    Nil(&'a [u8]),

    /// A `*` array of zero or more child markers, arbitrarily nested.
    Array(Vec<Marker<'a>>),
}

impl<'a> Marker<'a> {
    /// Returns the child markers if this is an array, `None` otherwise.
    pub fn as_array(&self) -> Option<&[Marker<'a>]> {
        match self {
            Marker::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the borrowed byte view backing this marker, except for
    /// arrays, which have no single view of their own.
    pub fn view(&self) -> Option<&'a [u8]> {
        match *self {
            Marker::SimpleString(v) | Marker::Error(v) | Marker::Integer(v) | Marker::Nil(v) => {
                Some(v)
            }
            Marker::Array(_) => None,
        }
    }
}
