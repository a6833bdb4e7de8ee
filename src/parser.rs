/*!
 * RESP parser
 *
 * Incremental, recursive-descent parsing over the five RESP value types.
 * `parse` is a pure function of its input slice: it never mutates the
 * buffer and never allocates beyond the [`Marker`] tree itself (and only
 * under [`KeepResult`] — see [`crate::policy`]).
 *
 * At every prefix, parsing one value yields exactly one of three outcomes:
 * not enough data yet (safe to retry once more bytes arrive, no bytes
 * consumed), a complete value plus how many bytes it spanned, or a protocol
 * error. There is no fourth outcome and no partial consumption on failure.
 */

use memchr::memmem;

use crate::error::Error;
use crate::policy::{DropResult, Policy};

/// Default bound on array nesting depth for [`parse`].
///
/// The original source parses arrays with unbounded recursion over
/// attacker-controlled input; this crate takes the REDESIGN FLAGS
/// recommendation and bounds it. 128 comfortably covers any real Redis
/// reply shape (command replies nest at most a few levels) while still
/// failing fast on pathological input instead of blowing the call stack.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 128;

/// The result of attempting to parse one RESP value out of `bytes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome<'a, P: Policy> {
    /// `bytes` is a valid prefix of some RESP value, but incomplete. No
    /// bytes were consumed; call again once more bytes have arrived,
    /// passing the same leading bytes plus whatever is new.
    NotEnoughData,

    /// `bytes` violates RESP. RESP has no resynchronization primitive, so
    /// this is normally fatal for the whole stream.
    ProtocolError(Error),

    /// A complete value was parsed.
    Positive {
        /// The parsed value, or `()` under [`DropResult`].
        result: P::Value<'a>,
        /// How many leading bytes of `bytes` this value spanned. Always
        /// `1..=bytes.len()`.
        consumed: usize,
    },
}

impl<'a, P: Policy> ParseOutcome<'a, P> {
    /// `true` if this outcome is [`ParseOutcome::NotEnoughData`].
    pub fn is_not_enough_data(&self) -> bool {
        matches!(self, ParseOutcome::NotEnoughData)
    }

    /// The protocol error, if this outcome is one.
    pub fn error(&self) -> Option<Error> {
        match self {
            ParseOutcome::ProtocolError(e) => Some(*e),
            _ => None,
        }
    }
}

/// Parse one RESP value from `bytes`, using the default nesting-depth
/// bound ([`DEFAULT_MAX_NESTING_DEPTH`]).
///
/// `bytes` is a contiguous view over the caller's buffer (see
/// [`crate::buffer`] for adapting a segmented buffer into one). On
/// `Positive`, the caller should record or extract whatever it needs from
/// the result *before* advancing the buffer by `consumed`, since the
/// result may borrow from `bytes`.
pub fn parse<P: Policy>(bytes: &[u8]) -> ParseOutcome<'_, P> {
    parse_with_max_depth(bytes, DEFAULT_MAX_NESTING_DEPTH)
}

/// Like [`parse`], but with an explicit array-nesting depth bound.
pub fn parse_with_max_depth<P: Policy>(bytes: &[u8], max_depth: usize) -> ParseOutcome<'_, P> {
    parse_value::<P>(bytes, max_depth)
}

fn find_crlf(input: &[u8]) -> Option<usize> {
    memmem::find(input, b"\r\n")
}

enum Count {
    Nil,
    Len(usize),
}

fn decode_count(text: &[u8]) -> Result<Count, Error> {
    let decoded = std::str::from_utf8(text)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or(Error::CountConversion)?;

    match decoded {
        -1 => Ok(Count::Nil),
        n if n < -1 => Err(Error::CountRange),
        n => Ok(Count::Len(n as usize)),
    }
}

/// Reads a `tag payload\r\n` line, where `tag` has already been consumed
/// from `full_input` (its length is `tag_len`) and `rest` is what follows
/// the tag byte. Used for Simple String, Error, and Integer.
fn parse_terminated_line<'a, P: Policy>(
    rest: &'a [u8],
    tag_len: usize,
    ctor: for<'b> fn(&'b [u8]) -> P::Value<'b>,
) -> ParseOutcome<'a, P> {
    match find_crlf(rest) {
        None => ParseOutcome::NotEnoughData,
        Some(idx) => {
            let payload = &rest[..idx];
            ParseOutcome::Positive {
                result: ctor(payload),
                consumed: tag_len + idx + 2,
            }
        }
    }
}

/// `rest` is the input immediately following the `$` tag byte.
fn parse_bulk<'a, P: Policy>(rest: &'a [u8]) -> ParseOutcome<'a, P> {
    let idx = match find_crlf(rest) {
        None => return ParseOutcome::NotEnoughData,
        Some(idx) => idx,
    };
    let count_view = &rest[..idx];
    let header_len = idx + 2;

    let len = match decode_count(count_view) {
        Err(e) => return ParseOutcome::ProtocolError(e),
        Ok(Count::Nil) => {
            return ParseOutcome::Positive {
                result: P::nil(count_view),
                consumed: 1 + header_len,
            }
        }
        Ok(Count::Len(n)) => n,
    };

    let after_header = &rest[header_len..];
    let needed = match len.checked_add(2) {
        Some(n) => n,
        None => return ParseOutcome::ProtocolError(Error::CountConversion),
    };
    if after_header.len() < needed {
        return ParseOutcome::NotEnoughData;
    }
    if &after_header[len..len + 2] != b"\r\n" {
        return ParseOutcome::ProtocolError(Error::BulkTerminator);
    }

    let payload = &after_header[..len];
    ParseOutcome::Positive {
        result: P::simple_string(payload),
        consumed: 1 + header_len + needed,
    }
}

fn parse_value<'a, P: Policy>(input: &'a [u8], max_depth: usize) -> ParseOutcome<'a, P> {
    parse_value_at_depth::<P>(input, 0, max_depth)
}

fn parse_value_at_depth<'a, P: Policy>(
    input: &'a [u8],
    depth: usize,
    max_depth: usize,
) -> ParseOutcome<'a, P> {
    let (&tag, rest) = match input.split_first() {
        None => return ParseOutcome::NotEnoughData,
        Some(pair) => pair,
    };

    match tag {
        b'+' => parse_terminated_line::<P>(rest, 1, P::simple_string),
        b'-' => parse_terminated_line::<P>(rest, 1, P::error),
        b':' => parse_terminated_line::<P>(rest, 1, P::integer),
        b'$' => parse_bulk::<P>(rest),
        b'*' => parse_array_at_depth::<P>(rest, depth, max_depth),
        _ => ParseOutcome::ProtocolError(Error::WrongIntroduction),
    }
}

fn parse_array_at_depth<'a, P: Policy>(
    rest: &'a [u8],
    depth: usize,
    max_depth: usize,
) -> ParseOutcome<'a, P> {
    let idx = match find_crlf(rest) {
        None => return ParseOutcome::NotEnoughData,
        Some(idx) => idx,
    };
    let count_view = &rest[..idx];
    let header_len = idx + 2;

    let len = match decode_count(count_view) {
        Err(e) => return ParseOutcome::ProtocolError(e),
        Ok(Count::Nil) => {
            return ParseOutcome::Positive {
                result: P::nil(count_view),
                consumed: 1 + header_len,
            }
        }
        Ok(Count::Len(n)) => n,
    };

    if len > 0 && depth >= max_depth {
        return ParseOutcome::ProtocolError(Error::NestingTooDeep);
    }

    let mut builder = P::ArrayBuilder::default();
    let mut offset = header_len;
    for _ in 0..len {
        match parse_value_at_depth::<P>(&rest[offset..], depth + 1, max_depth) {
            ParseOutcome::NotEnoughData => return ParseOutcome::NotEnoughData,
            ParseOutcome::ProtocolError(e) => return ParseOutcome::ProtocolError(e),
            ParseOutcome::Positive { result, consumed } => {
                P::push(&mut builder, result);
                offset += consumed;
            }
        }
    }

    ParseOutcome::Positive {
        result: P::finish_array(builder),
        consumed: 1 + offset,
    }
}
