/*!
 * Protocol error taxonomy
 *
 * These are the ways a byte stream can fail to be valid RESP. They are
 * returned as values from the parser, never thrown; `NotEnoughData` is a
 * separate, non-error outcome (see [`crate::parser::ParseOutcome`]) since it
 * means "call me again with more bytes", not "this stream is broken".
 */

use thiserror::Error;

/// A RESP protocol violation, or a failure to convert parsed text into a
/// typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The first byte of a value was not one of `+ - : $ *`.
    #[error("wrong introduction")]
    WrongIntroduction,

    /// A count (bulk string length or array length) was not a valid signed
    /// decimal, or overflowed 64 bits.
    #[error("cannot convert count to number")]
    CountConversion,

    /// A count decoded to a value less than `-1`.
    #[error("unacceptable count value")]
    CountRange,

    /// A bulk string's payload was not followed by `\r\n` exactly.
    #[error("terminator for bulk string not found")]
    BulkTerminator,

    /// Array nesting exceeded the configured depth limit.
    ///
    /// Not present in the original source; added per the nesting-depth
    /// open question (see DESIGN.md) since unbounded recursion over
    /// attacker-controlled input is a real liability for a client library.
    #[error("array nesting too deep")]
    NestingTooDeep,

    /// A generic protocol violation not covered by a more specific variant.
    #[error("protocol error")]
    ProtocolGeneric,
}
