/*!
 * Match condition
 *
 * Frames pipelined replies before committing to full parsing: given an
 * expected number of top-level replies, [`MatchN`] parses forward using the
 * [`DropResult`] policy — so framing a thousand-reply pipeline costs no
 * more than a thousand cheap parses, not a thousand materialized trees —
 * and reports how many bytes to read before the whole pipeline is ready.
 */

use crate::parser::{parse, ParseOutcome};
use crate::policy::DropResult;

/// Stateful functor that counts complete top-level RESP replies within a
/// growing buffer.
///
/// Instantiate one per read operation; `matched` only ever increases, so
/// sharing an instance across unrelated reads would corrupt the count.
#[derive(Debug, Clone, Copy)]
pub struct MatchN {
    expected: usize,
    matched: usize,
}

impl MatchN {
    /// Create a matcher looking for `expected` complete replies.
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            matched: 0,
        }
    }

    /// How many replies have been matched so far.
    pub fn matched(&self) -> usize {
        self.matched
    }

    /// How many replies this matcher is waiting for in total.
    pub fn expected(&self) -> usize {
        self.expected
    }

    /// Parse as many complete replies as possible out of `buffer`, starting
    /// from its front.
    ///
    /// Returns `(consumed, complete)`: `consumed` is how many leading bytes
    /// of `buffer` were spanned by newly matched replies (advance the I/O
    /// driver's read cursor by this much, mirroring
    /// `async_read_until`-style completion conditions), and `complete` is
    /// whether `expected` has now been reached.
    ///
    /// On a protocol error, stops immediately and reports `complete = true`
    /// with `consumed = 0`: the caller is expected to hand the same buffer
    /// to [`parse`] next and let the error surface there, rather than have
    /// this matcher duplicate error classification.
    pub fn advance(&mut self, buffer: &[u8]) -> (usize, bool) {
        let mut offset = 0;

        while self.matched < self.expected {
            match parse::<DropResult>(&buffer[offset..]) {
                ParseOutcome::NotEnoughData => break,
                ParseOutcome::ProtocolError(_) => return (0, true),
                ParseOutcome::Positive { consumed, .. } => {
                    offset += consumed;
                    self.matched += 1;
                }
            }
        }

        (offset, self.matched == self.expected)
    }
}
