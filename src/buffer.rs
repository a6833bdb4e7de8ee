/*!
 * Buffer adaptation
 *
 * [`parse`](crate::parser::parse) takes a contiguous `&[u8]`; it has no
 * notion of a segmented buffer. [`ContiguousBuffer`] is the seam between a
 * caller's dynamic, possibly-segmented buffer and that contract: callers
 * whose buffer is already contiguous (a plain slice, a `bytes::Bytes`, a
 * `bytes::BytesMut`) pay no copy at all. Callers whose buffer is segmented
 * (e.g. a `VecDeque` of chunks) are expected to coalesce before parsing —
 * [`crate::match_condition::MatchN`] exists precisely so an I/O driver can
 * keep growing such a buffer until a contiguous view is long enough,
 * without re-parsing from scratch every time a new chunk arrives.
 */

use bytes::{Bytes, BytesMut};

/// A caller buffer that can hand back a contiguous view of its readable
/// bytes without copying.
pub trait ContiguousBuffer {
    /// The current contiguous, readable contents of the buffer.
    fn contiguous(&self) -> &[u8];
}

impl ContiguousBuffer for [u8] {
    fn contiguous(&self) -> &[u8] {
        self
    }
}

impl ContiguousBuffer for Vec<u8> {
    fn contiguous(&self) -> &[u8] {
        self.as_slice()
    }
}

impl ContiguousBuffer for Bytes {
    fn contiguous(&self) -> &[u8] {
        self.as_ref()
    }
}

impl ContiguousBuffer for BytesMut {
    fn contiguous(&self) -> &[u8] {
        self.as_ref()
    }
}
