/*!
 * A client-side implementation of RESP (the REdis Serialization Protocol):
 * a streaming, incremental parser that turns an arbitrary-length byte
 * stream into typed reply values, plus the command serializer that
 * produces protocol-framed request bytes.
 *
 * The defining engineering problem this crate solves is that RESP replies
 * are variable-length, self-describing, arbitrarily nested, and arrive in
 * arbitrary fragmentation across network reads. [`parser::parse`] detects
 * "not enough data" at every level without consuming input, marks payload
 * regions as zero-copy slices into the caller's buffer
 * ([`marker::Marker`]), and supports a count-only policy
 * ([`policy::DropResult`]) for cheaply framing pipelines before committing
 * to full materialization.
 *
 * What this crate deliberately does *not* do: open sockets, buffer or
 * retry reads, manage timers, log, or implement any part of a Redis
 * server. Those are an I/O driver's job; this crate only defines the
 * contract it parses and writes against (see [`buffer::ContiguousBuffer`]
 * for the read-side seam).
 */

pub mod buffer;
pub mod command;
pub mod error;
pub mod extractor;
pub mod marker;
pub mod marker_helpers;
pub mod match_condition;
pub mod parser;
pub mod policy;
pub mod serializer;

pub use buffer::ContiguousBuffer;
pub use command::{Argument, CommandContainer, CommandWrapper, SingleCommand};
pub use error::Error;
pub use extractor::{extract, Extracted};
pub use marker::Marker;
pub use marker_helpers::{equals_literal, matches_subscription_confirmation, stringize};
pub use match_condition::MatchN;
pub use parser::{parse, parse_with_max_depth, ParseOutcome, DEFAULT_MAX_NESTING_DEPTH};
pub use policy::{DropResult, KeepResult, Policy};
pub use serializer::serialize;
