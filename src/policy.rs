/*!
 * Parsing policy
 *
 * `Policy` selects, at compile time, whether [`crate::parser::parse`]
 * materializes a [`Marker`](crate::marker::Marker) tree (`KeepResult`) or
 * only counts consumed bytes (`DropResult`). The split is resolved entirely
 * through monomorphization: the hot recursive-descent loop in
 * [`crate::parser`] never branches on which policy it's running under.
 *
 * This mirrors the source library's `parsing_policy::keep_result` /
 * `drop_result` template tag types, which specialize
 * `positive_parse_result_t<Policy>` rather than carrying a runtime flag.
 */

use crate::marker::Marker;

mod sealed {
    pub trait Sealed {}
}

/// A compile-time parsing policy. Implemented only by [`KeepResult`] and
/// [`DropResult`]; not implementable outside this crate.
pub trait Policy: sealed::Sealed {
    /// The value produced for one parsed RESP value under this policy.
    type Value<'a>: 'a;

    /// The accumulator used while parsing array children. For
    /// [`DropResult`] this is a zero-sized no-op, so framing a pipeline
    /// never allocates an array tree just to discard it.
    type ArrayBuilder<'a>: Default;

    /// Build the value for a `+` line or a non-negative `$` bulk string.
    fn simple_string(view: &[u8]) -> Self::Value<'_>;

    /// Build the value for a `-` error line.
    fn error(view: &[u8]) -> Self::Value<'_>;

    /// Build the value for a `:` integer line.
    fn integer(view: &[u8]) -> Self::Value<'_>;

    /// Build the value for a `$-1` or `*-1` nil, given the view over its
    /// count text.
    fn nil(count_view: &[u8]) -> Self::Value<'_>;

    /// Append one parsed child value to an in-progress array.
    fn push<'a>(builder: &mut Self::ArrayBuilder<'a>, value: Self::Value<'a>);

    /// Finish building an array into its final value.
    fn finish_array<'a>(builder: Self::ArrayBuilder<'a>) -> Self::Value<'a>;
}

/// Policy that materializes a full [`Marker`] tree referencing the input
/// buffer. This is what application code almost always wants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeepResult;

impl sealed::Sealed for KeepResult {}

impl Policy for KeepResult {
    type Value<'a> = Marker<'a>;
    type ArrayBuilder<'a> = Vec<Marker<'a>>;

    fn simple_string(view: &[u8]) -> Marker<'_> {
        Marker::SimpleString(view)
    }

    fn error(view: &[u8]) -> Marker<'_> {
        Marker::Error(view)
    }

    fn integer(view: &[u8]) -> Marker<'_> {
        Marker::Integer(view)
    }

    fn nil(count_view: &[u8]) -> Marker<'_> {
        Marker::Nil(count_view)
    }

    fn push<'a>(builder: &mut Vec<Marker<'a>>, value: Marker<'a>) {
        builder.push(value);
    }

    fn finish_array<'a>(builder: Vec<Marker<'a>>) -> Marker<'a> {
        Marker::Array(builder)
    }
}

/// Policy that parses forward without building any value, reporting only
/// the number of bytes one complete RESP value consumes. Used by
/// [`crate::match_condition::MatchN`] to frame pipelined replies before
/// committing to full parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropResult;

impl sealed::Sealed for DropResult {}

impl Policy for DropResult {
    type Value<'a> = ();
    type ArrayBuilder<'a> = ();

    fn simple_string(_view: &[u8]) {}

    fn error(_view: &[u8]) {}

    fn integer(_view: &[u8]) {}

    fn nil(_count_view: &[u8]) {}

    fn push<'a>(_builder: &mut (), _value: ()) {}

    fn finish_array<'a>(_builder: ()) {}
}
