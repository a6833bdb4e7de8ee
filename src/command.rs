/*!
 * Command values
 *
 * These are what [`crate::serializer::serialize`] consumes. Arguments are
 * borrowed byte sequences — building a command never copies the caller's
 * data, and the serializer never mutates it.
 */

/// A borrowed argument that can be viewed as `&'a [u8]` without copying.
///
/// Implemented only for reference types. A bare `AsRef<[u8]>` bound can't
/// do this job: `AsRef::as_ref`'s signature ties its return to the borrow
/// of `&self`, so a generic `fn new<A: AsRef<[u8]>>` body can only promise
/// the argument lives as long as that local borrow, never `'a`, no matter
/// what reference type a caller actually passes. Here `self` is already the
/// reference, so there's no local borrow in the way.
pub trait Argument<'a> {
    fn into_argument(self) -> &'a [u8];
}

impl<'a> Argument<'a> for &'a [u8] {
    fn into_argument(self) -> &'a [u8] {
        self
    }
}

impl<'a, const N: usize> Argument<'a> for &'a [u8; N] {
    fn into_argument(self) -> &'a [u8] {
        self
    }
}

impl<'a> Argument<'a> for &'a str {
    fn into_argument(self) -> &'a [u8] {
        self.as_bytes()
    }
}

impl<'a> Argument<'a> for &'a String {
    fn into_argument(self) -> &'a [u8] {
        self.as_bytes()
    }
}

impl<'a> Argument<'a> for &'a Vec<u8> {
    fn into_argument(self) -> &'a [u8] {
        self.as_slice()
    }
}

/// One RESP command: an ordered list of arguments, conventionally with the
/// command name first (e.g. `LLEN`) and the rest treated uniformly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleCommand<'a> {
    pub arguments: Vec<&'a [u8]>,
}

impl<'a> SingleCommand<'a> {
    /// Build a command from any sequence of borrowed arguments, e.g.
    /// `SingleCommand::new(["LLEN", "mykey"])` or a `Vec<&[u8]>`.
    pub fn new<I, A>(arguments: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Argument<'a>,
    {
        Self {
            arguments: arguments.into_iter().map(Argument::into_argument).collect(),
        }
    }
}

/// An ordered sequence of [`SingleCommand`]s, sent back-to-back as a
/// pipeline before reading any reply.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandContainer<'a> {
    pub commands: Vec<SingleCommand<'a>>,
}

impl<'a> CommandContainer<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: SingleCommand<'a>) {
        self.commands.push(command);
    }
}

impl<'a> FromIterator<SingleCommand<'a>> for CommandContainer<'a> {
    fn from_iter<I: IntoIterator<Item = SingleCommand<'a>>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

/// Either a single command or a pipeline of them, as a single value the
/// serializer can accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandWrapper<'a> {
    Single(SingleCommand<'a>),
    Container(CommandContainer<'a>),
}

impl<'a> From<SingleCommand<'a>> for CommandWrapper<'a> {
    fn from(command: SingleCommand<'a>) -> Self {
        CommandWrapper::Single(command)
    }
}

impl<'a> From<CommandContainer<'a>> for CommandWrapper<'a> {
    fn from(container: CommandContainer<'a>) -> Self {
        CommandWrapper::Container(container)
    }
}
