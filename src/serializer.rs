/*!
 * Command serializer
 *
 * Writes out command values as RESP arrays of bulk strings. This is the
 * write side mirror of [`crate::parser`]: no RESP reply type is ever
 * produced here — commands are always encoded as `*K\r\n` followed by `K`
 * bulk strings, which is the only shape a RESP-speaking server accepts as
 * a command (the inline protocol is neither produced nor required to be
 * accepted).
 */

use std::io::{self, Write};

use crate::command::{CommandWrapper, SingleCommand};

/// Serialize `command` as RESP bytes into `sink`.
///
/// Arguments are written verbatim as binary-safe bulk strings: nothing is
/// escaped, and length prefixes are formatted as locale-independent
/// decimal ASCII. `sink` is not flushed.
pub fn serialize<W: Write>(sink: &mut W, command: &CommandWrapper<'_>) -> io::Result<()> {
    match command {
        CommandWrapper::Single(cmd) => serialize_single(sink, cmd),
        CommandWrapper::Container(container) => {
            for cmd in &container.commands {
                serialize_single(sink, cmd)?;
            }
            Ok(())
        }
    }
}

fn serialize_single<W: Write>(sink: &mut W, command: &SingleCommand<'_>) -> io::Result<()> {
    write!(sink, "*{}\r\n", command.arguments.len())?;
    for argument in &command.arguments {
        write!(sink, "${}\r\n", argument.len())?;
        sink.write_all(argument)?;
        sink.write_all(b"\r\n")?;
    }
    Ok(())
}
