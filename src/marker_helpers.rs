/*!
 * Marker helpers
 *
 * Small utilities over a parsed [`Marker`] that don't warrant a full
 * extraction pass: a diagnostic stringizer, literal equality, and the
 * subscription-confirmation matcher every pub/sub client needs.
 */

use crate::command::SingleCommand;
use crate::marker::Marker;

/// Render a [`Marker`] tree as a human-readable dump, for logging or
/// debugging only — never parsed back, never part of the wire contract.
pub fn stringize(marker: &Marker<'_>) -> String {
    match marker {
        Marker::SimpleString(v) => format!("[str] {}", String::from_utf8_lossy(v)),
        Marker::Error(v) => format!("[err] {}", String::from_utf8_lossy(v)),
        Marker::Integer(v) => format!("[int] {}", String::from_utf8_lossy(v)),
        Marker::Nil(_) => "[nil] ".to_string(),
        Marker::Array(items) => {
            let mut out = String::from("[array] {");
            for item in items {
                out.push_str(&stringize(item));
                out.push_str(", ");
            }
            out.push('}');
            out
        }
    }
}

/// `true` iff `marker` is a scalar variant (not an array) whose byte view
/// equals `literal` exactly.
pub fn equals_literal(marker: &Marker<'_>, literal: &[u8]) -> bool {
    match marker {
        Marker::SimpleString(v) | Marker::Error(v) | Marker::Integer(v) | Marker::Nil(v) => {
            *v == literal
        }
        Marker::Array(_) => false,
    }
}

/// Check whether `reply` is the subscription-confirmation array Redis
/// sends back for `command` (a `SUBSCRIBE`/`PSUBSCRIBE` request).
///
/// A confirmation is a 3-element array `[keyword, channel, index]`. The
/// keyword is matched case-insensitively against `command`'s first
/// argument (accepting both `subscribe`/`SUBSCRIBE` and `psubscribe`); the
/// channel name is matched case-*sensitively* against the argument at the
/// position the index names. This asymmetry is intentional: Redis command
/// keywords are case-insensitive, channel names are not. Any shape
/// mismatch returns `false` — this never panics on a malformed reply.
pub fn matches_subscription_confirmation(command: &SingleCommand<'_>, reply: &Marker<'_>) -> bool {
    let items = match reply {
        Marker::Array(items) if items.len() == 3 => items,
        _ => return false,
    };

    if command.arguments.len() < 2 {
        return false;
    }

    let keyword_matches = match &items[0] {
        Marker::SimpleString(v) => v.eq_ignore_ascii_case(command.arguments[0]),
        _ => false,
    };
    if !keyword_matches {
        return false;
    }

    let index = match &items[2] {
        Marker::Integer(v) => match std::str::from_utf8(v).ok().and_then(|s| s.parse::<i64>().ok()) {
            Some(n) => n,
            None => return false,
        },
        _ => return false,
    };

    if index < 1 || index as usize >= command.arguments.len() {
        return false;
    }

    match &items[1] {
        Marker::SimpleString(v) => *v == command.arguments[index as usize],
        _ => false,
    }
}
