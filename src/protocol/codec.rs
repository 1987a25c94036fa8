//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! ### Request Format
//! ```text
//! <command>[ <arg1> <arg2> ...]\r\n
//! ```
//!
//! ### Response Format
//! ```text
//! {"json": "object"}\n     (or a JSON array)
//! free text\n
//! ```
//!
//! Exactly one reply line follows each request line.

use std::io::{self, BufRead, Write};

use serde_json::Value;

use crate::error::{ManagerError, Result};
use super::{CommandName, Reply};

/// Terminator appended to every request line
pub const LINE_TERMINATOR: &str = "\r\n";

/// Separator between the command and its arguments
pub const ARG_SEPARATOR: char = ' ';

// =============================================================================
// Request Encoding
// =============================================================================

/// Encode a request line (without terminator)
///
/// Checks the argument count against the catalog and rejects tokens that
/// would break line framing. Nothing is written anywhere.
pub fn encode_request(command: CommandName, args: &[&str]) -> Result<String> {
    command.check_arity(args.len())?;

    let mut line = String::from(command.wire_name());
    for arg in args {
        validate_token(command, arg)?;
        line.push(ARG_SEPARATOR);
        line.push_str(arg);
    }

    Ok(line)
}

/// Reject tokens that are empty or carry a line delimiter
fn validate_token(command: CommandName, arg: &str) -> Result<()> {
    if arg.is_empty() {
        return Err(ManagerError::Argument(format!(
            "`{}`: empty argument",
            command
        )));
    }
    if arg.contains(['\r', '\n']) {
        return Err(ManagerError::Argument(format!(
            "`{}`: argument {:?} contains a line delimiter",
            command, arg
        )));
    }
    Ok(())
}

// =============================================================================
// Response Decoding
// =============================================================================

/// Decode one reply line (terminator already stripped)
///
/// A line whose first non-whitespace character is `{` or `[` must be JSON.
/// A JSON object carrying an `error` key is the manager reporting a failure.
pub fn decode_reply(line: &str) -> Result<Reply> {
    let looks_like_json = matches!(line.trim_start().chars().next(), Some('{') | Some('['));
    if !looks_like_json {
        return Ok(Reply::PlainText(line.to_string()));
    }

    let value: Value = serde_json::from_str(line).map_err(|source| {
        ManagerError::MalformedResponse {
            line: line.to_string(),
            source,
        }
    })?;

    if let Some(message) = remote_error(&value) {
        return Err(ManagerError::Remote(message));
    }

    Ok(Reply::Structured(value))
}

/// Extract the message of an `{"error": ...}` reply
fn remote_error(value: &Value) -> Option<String> {
    let error = value.as_object()?.get("error")?;
    Some(match error {
        Value::String(message) => message.clone(),
        other => other.to_string(),
    })
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Write a request line followed by the terminator
pub fn write_request<W: Write>(writer: &mut W, line: &str) -> Result<()> {
    writer.write_all(line.as_bytes())?;
    writer.write_all(LINE_TERMINATOR.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Read one line from a stream, stripping `\n` and a preceding `\r`
///
/// End of stream before a complete line is a connection error.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    let read = reader.read_line(&mut line)?;

    if read == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "connection closed before a reply was received",
        )
        .into());
    }

    if !line.ends_with('\n') {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("connection closed mid-line after {} bytes", read),
        )
        .into());
    }

    line.pop();
    if line.ends_with('\r') {
        line.pop();
    }

    Ok(line)
}

/// Read and decode a complete reply from a stream
pub fn read_reply<R: BufRead>(reader: &mut R) -> Result<Reply> {
    let line = read_line(reader)?;
    decode_reply(&line)
}
