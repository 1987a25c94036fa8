//! Protocol Module
//!
//! Defines the manager console's line protocol.
//!
//! ## Protocol Format (newline-delimited text)
//!
//! ### Request Format
//! ```text
//! <command>[ <arg1> <arg2> ...]\r\n
//! ```
//!
//! ### Commands
//! See [`CommandName`] for the catalog: wire name, exact arity and reply kind.
//!
//! ### Response Format
//! One line per request. A line starting with `{` or `[` is JSON, anything
//! else is free text exposed as `{"result": <line>}`.

mod command;
mod response;
mod codec;

pub use command::{CommandName, CommandSpec, ResponseKind};
pub use response::{Reply, RESULT_KEY};
pub use codec::{
    decode_reply, encode_request, read_line, read_reply, write_request, ARG_SEPARATOR,
    LINE_TERMINATOR,
};
