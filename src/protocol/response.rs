//! Reply definitions
//!
//! A decoded reply line, tagged once by the decoder as text or JSON.

use serde_json::{Map, Value};

/// Key under which a plain-text line is exposed in the payload view
pub const RESULT_KEY: &str = "result";

/// One decoded reply line
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Free text, terminator stripped
    PlainText(String),

    /// A JSON object or array
    Structured(Value),
}

impl Reply {
    pub fn is_structured(&self) -> bool {
        matches!(self, Reply::Structured(_))
    }

    /// Payload view of the reply.
    /// A text line becomes the single-field object `{"result": line}`.
    pub fn into_payload(self) -> Value {
        match self {
            Reply::PlainText(line) => {
                let mut object = Map::new();
                object.insert(RESULT_KEY.to_string(), Value::String(line));
                Value::Object(object)
            }
            Reply::Structured(value) => value,
        }
    }
}
