//! Field lookups over a decoded JSON object
//!
//! Every accessor fails loudly: absent (or `null`) fields become
//! `MissingField`, values of the wrong shape become `Format`.

use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::{ManagerError, Result};
use crate::models::Timestamp;
use super::parse_timestamp;

/// A JSON object being mapped into `entity`
pub struct Fields<'a> {
    entity: &'static str,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Wrap `value`, which must be a JSON object
    pub fn of(entity: &'static str, value: &'a Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self { entity, map }),
            other => Err(ManagerError::Format(format!(
                "{}: expected a JSON object, got {}",
                entity, other
            ))),
        }
    }

    /// True when the field is present and not `null`
    pub fn has(&self, name: &str) -> bool {
        matches!(self.map.get(name), Some(value) if !value.is_null())
    }

    pub fn value(&self, name: &str) -> Result<&'a Value> {
        match self.map.get(name) {
            Some(value) if !value.is_null() => Ok(value),
            _ => Err(ManagerError::MissingField(name.to_string())),
        }
    }

    // -------------------------------------------------------------------------
    // Scalars
    // -------------------------------------------------------------------------

    /// String field; numbers and booleans are taken in their JSON text form
    pub fn string(&self, name: &str) -> Result<String> {
        match self.value(name)? {
            Value::String(s) => Ok(s.clone()),
            scalar @ (Value::Number(_) | Value::Bool(_)) => Ok(scalar.to_string()),
            other => Err(self.format_error(name, "a string", other)),
        }
    }

    /// Like `string`, reading `fallback` when `name` is absent.
    /// A missing pair reports `name`.
    pub fn string_or(&self, name: &str, fallback: &str) -> Result<String> {
        if !self.has(name) && self.has(fallback) {
            return self.string(fallback);
        }
        self.string(name)
    }

    /// Non-negative integer, sent either as a JSON number or a decimal string
    pub fn u64(&self, name: &str) -> Result<u64> {
        self.integer(name)
    }

    pub fn u32(&self, name: &str) -> Result<u32> {
        self.integer(name)
    }

    pub fn i64(&self, name: &str) -> Result<i64> {
        self.integer(name)
    }

    /// Integer that must be at least 1
    pub fn positive_u32(&self, name: &str) -> Result<u32> {
        let value = self.u32(name)?;
        if value == 0 {
            return Err(ManagerError::Format(format!(
                "{}.{}: expected a positive integer, got 0",
                self.entity, name
            )));
        }
        Ok(value)
    }

    /// Optional float, sent as a number or a decimal string
    pub fn opt_f64(&self, name: &str) -> Result<Option<f64>> {
        if !self.has(name) {
            return Ok(None);
        }
        match self.value(name)? {
            Value::Number(n) => Ok(n.as_f64()),
            Value::String(s) => s
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| self.format_error(name, "a number", &Value::String(s.clone()))),
            other => Err(self.format_error(name, "a number", other)),
        }
    }

    /// True only for the string `"true"`; absent or any other value is false
    pub fn literal_true(&self, name: &str) -> bool {
        matches!(self.map.get(name), Some(Value::String(s)) if s == "true")
    }

    /// Numeric flag code: true iff non-zero
    pub fn nonzero_code(&self, name: &str) -> Result<bool> {
        let code: i64 = self.integer(name)?;
        Ok(code != 0)
    }

    // -------------------------------------------------------------------------
    // Timestamps
    // -------------------------------------------------------------------------

    pub fn timestamp(&self, name: &str) -> Result<Timestamp> {
        let raw = self.string(name)?;
        parse_timestamp(&raw)
    }

    /// Timestamp where the empty string means "no timestamp"
    pub fn timestamp_or_absent(&self, name: &str) -> Result<Option<Timestamp>> {
        let raw = self.string(name)?;
        if raw.is_empty() {
            return Ok(None);
        }
        parse_timestamp(&raw).map(Some)
    }

    // -------------------------------------------------------------------------
    // Nested values
    // -------------------------------------------------------------------------

    pub fn object(&self, name: &str, entity: &'static str) -> Result<Fields<'a>> {
        Fields::of(entity, self.value(name)?)
    }

    pub fn list(&self, name: &str) -> Result<&'a [Value]> {
        match self.value(name)? {
            Value::Array(items) => Ok(items),
            other => Err(self.format_error(name, "a list", other)),
        }
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn integer<T: FromStr>(&self, name: &str) -> Result<T> {
        let parsed = match self.value(name)? {
            Value::Number(n) => n.to_string().parse().ok(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        match parsed {
            Some(value) => Ok(value),
            None => Err(self.format_error(name, "an integer", self.value(name)?)),
        }
    }

    fn format_error(&self, name: &str, expected: &str, got: &Value) -> ManagerError {
        ManagerError::Format(format!(
            "{}.{}: expected {}, got {}",
            self.entity, name, expected, got
        ))
    }
}
