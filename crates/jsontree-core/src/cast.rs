//! Typed access into a [`JsonValue`] by expected tag.
//!
//! Two method families cover the two access contracts:
//!
//! - `as_*` — checked: returns `None` unless the tag matches. The default.
//! - `expect_*` — assume path: for callers that have already verified the
//!   tag (typically via [`JsonValue::json_type`]). A mismatch is a contract
//!   violation, not a recoverable error, and panics naming the expected and
//!   actual tags.

use std::collections::BTreeMap;

use crate::value::{JsonType, JsonValue};

impl JsonValue {
    /// The boolean payload, or `None` if the tag is not Boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer view of a number, or `None` if the tag is not Number.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            JsonValue::Number(n) => Some(n.as_i32()),
            _ => None,
        }
    }

    /// The floating view of a number, or `None` if the tag is not Number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// The string payload, or `None` if the tag is not String.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The element sequence, or `None` if the tag is not Array.
    pub fn as_array(&self) -> Option<&Vec<JsonValue>> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Mutable element sequence, or `None` if the tag is not Array.
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<JsonValue>> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The member map, or `None` if the tag is not Object.
    pub fn as_object(&self) -> Option<&BTreeMap<String, JsonValue>> {
        match self {
            JsonValue::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Mutable member map, or `None` if the tag is not Object.
    pub fn as_object_mut(&mut self) -> Option<&mut BTreeMap<String, JsonValue>> {
        match self {
            JsonValue::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Assume-path boolean access.
    ///
    /// # Panics
    ///
    /// Panics if the tag is not Boolean.
    pub fn expect_bool(&self) -> bool {
        match self {
            JsonValue::Boolean(b) => *b,
            other => mismatch(JsonType::Boolean, other),
        }
    }

    /// Assume-path integer-view access.
    ///
    /// # Panics
    ///
    /// Panics if the tag is not Number.
    pub fn expect_i32(&self) -> i32 {
        match self {
            JsonValue::Number(n) => n.as_i32(),
            other => mismatch(JsonType::Number, other),
        }
    }

    /// Assume-path floating-view access.
    ///
    /// # Panics
    ///
    /// Panics if the tag is not Number.
    pub fn expect_f64(&self) -> f64 {
        match self {
            JsonValue::Number(n) => n.as_f64(),
            other => mismatch(JsonType::Number, other),
        }
    }

    /// Assume-path string access.
    ///
    /// # Panics
    ///
    /// Panics if the tag is not String.
    pub fn expect_str(&self) -> &str {
        match self {
            JsonValue::String(s) => s,
            other => mismatch(JsonType::String, other),
        }
    }

    /// Assume-path array access.
    ///
    /// # Panics
    ///
    /// Panics if the tag is not Array.
    pub fn expect_array(&self) -> &Vec<JsonValue> {
        match self {
            JsonValue::Array(items) => items,
            other => mismatch(JsonType::Array, other),
        }
    }

    /// Assume-path mutable array access.
    ///
    /// # Panics
    ///
    /// Panics if the tag is not Array.
    pub fn expect_array_mut(&mut self) -> &mut Vec<JsonValue> {
        match self {
            JsonValue::Array(items) => items,
            other => mismatch(JsonType::Array, other),
        }
    }

    /// Assume-path object access.
    ///
    /// # Panics
    ///
    /// Panics if the tag is not Object.
    pub fn expect_object(&self) -> &BTreeMap<String, JsonValue> {
        match self {
            JsonValue::Object(members) => members,
            other => mismatch(JsonType::Object, other),
        }
    }

    /// Assume-path mutable object access.
    ///
    /// # Panics
    ///
    /// Panics if the tag is not Object.
    pub fn expect_object_mut(&mut self) -> &mut BTreeMap<String, JsonValue> {
        match self {
            JsonValue::Object(members) => members,
            other => mismatch(JsonType::Object, other),
        }
    }
}

#[track_caller]
fn mismatch(expected: JsonType, actual: &JsonValue) -> ! {
    panic!(
        "type contract violated: expected {}, found {}",
        expected.name(),
        actual.json_type().name()
    );
}
