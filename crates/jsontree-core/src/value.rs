//! The JSON value tree.
//!
//! [`JsonValue`] is a closed sum over the six JSON types. Containers own
//! their children outright (`Vec` / `BTreeMap`, no shared pointers), so
//! `Clone` is a structural deep copy and cycles are impossible by
//! construction.
//!
//! # Key design decisions
//!
//! - **Key-sorted objects**: members live in a `BTreeMap<String, _>`, so
//!   iteration (and serialized output) is byte-lexicographic by key. This is
//!   a contract, not an accident of data structure.
//! - **First-write-wins insertion**: [`JsonValue::add`] is a no-op when the
//!   key already exists, matching the parser's duplicate-key policy.
//! - **Dual-view numbers**: every [`Number`] carries both an `i32` and an
//!   `f64` view so consumers can read either without re-parsing.

use std::collections::BTreeMap;

/// Variant discriminator of a [`JsonValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsonType {
    /// Human-readable tag name, used in contract-violation panics.
    pub fn name(self) -> &'static str {
        match self {
            JsonType::Null => "Null",
            JsonType::Boolean => "Boolean",
            JsonType::Number => "Number",
            JsonType::String => "String",
            JsonType::Array => "Array",
            JsonType::Object => "Object",
        }
    }
}

/// A JSON number holding both an integer and a floating view.
///
/// Both views are always populated. Constructing from an `f64` derives the
/// integer view by truncation toward zero; NaN and values outside the `i32`
/// range follow Rust's saturating float-to-int cast — a deterministic,
/// documented narrowing, not undefined behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number {
    int: i32,
    float: f64,
}

impl Number {
    /// Number from an integer literal; the float view is derived exactly.
    pub fn from_i32(value: i32) -> Self {
        Number {
            int: value,
            float: f64::from(value),
        }
    }

    /// Number from a floating literal; the integer view truncates toward
    /// zero (saturating at the `i32` bounds, NaN maps to 0).
    pub fn from_f64(value: f64) -> Self {
        Number {
            int: value as i32,
            float: value,
        }
    }

    /// The integer view.
    pub fn as_i32(self) -> i32 {
        self.int
    }

    /// The floating view.
    pub fn as_f64(self) -> f64 {
        self.float
    }
}

/// One JSON node: Null, Boolean, Number, String, Array, or Object.
///
/// The variant tag is fixed at construction. `Clone` deep-copies the whole
/// subtree; mutating a clone never affects the source.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Boolean(bool),
    Number(Number),
    String(String),
    /// Ordered sequence of owned children; order is significant.
    Array(Vec<JsonValue>),
    /// Members keyed by string, iterated in byte-lexicographic key order.
    Object(BTreeMap<String, JsonValue>),
}

impl JsonValue {
    /// The variant tag. O(1), never fails.
    pub fn json_type(&self) -> JsonType {
        match self {
            JsonValue::Null => JsonType::Null,
            JsonValue::Boolean(_) => JsonType::Boolean,
            JsonValue::Number(_) => JsonType::Number,
            JsonValue::String(_) => JsonType::String,
            JsonValue::Array(_) => JsonType::Array,
            JsonValue::Object(_) => JsonType::Object,
        }
    }

    /// True iff the tag is Null, Boolean, Number, or String.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self.json_type(),
            JsonType::Null | JsonType::Boolean | JsonType::Number | JsonType::String
        )
    }

    /// True iff the tag is Array or Object. Complements [`is_scalar`]:
    /// the two predicates partition all tags.
    ///
    /// [`is_scalar`]: JsonValue::is_scalar
    pub fn is_iterable(&self) -> bool {
        !self.is_scalar()
    }

    /// An empty array.
    pub fn new_array() -> Self {
        JsonValue::Array(Vec::new())
    }

    /// An empty object.
    pub fn new_object() -> Self {
        JsonValue::Object(BTreeMap::new())
    }

    /// Appends a value to an array, preserving order.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not an Array (contract violation).
    pub fn push(&mut self, value: impl Into<JsonValue>) {
        self.expect_array_mut().push(value.into());
    }

    /// Inserts `(key, value)` into an object. **First-write-wins**: when the
    /// key is already present this is a no-op and the existing value stays.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not an Object (contract violation).
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) {
        self.expect_object_mut()
            .entry(key.into())
            .or_insert_with(|| value.into());
    }

    /// Removes an object member if present; no-op otherwise.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not an Object (contract violation).
    pub fn del(&mut self, key: &str) {
        self.expect_object_mut().remove(key);
    }

    /// Looks up an object member. Returns `None` when `self` is not an
    /// Object or the key is absent.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.as_object().and_then(|members| members.get(key))
    }

    /// Mutable member lookup. Returns `None` when `self` is not an Object
    /// or the key is absent.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut JsonValue> {
        self.as_object_mut().and_then(|members| members.get_mut(key))
    }
}

impl From<()> for JsonValue {
    fn from(_: ()) -> Self {
        JsonValue::Null
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Boolean(value)
    }
}

impl From<i32> for JsonValue {
    fn from(value: i32) -> Self {
        JsonValue::Number(Number::from_i32(value))
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::Number(Number::from_f64(value))
    }
}

impl From<Number> for JsonValue {
    fn from(value: Number) -> Self {
        JsonValue::Number(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(items: Vec<JsonValue>) -> Self {
        JsonValue::Array(items)
    }
}

impl From<BTreeMap<String, JsonValue>> for JsonValue {
    fn from(members: BTreeMap<String, JsonValue>) -> Self {
        JsonValue::Object(members)
    }
}
