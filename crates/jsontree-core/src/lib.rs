//! # jsontree-core
//!
//! A JSON value tree with a recursive-descent parser and a formatting
//! serializer. Text parses into an owned [`JsonValue`] tree; the tree can be
//! built, queried, and mutated directly; and a [`PrintFormatter`] renders it
//! back to text under one of three whitespace modes.
//!
//! Two deliberate departures from common JSON tooling, both contracts of the
//! value model:
//!
//! - object members are kept **sorted by key** (byte-lexicographic), and a
//!   duplicate key keeps the **first** value written;
//! - numbers carry both an `i32` and an `f64` view, and serialize from the
//!   float view with six fractional digits (`1` renders as `1.000000`).
//!
//! ## Quick start
//!
//! ```rust
//! use jsontree_core::{parse, to_text, PrintFormatter};
//!
//! let value = parse(r#"{"b": 1, "a": [true, null]}"#).unwrap();
//! assert_eq!(value.get("b").unwrap().expect_i32(), 1);
//!
//! // Keys come back sorted, numbers come back fixed-point.
//! let text = to_text(&value, &PrintFormatter::default());
//! assert_eq!(text, r#"{"a":[true,null],"b":1.000000}"#);
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `JsonValue` tree and its container operations
//! - [`parser`] — text → `JsonValue`, or a structured [`ParseError`]
//! - [`printer`] — `JsonValue` → text under a `PrintFormatter`
//! - [`cast`] — checked (`as_*`) and assume-path (`expect_*`) typed access
//! - [`document`] — owning facade over a successfully parsed tree
//! - [`error`] — parse error types

pub mod cast;
pub mod document;
pub mod error;
pub mod parser;
pub mod printer;
pub mod value;

pub use document::Document;
pub use error::{ParseError, Result};
pub use parser::parse;
pub use printer::{to_text, JsonFormat, PrintFormatter};
pub use value::{JsonType, JsonValue, Number};
