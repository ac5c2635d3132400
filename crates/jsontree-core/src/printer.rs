//! Formatting serializer — renders a [`JsonValue`] tree to JSON text.
//!
//! Output is controlled by a [`PrintFormatter`] with three independent
//! knobs: the whitespace mode, a reserved indent width, and `ensure_ascii`.
//!
//! # Key design decisions
//!
//! - **Key-sorted members**: objects emit in the value model's
//!   byte-lexicographic key order, not input order.
//! - **Fixed-point numbers**: every number renders from its `f64` view with
//!   six fractional digits (`1` becomes `1.000000`). Integral values are
//!   deliberately not shortened — this is a documented contract, not a
//!   canonical-minimal-JSON emitter.
//! - **Byte-oriented escaping**: with `ensure_ascii`, a non-ASCII character
//!   escapes as one `\u00XX` per raw UTF-8 byte, not as a code-point
//!   escape. Without it, only `"`, `\`, and the short-escape control
//!   characters are rewritten.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::value::{JsonValue, Number};

/// Whitespace policy for serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// No extra whitespace: `{"a":1.000000,"b":true}`.
    #[default]
    Raw,
    /// One space after each separating comma and after each colon.
    Space,
    /// Newline after every opening delimiter and before every closing one,
    /// one tab per nesting depth, commas at line ends.
    Newline,
}

/// Serializer configuration.
///
/// `indent` is reserved for a configurable tab width; the current contract
/// is a fixed one tab per depth under [`JsonFormat::Newline`].
#[derive(Debug, Clone, Copy)]
pub struct PrintFormatter {
    pub format: JsonFormat,
    pub indent: usize,
    pub ensure_ascii: bool,
}

impl Default for PrintFormatter {
    fn default() -> Self {
        PrintFormatter {
            format: JsonFormat::Raw,
            indent: 0,
            ensure_ascii: true,
        }
    }
}

impl PrintFormatter {
    pub fn new(format: JsonFormat, indent: usize, ensure_ascii: bool) -> Self {
        PrintFormatter {
            format,
            indent,
            ensure_ascii,
        }
    }
}

/// Render `value` as JSON text under `formatter`.
pub fn to_text(value: &JsonValue, formatter: &PrintFormatter) -> String {
    let mut out = String::new();
    write_value(value, formatter, 0, &mut out);
    out
}

fn write_value(value: &JsonValue, formatter: &PrintFormatter, depth: usize, out: &mut String) {
    match value {
        JsonValue::Null => out.push_str("null"),
        JsonValue::Boolean(true) => out.push_str("true"),
        JsonValue::Boolean(false) => out.push_str("false"),
        JsonValue::Number(number) => write_number(*number, out),
        JsonValue::String(s) => write_string(s, formatter.ensure_ascii, out),
        JsonValue::Array(items) => write_array(items, formatter, depth, out),
        JsonValue::Object(members) => write_object(members, formatter, depth, out),
    }
}

fn write_number(number: Number, out: &mut String) {
    // Six fractional digits from the float view, C `%f` style.
    let _ = write!(out, "{:.6}", number.as_f64());
}

fn write_array(
    items: &[JsonValue],
    formatter: &PrintFormatter,
    depth: usize,
    out: &mut String,
) {
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if formatter.format == JsonFormat::Newline {
            out.push('\n');
            push_tabs(out, depth + 1);
        }
        write_value(item, formatter, depth + 1, out);
        if i + 1 < items.len() {
            out.push(',');
            if formatter.format == JsonFormat::Space {
                out.push(' ');
            }
        }
    }
    // Empty containers stay `[]` with no interior whitespace in every mode.
    if formatter.format == JsonFormat::Newline && !items.is_empty() {
        out.push('\n');
        push_tabs(out, depth);
    }
    out.push(']');
}

fn write_object(
    members: &BTreeMap<String, JsonValue>,
    formatter: &PrintFormatter,
    depth: usize,
    out: &mut String,
) {
    out.push('{');
    for (i, (key, value)) in members.iter().enumerate() {
        if formatter.format == JsonFormat::Newline {
            out.push('\n');
            push_tabs(out, depth + 1);
        }
        write_string(key, formatter.ensure_ascii, out);
        out.push(':');
        if formatter.format != JsonFormat::Raw {
            out.push(' ');
        }
        write_value(value, formatter, depth + 1, out);
        if i + 1 < members.len() {
            out.push(',');
            if formatter.format == JsonFormat::Space {
                out.push(' ');
            }
        }
    }
    if formatter.format == JsonFormat::Newline && !members.is_empty() {
        out.push('\n');
        push_tabs(out, depth);
    }
    out.push('}');
}

fn write_string(s: &str, ensure_ascii: bool, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0020}'..='\u{007F}' => out.push(ch),
            c if (c as u32) < 0x20 => {
                if ensure_ascii {
                    let _ = write!(out, "\\u{:04x}", c as u32);
                } else {
                    out.push(c);
                }
            }
            c => {
                if ensure_ascii {
                    // One \u00XX per raw UTF-8 byte of the code point.
                    let mut buf = [0u8; 4];
                    for &byte in c.encode_utf8(&mut buf).as_bytes() {
                        let _ = write!(out, "\\u{:04x}", byte);
                    }
                } else {
                    out.push(c);
                }
            }
        }
    }
    out.push('"');
}

fn push_tabs(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push('\t');
    }
}
