//! Owning facade over a successfully parsed tree.

use std::fmt;

use crate::error::Result;
use crate::parser;
use crate::printer::{self, PrintFormatter};
use crate::value::{JsonType, JsonValue};

/// A parsed JSON document.
///
/// A `Document` only ever exists for input that parsed successfully; a
/// failed parse yields `Err` and no document, so "failed to parse" can
/// never be confused with "parsed to null".
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: JsonValue,
}

impl Document {
    /// Parses `text` into a document, or fails with the parser's error.
    pub fn parse(text: &str) -> Result<Document> {
        parser::parse(text).map(|root| Document { root })
    }

    /// The root value.
    pub fn root(&self) -> &JsonValue {
        &self.root
    }

    /// Mutable root value.
    pub fn root_mut(&mut self) -> &mut JsonValue {
        &mut self.root
    }

    /// Consumes the document, returning the root value.
    pub fn into_root(self) -> JsonValue {
        self.root
    }

    /// Tag of the root value.
    pub fn json_type(&self) -> JsonType {
        self.root.json_type()
    }

    /// Renders the document under the given formatter.
    pub fn to_text(&self, formatter: &PrintFormatter) -> String {
        printer::to_text(&self.root, formatter)
    }
}

impl From<JsonValue> for Document {
    fn from(root: JsonValue) -> Self {
        Document { root }
    }
}

impl fmt::Display for Document {
    /// Raw, ASCII-safe rendering (the default formatter).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(&PrintFormatter::default()))
    }
}
