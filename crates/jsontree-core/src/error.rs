//! Error types for JSON parsing.

use thiserror::Error;

/// Errors produced while parsing JSON text.
///
/// Every variant carries the 0-based byte offset into the input at which the
/// violation was detected. A failed parse never yields a partial tree.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input ended while a value, string, or container was still open
    /// (or the input was empty where a value was required).
    #[error("unexpected end of input at byte {offset}")]
    UnexpectedEof { offset: usize },

    /// A byte that no grammar production accepts at this position.
    #[error("unexpected byte {found:#04x} at byte {offset}")]
    UnexpectedByte { found: u8, offset: usize },

    /// A complete value was parsed but non-whitespace input remained.
    #[error("trailing characters after value at byte {offset}")]
    TrailingCharacters { offset: usize },

    /// A string contained a raw control byte (< 0x20) that must be escaped.
    #[error("unescaped control character in string at byte {offset}")]
    ControlCharacter { offset: usize },

    /// A backslash escape was not one of `\" \\ \/ \b \f \n \r \t \uXXXX`.
    #[error("invalid escape sequence at byte {offset}")]
    InvalidEscape { offset: usize },

    /// A `\u` escape decoded to an unpaired UTF-16 surrogate.
    #[error("unpaired surrogate in \\u escape at byte {offset}")]
    UnpairedSurrogate { offset: usize },

    /// A number literal did not match the JSON number grammar.
    #[error("malformed number at byte {offset}")]
    InvalidNumber { offset: usize },
}

impl ParseError {
    /// Byte offset into the input where the error was detected.
    pub fn offset(&self) -> usize {
        match *self {
            ParseError::UnexpectedEof { offset }
            | ParseError::UnexpectedByte { offset, .. }
            | ParseError::TrailingCharacters { offset }
            | ParseError::ControlCharacter { offset }
            | ParseError::InvalidEscape { offset }
            | ParseError::UnpairedSurrogate { offset }
            | ParseError::InvalidNumber { offset } => offset,
        }
    }
}

/// Convenience alias used throughout jsontree-core.
pub type Result<T> = std::result::Result<T, ParseError>;
