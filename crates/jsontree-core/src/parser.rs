//! Recursive-descent JSON parser.
//!
//! A [`Parser`] walks the raw input bytes with a cursor and one byte of
//! lookahead; each grammar production is one method, and nothing backtracks
//! past the production currently open. Errors are reported as values
//! carrying the byte offset of the violation — no partial tree ever
//! escapes, and ordinary syntax errors never panic.
//!
//! # Key design decisions
//!
//! - **Duplicate keys keep the first value**: a later duplicate is still
//!   fully parsed (so the document must be syntactically valid), then
//!   dropped. This matches the value model's first-write-wins insertion.
//! - **Whole-input consumption**: a complete value followed by trailing
//!   non-whitespace is an error, not a success with leftovers.
//! - **Dual-view numbers**: an integer literal in `i32` range populates the
//!   integer view exactly; everything else goes through `f64` with the
//!   integer view derived by truncation.

use std::collections::BTreeMap;

use crate::error::{ParseError, Result};
use crate::value::{JsonValue, Number};

/// Parse a complete JSON document into a value tree.
///
/// The whole input must be consumed: leading/trailing whitespace is fine,
/// trailing non-whitespace after the first value is
/// [`ParseError::TrailingCharacters`].
pub fn parse(text: &str) -> Result<JsonValue> {
    let mut parser = Parser::new(text);
    parser.skip_whitespace();
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if !parser.at_end() {
        return Err(ParseError::TrailingCharacters { offset: parser.pos });
    }
    Ok(value)
}

struct Parser<'a> {
    text: &'a str,
    input: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Parser {
            text,
            input: text.as_bytes(),
            pos: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let byte = self.peek();
        if byte.is_some() {
            self.pos += 1;
        }
        byte
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    fn expect(&mut self, want: u8) -> Result<()> {
        match self.peek() {
            Some(found) if found == want => {
                self.pos += 1;
                Ok(())
            }
            Some(found) => Err(ParseError::UnexpectedByte {
                found,
                offset: self.pos,
            }),
            None => Err(ParseError::UnexpectedEof { offset: self.pos }),
        }
    }

    /// `value := object | array | string | number | "true" | "false" | "null"`
    fn parse_value(&mut self) -> Result<JsonValue> {
        match self.peek() {
            Some(b'{') => self.parse_object(),
            Some(b'[') => self.parse_array(),
            Some(b'"') => self.parse_string().map(JsonValue::String),
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            Some(b't') => self.parse_keyword("true", JsonValue::Boolean(true)),
            Some(b'f') => self.parse_keyword("false", JsonValue::Boolean(false)),
            Some(b'n') => self.parse_keyword("null", JsonValue::Null),
            Some(found) => Err(ParseError::UnexpectedByte {
                found,
                offset: self.pos,
            }),
            None => Err(ParseError::UnexpectedEof { offset: self.pos }),
        }
    }

    fn parse_keyword(&mut self, word: &'static str, value: JsonValue) -> Result<JsonValue> {
        for (i, &want) in word.as_bytes().iter().enumerate() {
            match self.input.get(self.pos + i) {
                Some(&found) if found == want => {}
                Some(&found) => {
                    return Err(ParseError::UnexpectedByte {
                        found,
                        offset: self.pos + i,
                    })
                }
                None => {
                    return Err(ParseError::UnexpectedEof {
                        offset: self.input.len(),
                    })
                }
            }
        }
        self.pos += word.len();
        Ok(value)
    }

    /// `object := '{' (string ':' value (',' string ':' value)*)? '}'`
    fn parse_object(&mut self) -> Result<JsonValue> {
        self.expect(b'{')?;
        let mut members = BTreeMap::new();
        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            return Ok(JsonValue::Object(members));
        }
        loop {
            self.skip_whitespace();
            let key = self.parse_string()?;
            self.skip_whitespace();
            self.expect(b':')?;
            self.skip_whitespace();
            let value = self.parse_value()?;
            // First write wins: a duplicate key is syntax-checked above,
            // then discarded here.
            members.entry(key).or_insert(value);
            self.skip_whitespace();
            match self.bump() {
                Some(b',') => continue,
                Some(b'}') => return Ok(JsonValue::Object(members)),
                Some(found) => {
                    return Err(ParseError::UnexpectedByte {
                        found,
                        offset: self.pos - 1,
                    })
                }
                None => return Err(ParseError::UnexpectedEof { offset: self.pos }),
            }
        }
    }

    /// `array := '[' (value (',' value)*)? ']'`
    fn parse_array(&mut self) -> Result<JsonValue> {
        self.expect(b'[')?;
        let mut items = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(JsonValue::Array(items));
        }
        loop {
            self.skip_whitespace();
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.bump() {
                Some(b',') => continue,
                Some(b']') => return Ok(JsonValue::Array(items)),
                Some(found) => {
                    return Err(ParseError::UnexpectedByte {
                        found,
                        offset: self.pos - 1,
                    })
                }
                None => return Err(ParseError::UnexpectedEof { offset: self.pos }),
            }
        }
    }

    /// `string := '"' char* '"'` where `char` is any byte >= 0x20 except
    /// `"` and `\`, or an escape sequence. Multi-byte UTF-8 sequences pass
    /// through; raw control bytes are an error.
    fn parse_string(&mut self) -> Result<String> {
        self.expect(b'"')?;
        let mut out = String::new();
        loop {
            let offset = self.pos;
            match self.bump() {
                None => return Err(ParseError::UnexpectedEof { offset }),
                Some(b'"') => return Ok(out),
                Some(b'\\') => self.parse_escape(&mut out)?,
                Some(byte) if byte < 0x20 => {
                    return Err(ParseError::ControlCharacter { offset })
                }
                Some(byte) if byte < 0x80 => out.push(byte as char),
                Some(lead) => {
                    // Lead byte of a multi-byte sequence. The input is a
                    // `&str`, so the full sequence is valid UTF-8.
                    let end = offset + utf8_len(lead);
                    out.push_str(&self.text[offset..end]);
                    self.pos = end;
                }
            }
        }
    }

    fn parse_escape(&mut self, out: &mut String) -> Result<()> {
        // self.pos - 1 is the backslash
        let offset = self.pos - 1;
        match self.bump() {
            None => Err(ParseError::UnexpectedEof { offset: self.pos }),
            Some(b'"') => {
                out.push('"');
                Ok(())
            }
            Some(b'\\') => {
                out.push('\\');
                Ok(())
            }
            Some(b'/') => {
                out.push('/');
                Ok(())
            }
            Some(b'b') => {
                out.push('\u{0008}');
                Ok(())
            }
            Some(b'f') => {
                out.push('\u{000C}');
                Ok(())
            }
            Some(b'n') => {
                out.push('\n');
                Ok(())
            }
            Some(b'r') => {
                out.push('\r');
                Ok(())
            }
            Some(b't') => {
                out.push('\t');
                Ok(())
            }
            Some(b'u') => self.parse_unicode_escape(offset, out),
            Some(_) => Err(ParseError::InvalidEscape { offset }),
        }
    }

    /// `\u` + 4 hex digits, one UTF-16 code unit. A high surrogate must be
    /// followed by a `\uXXXX` low surrogate; anything unpaired is an error.
    fn parse_unicode_escape(&mut self, offset: usize, out: &mut String) -> Result<()> {
        let first = u32::from(self.parse_hex4()?);
        let code = if (0xD800..0xDC00).contains(&first) {
            if self.bump() != Some(b'\\') || self.bump() != Some(b'u') {
                return Err(ParseError::UnpairedSurrogate { offset });
            }
            let second = u32::from(self.parse_hex4()?);
            if !(0xDC00..0xE000).contains(&second) {
                return Err(ParseError::UnpairedSurrogate { offset });
            }
            0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00)
        } else if (0xDC00..0xE000).contains(&first) {
            return Err(ParseError::UnpairedSurrogate { offset });
        } else {
            first
        };
        // Surrogates are excluded above, so the code point is always valid.
        match char::from_u32(code) {
            Some(c) => {
                out.push(c);
                Ok(())
            }
            None => Err(ParseError::InvalidEscape { offset }),
        }
    }

    fn parse_hex4(&mut self) -> Result<u16> {
        let mut value: u16 = 0;
        for _ in 0..4 {
            let offset = self.pos;
            let byte = self
                .bump()
                .ok_or(ParseError::UnexpectedEof { offset })?;
            let digit = (byte as char)
                .to_digit(16)
                .ok_or(ParseError::InvalidEscape { offset })?;
            value = value * 16 + digit as u16;
        }
        Ok(value)
    }

    /// `number := '-'? digits ('.' digits)? (('e'|'E') ('+'|'-')? digits)?`
    ///
    /// The validated literal is parsed once; a plain integer literal in
    /// `i32` range fills the integer view exactly, everything else derives
    /// it by truncation from the `f64` view.
    fn parse_number(&mut self) -> Result<JsonValue> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        self.digits()?;
        let mut integral = true;
        if self.peek() == Some(b'.') {
            integral = false;
            self.pos += 1;
            self.digits()?;
        }
        if let Some(b'e' | b'E') = self.peek() {
            integral = false;
            self.pos += 1;
            if let Some(b'+' | b'-') = self.peek() {
                self.pos += 1;
            }
            self.digits()?;
        }
        let literal = &self.text[start..self.pos];
        let number = if integral {
            match literal.parse::<i32>() {
                Ok(int) => Number::from_i32(int),
                // Integer literal outside i32 range: keep the float view,
                // let the integer view saturate.
                Err(_) => Number::from_f64(
                    literal
                        .parse::<f64>()
                        .map_err(|_| ParseError::InvalidNumber { offset: start })?,
                ),
            }
        } else {
            Number::from_f64(
                literal
                    .parse::<f64>()
                    .map_err(|_| ParseError::InvalidNumber { offset: start })?,
            )
        };
        Ok(JsonValue::Number(number))
    }

    /// At least one decimal digit.
    fn digits(&mut self) -> Result<()> {
        let offset = self.pos;
        while let Some(b'0'..=b'9') = self.peek() {
            self.pos += 1;
        }
        if self.pos == offset {
            return Err(ParseError::InvalidNumber { offset });
        }
        Ok(())
    }
}

/// Length in bytes of the UTF-8 sequence starting with `lead`.
fn utf8_len(lead: u8) -> usize {
    if lead >= 0xF0 {
        4
    } else if lead >= 0xE0 {
        3
    } else {
        2
    }
}
