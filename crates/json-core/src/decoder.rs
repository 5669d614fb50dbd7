//! JSON Decoder — parses ECMA-404 text into a [`Value`] tree.
//!
//! A recursive-descent reader over a byte cursor into the original input. Each
//! `parse_*` step consumes one lexical unit and leaves the cursor on the
//! unconsumed tail, so the whole document is read in a single pass without
//! re-slicing or copying the input.
//!
//! # Key design decisions
//!
//! - **Insignificant whitespace** is exactly space, `\r`, `\n` and `\t`.
//! - **Tail check**: after every value the next significant byte must be
//!   `,`, `]`, `}` or the end of input. That is how a value embedded in a
//!   container recognises its end, and it rejects things like `nullx` or
//!   `[1 2]`.
//! - **Separators are skipped, not required between the last element and the
//!   closing bracket**: `[1,]` and `{"a":1,}` are accepted.
//! - **Numbers** take the greedy run of `-0-9.eE+` after a leading `-?digit`
//!   and hand it to `f64::from_str`; a run it rejects is a syntax error.
//! - **String literals** end at the first `"` not consumed by a backslash
//!   escape, so `"a\\"` is the one-character string `a\`.
//! - **Duplicate keys**: the last value wins, the first position is kept.

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::error::{JsonError, Result};
use crate::escape;
use crate::options::ParseOptions;
use crate::types::{Members, Value};

/// Parse a complete JSON document.
///
/// The text must hold exactly one JSON value, optionally surrounded by
/// whitespace. Anything else is a [`JsonError::Syntax`] carrying the
/// unconsumed input at the point of failure.
///
/// Nesting is capped at
/// [`DEFAULT_MAX_DEPTH`](crate::options::DEFAULT_MAX_DEPTH) arrays/objects.
/// The cap is a resource limit on the recursive parser, not a grammar rule:
/// a deeper but well-formed document is also reported as a `Syntax` error
/// with reason `"nesting too deep"`. Use [`parse_with_options`] to raise or
/// lift it.
///
/// ```
/// use json_core::parse;
///
/// let value = parse(r#"{"a":{"b":3}}"#).unwrap();
/// assert_eq!(value.get_path(&["a", "b"]).unwrap().unwrap().integer().unwrap(), 3);
/// assert!(parse(r#"{"a":}"#).is_err());
/// ```
pub fn parse(text: &str) -> Result<Value> {
    parse_with_options(text, &ParseOptions::default())
}

/// Parse a complete JSON document with explicit [`ParseOptions`].
///
/// Exceeding `options.max_depth` fails with reason `"nesting too deep"`
/// even when the text is otherwise valid.
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<Value> {
    let result = Parser::new(text, options).parse_document();
    match &result {
        Ok(value) => trace!(kind = %value.kind(), bytes = text.len(), "parsed JSON document"),
        Err(err) => debug!(error = %err, bytes = text.len(), "rejected JSON document"),
    }
    result
}

/// Check that `text` is a single well-formed JSON value without keeping the tree.
pub fn validate(text: &str) -> Result<()> {
    parse(text).map(drop)
}

/// Cursor state for one parse.
struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, options: &ParseOptions) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// Top level: one value, then nothing but whitespace.
    fn parse_document(&mut self) -> Result<Value> {
        self.skip_whitespace();
        if self.at_end() {
            return Err(self.error(self.pos, "expected a value"));
        }
        let value = self.parse_value()?;
        self.skip_whitespace();
        if !self.at_end() {
            return Err(self.error(self.pos, "trailing content after value"));
        }
        Ok(value)
    }

    /// Parse one value at the cursor and verify what follows it.
    fn parse_value(&mut self) -> Result<Value> {
        self.skip_whitespace();
        let start = self.pos;
        let value = match self.peek() {
            Some(b'n') if self.eat_literal("null") => Value::Null,
            Some(b't') if self.eat_literal("true") => Value::TRUE,
            Some(b'f') if self.eat_literal("false") => Value::FALSE,
            Some(b'-' | b'0'..=b'9') => self.parse_number()?,
            Some(b'"') => {
                let text = self.parse_string_literal()?;
                Value::from(&*text)
            }
            Some(b'[') => self.parse_array()?,
            Some(b'{') => self.parse_object()?,
            _ => return Err(self.error(start, "expected a value")),
        };
        self.check_tail()?;
        Ok(value)
    }

    /// A value may only be followed by whitespace and then `,`, `]`, `}` or
    /// the end of input.
    fn check_tail(&mut self) -> Result<()> {
        let tail = self.pos;
        self.skip_whitespace();
        match self.peek() {
            None | Some(b',' | b']' | b'}') => Ok(()),
            Some(_) => Err(self.error(tail, "unexpected content after value")),
        }
    }

    fn parse_number(&mut self) -> Result<Value> {
        let start = self.pos;
        let digits_from = if self.peek() == Some(b'-') { start + 1 } else { start };
        if !self.bytes.get(digits_from).is_some_and(u8::is_ascii_digit) {
            return Err(self.error(start, "expected a value"));
        }

        let mut end = digits_from;
        while self.bytes.get(end).is_some_and(|b| is_number_byte(*b)) {
            end += 1;
        }
        let literal = &self.input[start..end];
        let number: f64 = literal
            .parse()
            .map_err(|_| self.error(start, "malformed number"))?;
        self.pos = end;
        Ok(Value::from(number))
    }

    /// Scan a quoted literal at the cursor and return its decoded contents.
    ///
    /// A backslash always consumes the byte after it, so an escaped quote never
    /// terminates the literal, however many backslashes precede it. Multi-byte
    /// UTF-8 sequences never contain `"` or `\` bytes, so byte stepping is safe.
    fn parse_string_literal(&mut self) -> Result<Cow<'a, str>> {
        let start = self.pos;
        let content_start = start + 1;
        let mut i = content_start;
        loop {
            match self.bytes.get(i) {
                None => return Err(self.error(start, "unterminated string")),
                Some(b'\\') => i += 2,
                Some(b'"') => break,
                Some(_) => i += 1,
            }
        }
        let input = self.input;
        self.pos = i + 1;
        Ok(escape::decode(&input[content_start..i]))
    }

    fn parse_array(&mut self) -> Result<Value> {
        let start = self.pos;
        self.enter(start)?;
        self.pos += 1;

        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b']') => {
                    self.pos += 1;
                    break;
                }
                None => return Err(self.error(start, "unterminated array")),
                Some(_) => {}
            }
            items.push(self.parse_value()?);
            self.skip_separator();
        }

        self.depth -= 1;
        Ok(Value::from(items))
    }

    fn parse_object(&mut self) -> Result<Value> {
        let start = self.pos;
        self.enter(start)?;
        self.pos += 1;

        let mut members = Members::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'}') => {
                    self.pos += 1;
                    break;
                }
                None => return Err(self.error(start, "unterminated object")),
                Some(_) => {}
            }
            let key = self.parse_key()?;
            let value = self.parse_value()?;
            members.insert(key, value);
            self.skip_separator();
        }

        self.depth -= 1;
        Ok(Value::from(members))
    }

    /// A member name: a string literal followed by `:`.
    fn parse_key(&mut self) -> Result<String> {
        self.skip_whitespace();
        if self.peek() != Some(b'"') {
            return Err(self.error(self.pos, "expected a string key"));
        }
        let key = self.parse_string_literal()?.into_owned();
        self.skip_whitespace();
        if self.peek() != Some(b':') {
            return Err(self.error(self.pos, "expected ':' after key"));
        }
        self.pos += 1;
        Ok(key)
    }

    fn enter(&mut self, start: usize) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(self.error(start, "nesting too deep"));
        }
        self.depth += 1;
        Ok(())
    }

    /// Step over a `,` if one follows (after whitespace).
    fn skip_separator(&mut self) {
        self.skip_whitespace();
        if self.peek() == Some(b',') {
            self.pos += 1;
        }
    }

    fn eat_literal(&mut self, literal: &str) -> bool {
        if self.bytes[self.pos..].starts_with(literal.as_bytes()) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn error(&self, offset: usize, reason: &'static str) -> JsonError {
        JsonError::syntax(self.input, offset, reason)
    }
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\r' | b'\n' | b'\t')
}

fn is_number_byte(b: u8) -> bool {
    matches!(b, b'-' | b'+' | b'.' | b'e' | b'E' | b'0'..=b'9')
}
