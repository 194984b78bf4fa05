//! One-shot JSON text reader
//!
//! Walks a complete UTF-8 document and drives a surfing context through
//! the SAX event contract. Primitive values are built through the
//! context's provider. Once the context reports stopped, the walk is
//! abandoned; remaining events would be no-ops anyway.

use crate::context::SurfingContext;
use crate::error::{SurfError, SurfResult};
use crate::provider::JsonProvider;

use super::{numbers, strings};

/// Recursive-descent reader producing SAX events from JSON text
pub struct JsonLexer<'a> {
    pub(super) bytes: &'a [u8],
    pub(super) pos: usize,
}

impl<'a> JsonLexer<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    /// Feed the whole document through `context`.
    ///
    /// # Errors
    ///
    /// `InvalidJson` for malformed text, plus whatever fatal errors the
    /// context's error strategy surfaces.
    pub fn surf<P: JsonProvider>(mut self, context: &mut SurfingContext<P>) -> SurfResult<()> {
        context.start_json()?;
        self.skip_whitespace();
        self.parse_value(context)?;
        self.skip_whitespace();
        if self.pos < self.bytes.len() && !context.is_stopped() {
            return Err(SurfError::invalid_json(
                "trailing characters after document",
                Some(self.pos),
            ));
        }
        context.end_json()
    }

    fn parse_value<P: JsonProvider>(&mut self, context: &mut SurfingContext<P>) -> SurfResult<()> {
        if context.is_stopped() {
            return Ok(());
        }
        match self.peek() {
            None => Err(SurfError::unexpected_end_of_input(self.pos)),
            Some(b'{') => self.parse_object(context),
            Some(b'[') => self.parse_array(context),
            Some(b'"') => {
                let text = strings::parse_string(self)?;
                let value = context.provider().primitive_string(&text);
                context.primitive(value)
            }
            Some(b't') => {
                self.expect_keyword("true")?;
                let value = context.provider().primitive_bool(true);
                context.primitive(value)
            }
            Some(b'f') => {
                self.expect_keyword("false")?;
                let value = context.provider().primitive_bool(false);
                context.primitive(value)
            }
            Some(b'n') => {
                self.expect_keyword("null")?;
                let value = context.provider().primitive_null();
                context.primitive(value)
            }
            Some(c) if c == b'-' || c.is_ascii_digit() => {
                let value = match numbers::parse_number(self)? {
                    numbers::NumberLiteral::Int(n) => context.provider().primitive_i64(n),
                    numbers::NumberLiteral::Float(n) => context.provider().primitive_f64(n),
                };
                context.primitive(value)
            }
            Some(other) => Err(SurfError::invalid_json(
                &format!("unexpected byte '{}'", other as char),
                Some(self.pos),
            )),
        }
    }

    fn parse_object<P: JsonProvider>(&mut self, context: &mut SurfingContext<P>) -> SurfResult<()> {
        self.pos += 1; // '{'
        context.start_object()?;
        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            return context.end_object();
        }
        loop {
            if context.is_stopped() {
                return Ok(());
            }
            if self.peek() != Some(b'"') {
                return Err(SurfError::invalid_json(
                    "expected '\"' to open an object key",
                    Some(self.pos),
                ));
            }
            let key = strings::parse_string(self)?;
            context.start_object_entry(&key)?;
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(SurfError::invalid_json(
                    "expected ':' after object key",
                    Some(self.pos),
                ));
            }
            self.pos += 1;
            self.skip_whitespace();
            self.parse_value(context)?;
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                }
                Some(b'}') => break,
                Some(other) => {
                    return Err(SurfError::invalid_json(
                        &format!("expected ',' or '}}', found '{}'", other as char),
                        Some(self.pos),
                    ));
                }
                None => return Err(SurfError::unexpected_end_of_input(self.pos)),
            }
        }
        self.pos += 1; // '}'
        context.end_object()
    }

    fn parse_array<P: JsonProvider>(&mut self, context: &mut SurfingContext<P>) -> SurfResult<()> {
        self.pos += 1; // '['
        context.start_array()?;
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return context.end_array();
        }
        loop {
            if context.is_stopped() {
                return Ok(());
            }
            self.parse_value(context)?;
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                }
                Some(b']') => break,
                Some(other) => {
                    return Err(SurfError::invalid_json(
                        &format!("expected ',' or ']', found '{}'", other as char),
                        Some(self.pos),
                    ));
                }
                None => return Err(SurfError::unexpected_end_of_input(self.pos)),
            }
        }
        self.pos += 1; // ']'
        context.end_array()
    }

    fn expect_keyword(&mut self, keyword: &str) -> SurfResult<()> {
        let end = self.pos + keyword.len();
        if self.bytes.get(self.pos..end) == Some(keyword.as_bytes()) {
            self.pos = end;
            Ok(())
        } else {
            Err(SurfError::invalid_json(
                &format!("expected keyword '{keyword}'"),
                Some(self.pos),
            ))
        }
    }

    #[inline]
    pub(super) fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    pub(super) fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }
}
