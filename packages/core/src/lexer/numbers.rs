//! Number literal scanning

use crate::error::{SurfError, SurfResult};

use super::core::JsonLexer;

/// Scanned number literal; integers that fit i64 stay integral
pub(super) enum NumberLiteral {
    Int(i64),
    Float(f64),
}

pub(super) fn parse_number(lexer: &mut JsonLexer<'_>) -> SurfResult<NumberLiteral> {
    let start = lexer.pos;
    if lexer.peek() == Some(b'-') {
        lexer.pos += 1;
    }
    let mut integral = true;
    while let Some(c) = lexer.peek() {
        match c {
            b'0'..=b'9' => lexer.pos += 1,
            b'.' | b'e' | b'E' | b'+' | b'-' => {
                integral = false;
                lexer.pos += 1;
            }
            _ => break,
        }
    }
    let run = &lexer.bytes[start..lexer.pos];
    let text = std::str::from_utf8(run)
        .map_err(|_| SurfError::invalid_json("invalid number format", Some(start)))?;
    if integral {
        if let Ok(n) = text.parse::<i64>() {
            return Ok(NumberLiteral::Int(n));
        }
        // fall through for magnitudes beyond i64
    }
    text.parse::<f64>()
        .map(NumberLiteral::Float)
        .map_err(|_| SurfError::invalid_json("invalid number format", Some(start)))
}
