//! String literal scanning with full escape handling

use crate::error::{SurfError, SurfResult};

use super::core::JsonLexer;

/// Consume a quoted string starting at the opening `"`; returns the
/// unescaped text.
pub(super) fn parse_string(lexer: &mut JsonLexer<'_>) -> SurfResult<String> {
    lexer.pos += 1; // opening '"'
    let mut out = String::new();
    let mut run_start = lexer.pos;
    loop {
        match lexer.peek() {
            None => return Err(SurfError::invalid_json("unterminated string", Some(lexer.pos))),
            Some(b'"') => {
                push_run(lexer, run_start, &mut out)?;
                lexer.pos += 1;
                return Ok(out);
            }
            Some(b'\\') => {
                push_run(lexer, run_start, &mut out)?;
                lexer.pos += 1;
                parse_escape(lexer, &mut out)?;
                run_start = lexer.pos;
            }
            Some(c) if c < 0x20 => {
                return Err(SurfError::invalid_json(
                    "unescaped control character in string",
                    Some(lexer.pos),
                ));
            }
            Some(_) => lexer.pos += 1,
        }
    }
}

/// Append the pending raw byte run `[run_start, lexer.pos)` to `out`
fn push_run(lexer: &JsonLexer<'_>, run_start: usize, out: &mut String) -> SurfResult<()> {
    if run_start == lexer.pos {
        return Ok(());
    }
    let run = &lexer.bytes[run_start..lexer.pos];
    let text = std::str::from_utf8(run)
        .map_err(|_| SurfError::invalid_json("invalid UTF-8 sequence in string", Some(run_start)))?;
    out.push_str(text);
    Ok(())
}

fn parse_escape(lexer: &mut JsonLexer<'_>, out: &mut String) -> SurfResult<()> {
    let escaped = lexer
        .peek()
        .ok_or_else(|| SurfError::unexpected_end_of_input(lexer.pos))?;
    lexer.pos += 1;
    match escaped {
        b'"' => out.push('"'),
        b'\\' => out.push('\\'),
        b'/' => out.push('/'),
        b'b' => out.push('\u{0008}'),
        b'f' => out.push('\u{000C}'),
        b'n' => out.push('\n'),
        b'r' => out.push('\r'),
        b't' => out.push('\t'),
        b'u' => {
            let unit = parse_hex_unit(lexer)?;
            if (0xD800..=0xDBFF).contains(&unit) {
                // high surrogate: a \uXXXX low surrogate must follow
                if lexer.peek() != Some(b'\\') {
                    return Err(SurfError::invalid_json(
                        "unpaired surrogate escape",
                        Some(lexer.pos),
                    ));
                }
                lexer.pos += 1;
                if lexer.peek() != Some(b'u') {
                    return Err(SurfError::invalid_json(
                        "unpaired surrogate escape",
                        Some(lexer.pos),
                    ));
                }
                lexer.pos += 1;
                let low = parse_hex_unit(lexer)?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(SurfError::invalid_json(
                        "invalid low surrogate escape",
                        Some(lexer.pos),
                    ));
                }
                let combined =
                    0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                let decoded = char::from_u32(combined).ok_or_else(|| {
                    SurfError::invalid_json("invalid surrogate pair", Some(lexer.pos))
                })?;
                out.push(decoded);
            } else if (0xDC00..=0xDFFF).contains(&unit) {
                return Err(SurfError::invalid_json(
                    "unexpected low surrogate escape",
                    Some(lexer.pos),
                ));
            } else {
                let decoded = char::from_u32(u32::from(unit)).ok_or_else(|| {
                    SurfError::invalid_json("invalid unicode escape", Some(lexer.pos))
                })?;
                out.push(decoded);
            }
        }
        other => {
            return Err(SurfError::invalid_json(
                &format!("invalid escape character '{}'", other as char),
                Some(lexer.pos - 1),
            ));
        }
    }
    Ok(())
}

fn parse_hex_unit(lexer: &mut JsonLexer<'_>) -> SurfResult<u16> {
    let end = lexer.pos + 4;
    let digits = lexer
        .bytes
        .get(lexer.pos..end)
        .ok_or_else(|| SurfError::unexpected_end_of_input(lexer.pos))?;
    let text = std::str::from_utf8(digits)
        .map_err(|_| SurfError::invalid_json("invalid unicode escape", Some(lexer.pos)))?;
    let unit = u16::from_str_radix(text, 16)
        .map_err(|_| SurfError::invalid_json("invalid unicode escape", Some(lexer.pos)))?;
    lexer.pos = end;
    Ok(unit)
}
