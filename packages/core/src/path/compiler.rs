//! JSONPath expression compiler
//!
//! Compiles the textual dot-and-bracket notation into the operator chain
//! consumed by the matcher. Syntax outside the supported operator set
//! (filter expressions, unions, negative indices, slice steps) is
//! rejected with a dedicated error kind so callers can distinguish
//! "malformed" from "not supported here".

use crate::error::{SurfError, SurfResult};

use super::expression::PathExpression;
use super::operator::PathOperator;

/// JSONPath expression parser and compiler
pub struct PathCompiler;

impl PathCompiler {
    /// Compile a JSONPath expression into an operator chain.
    ///
    /// # Arguments
    ///
    /// * `expression` - JSONPath expression string (e.g. `$.store.book[0]`,
    ///   `$..author`, `$.items[1:4]`)
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` for syntax errors and
    /// `UnsupportedPathOperator` for valid JSONPath constructs outside
    /// the supported operator set.
    pub fn compile(expression: &str) -> SurfResult<PathExpression> {
        if expression.is_empty() {
            return Err(SurfError::invalid_path(
                expression,
                "empty expression not allowed",
                Some(0),
            ));
        }
        if !expression.starts_with('$') {
            return Err(SurfError::invalid_path(
                expression,
                "JSONPath expressions must start with '$'",
                Some(0),
            ));
        }

        let chars: Vec<char> = expression.chars().collect();
        let mut operators = vec![PathOperator::Root];
        let mut i = 1;
        while i < chars.len() {
            match chars[i] {
                '.' if i + 1 < chars.len() && chars[i + 1] == '.' => {
                    operators.push(PathOperator::DeepScan);
                    i += 2;
                    if i >= chars.len() {
                        return Err(SurfError::invalid_path(
                            expression,
                            "descendant segment '..' must be followed by a name, '*' or bracket",
                            Some(i - 2),
                        ));
                    }
                    match chars[i] {
                        '[' => {} // bracket segment handled on the next pass
                        '*' => {
                            operators.push(PathOperator::Wildcard);
                            i += 1;
                        }
                        _ => {
                            i = Self::parse_name(expression, &chars, i, &mut operators)?;
                        }
                    }
                }
                '.' => {
                    i += 1;
                    if i >= chars.len() {
                        return Err(SurfError::invalid_path(
                            expression,
                            "incomplete property access (ends with '.')",
                            Some(i - 1),
                        ));
                    }
                    if chars[i] == '*' {
                        operators.push(PathOperator::Wildcard);
                        i += 1;
                    } else {
                        i = Self::parse_name(expression, &chars, i, &mut operators)?;
                    }
                }
                '[' => {
                    i = Self::parse_bracket(expression, &chars, i, &mut operators)?;
                }
                other => {
                    return Err(SurfError::invalid_path(
                        expression,
                        &format!("unexpected character '{other}'"),
                        Some(i),
                    ));
                }
            }
        }

        Ok(PathExpression::new(operators, expression.to_string()))
    }

    /// Validate expression syntax without keeping the compiled form
    pub fn validate(expression: &str) -> SurfResult<()> {
        Self::compile(expression).map(|_| ())
    }

    /// Consume a bare member name starting at `start`
    fn parse_name(
        expression: &str,
        chars: &[char],
        start: usize,
        operators: &mut Vec<PathOperator>,
    ) -> SurfResult<usize> {
        let mut end = start;
        while end < chars.len() && Self::is_name_char(chars[end]) {
            end += 1;
        }
        if end == start {
            return Err(SurfError::invalid_path(
                expression,
                "expected a member name",
                Some(start),
            ));
        }
        operators.push(PathOperator::Child {
            name: chars[start..end].iter().collect(),
        });
        Ok(end)
    }

    fn is_name_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_' || c == '-'
    }

    /// Consume one bracket segment starting at the `[` at `open`;
    /// returns the index just past the closing `]`.
    fn parse_bracket(
        expression: &str,
        chars: &[char],
        open: usize,
        operators: &mut Vec<PathOperator>,
    ) -> SurfResult<usize> {
        let mut i = open + 1;
        Self::skip_spaces(chars, &mut i);
        match chars.get(i) {
            None => Err(SurfError::unexpected_bracket_end(expression, open)),
            Some('*') => {
                i += 1;
                operators.push(PathOperator::Wildcard);
                Self::expect_close(expression, chars, i)
            }
            Some('?') => Err(SurfError::unsupported_path_operator(format!(
                "filter expressions are not supported in '{expression}'"
            ))),
            Some(quote @ ('\'' | '"')) => {
                let quote = *quote;
                i += 1;
                let start = i;
                while i < chars.len() && chars[i] != quote {
                    i += 1;
                }
                if i >= chars.len() {
                    return Err(SurfError::invalid_path(
                        expression,
                        "unterminated quoted name",
                        Some(start - 1),
                    ));
                }
                operators.push(PathOperator::Child {
                    name: chars[start..i].iter().collect(),
                });
                Self::expect_close(expression, chars, i + 1)
            }
            Some(c) if c.is_ascii_digit() || *c == '-' || *c == ':' => {
                Self::parse_index_or_slice(expression, chars, i, operators)
            }
            Some(other) => Err(SurfError::invalid_path(
                expression,
                &format!("unexpected character '{other}' in bracket segment"),
                Some(i),
            )),
        }
    }

    /// Parse `[n]`, `[lo:hi]`, `[lo:]` or `[:hi]` starting inside the bracket
    fn parse_index_or_slice(
        expression: &str,
        chars: &[char],
        start: usize,
        operators: &mut Vec<PathOperator>,
    ) -> SurfResult<usize> {
        let mut i = start;
        let lower = Self::parse_bound(expression, chars, &mut i)?;
        Self::skip_spaces(chars, &mut i);
        match chars.get(i) {
            Some(']') => {
                let index = lower.ok_or_else(|| {
                    SurfError::invalid_path(expression, "expected an array index", Some(start))
                })?;
                operators.push(PathOperator::ArrayIndex { index });
                Ok(i + 1)
            }
            Some(':') => {
                i += 1;
                Self::skip_spaces(chars, &mut i);
                let upper = Self::parse_bound(expression, chars, &mut i)?;
                Self::skip_spaces(chars, &mut i);
                match chars.get(i) {
                    Some(']') => {
                        operators.push(PathOperator::ArraySlice { lower, upper });
                        Ok(i + 1)
                    }
                    Some(':') => Err(SurfError::unsupported_path_operator(format!(
                        "slice steps are not supported in '{expression}'"
                    ))),
                    _ => Err(SurfError::unexpected_bracket_end(expression, i)),
                }
            }
            Some(',') => Err(SurfError::unsupported_path_operator(format!(
                "union selectors are not supported in '{expression}'; register one binding per index"
            ))),
            _ => Err(SurfError::unexpected_bracket_end(expression, i)),
        }
    }

    /// Parse an optional non-negative integer bound at `*i`
    fn parse_bound(
        expression: &str,
        chars: &[char],
        i: &mut usize,
    ) -> SurfResult<Option<i64>> {
        if chars.get(*i) == Some(&'-') {
            return Err(SurfError::unsupported_path_operator(format!(
                "negative array indices are not supported in '{expression}'"
            )));
        }
        let start = *i;
        while *i < chars.len() && chars[*i].is_ascii_digit() {
            *i += 1;
        }
        if *i == start {
            return Ok(None);
        }
        let digits: String = chars[start..*i].iter().collect();
        digits.parse::<i64>().map(Some).map_err(|_| {
            SurfError::invalid_path(expression, "array index out of range", Some(start))
        })
    }

    fn expect_close(expression: &str, chars: &[char], mut i: usize) -> SurfResult<usize> {
        Self::skip_spaces(chars, &mut i);
        if chars.get(i) == Some(&']') {
            Ok(i + 1)
        } else {
            Err(SurfError::unexpected_bracket_end(expression, i))
        }
    }

    fn skip_spaces(chars: &[char], i: &mut usize) {
        while chars.get(*i) == Some(&' ') {
            *i += 1;
        }
    }
}

impl SurfError {
    fn unexpected_bracket_end(expression: &str, position: usize) -> Self {
        Self::invalid_path(expression, "expected ']' to close bracket segment", Some(position))
    }
}
