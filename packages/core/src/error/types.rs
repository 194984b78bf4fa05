//! Core error types for JSON surfing
//!
//! Error kinds cover builder misuse, unsupported path syntax, and
//! listener/provider failures routed through the error strategy.

use std::error::Error;
use std::fmt;

/// JSON surfing error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Mutating a builder after `build()` froze it
    BuilderFrozen,
    /// Path syntax outside the supported operator set (filters, unions, ...)
    UnsupportedPathOperator,
    /// A listener raised during `on_value`
    ListenerFailure,
    /// The value provider failed (e.g. type cast)
    ProviderFailure,
    /// Invalid JSONPath expression
    InvalidPath,
    /// Invalid JSON document text
    InvalidJson,
}

/// Main JSON surfing error type
#[derive(Debug, Clone)]
pub struct SurfError {
    pub kind: ErrorKind,
    pub message: String,
}

impl fmt::Display for SurfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JSON surfing error: {}", self.message)
    }
}

impl Error for SurfError {}

/// Result type for JSON surfing operations
pub type SurfResult<T> = Result<T, SurfError>;

impl SurfError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }

    pub fn builder_frozen(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::BuilderFrozen, msg.into())
    }

    pub fn unsupported_path_operator(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedPathOperator, msg.into())
    }

    pub fn listener_failure(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::ListenerFailure, msg.into())
    }

    pub fn provider_failure(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::ProviderFailure, msg.into())
    }

    /// Invalid expression error with optional character position
    #[must_use]
    pub fn invalid_path(expression: &str, msg: &str, position: Option<usize>) -> Self {
        let message = match position {
            Some(pos) => format!("{msg} at position {pos} in '{expression}'"),
            None => format!("{msg} in '{expression}'"),
        };
        Self::new(ErrorKind::InvalidPath, message)
    }

    /// Invalid document error with optional byte offset
    #[must_use]
    pub fn invalid_json(msg: &str, offset: Option<usize>) -> Self {
        let message = match offset {
            Some(pos) => format!("{msg} at offset {pos}"),
            None => msg.to_string(),
        };
        Self::new(ErrorKind::InvalidJson, message)
    }

    #[must_use]
    pub fn unexpected_end_of_input(offset: usize) -> Self {
        Self::invalid_json("unexpected end of input", Some(offset))
    }
}
