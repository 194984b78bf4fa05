//! jsurf public API
//!
//! Streaming JSONPath surfer: bind listeners to path expressions, then
//! feed a document through and receive matching sub-trees and primitive
//! values while it parses.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

// Re-export the core surface
pub use jsurf_core::{
    Binding, BindingIndex, Collector, CurrentPosition, Dispatcher, ErrorKind, ErrorStrategy,
    FrameKind, JsonLexer, JsonPathListener, JsonProvider, LenientStrategy, ListenerError,
    ListenerResult, ParsingContext, PathCompiler, PathExpression, PathOperator, PositionFrame,
    Recovery, SerdeJsonProvider, SharedListener, StrictStrategy, SurfError, SurfResult,
    SurferBuilder, SurfingContext, TypedListener, share,
};

/// Main entry point providing static builder shorthands
pub struct Surfer;

impl Surfer {
    /// Create a builder over the default serde_json provider
    ///
    /// Shorthand for `SurferBuilder::new()`
    #[must_use]
    pub fn builder() -> SurferBuilder {
        SurferBuilder::new()
    }

    /// Create a builder over a custom value provider
    ///
    /// Shorthand for `SurferBuilder::with_provider(provider)`
    #[must_use]
    pub fn with_provider<P: JsonProvider>(provider: P) -> SurferBuilder<P> {
        SurferBuilder::with_provider(provider)
    }
}

/// Create a builder over the default serde_json provider
///
/// Shorthand for `SurferBuilder::new()`
#[must_use]
pub fn builder() -> SurferBuilder {
    SurferBuilder::new()
}

/// Feed a complete JSON document through `context` with the bundled
/// lexer.
///
/// # Errors
///
/// `InvalidJson` for malformed text, plus whatever fatal errors the
/// context's error strategy surfaces.
pub fn surf<P: JsonProvider>(json: &str, context: &mut SurfingContext<P>) -> SurfResult<()> {
    JsonLexer::new(json).surf(context)
}
