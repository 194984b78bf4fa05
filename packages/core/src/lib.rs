//! Streaming JSONPath matcher core
//!
//! Dispatches matching sub-trees and primitive values to registered
//! listeners while a JSON document is being parsed; no full in-memory
//! tree is ever required. The matcher consumes SAX-style events, so any
//! event source fits; a one-shot text lexer is bundled.
//!
//! # Examples
//!
//! ```rust
//! use jsurf_core::{JsonLexer, SurferBuilder};
//!
//! let mut builder = SurferBuilder::new();
//! builder.bind_fn("$.store.book[0].title", |value, _ctx| {
//!     println!("first title: {value}");
//!     Ok(())
//! })?;
//! let mut context = builder.build()?;
//! JsonLexer::new(r#"{"store":{"book":[{"title":"Sayings"}]}}"#).surf(&mut context)?;
//! # Ok::<(), jsurf_core::SurfError>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod binding;
pub mod collector;
pub mod context;
pub mod error;
pub mod lexer;
pub mod path;
pub mod provider;

pub use self::{
    binding::{
        Binding, BindingIndex, JsonPathListener, ListenerError, ListenerResult, SharedListener,
        TypedListener, share,
    },
    collector::{Collector, Dispatcher},
    context::{ParsingContext, SurferBuilder, SurfingContext},
    error::{ErrorKind, ErrorStrategy, LenientStrategy, Recovery, StrictStrategy, SurfError,
        SurfResult},
    lexer::JsonLexer,
    path::{CurrentPosition, FrameKind, PathCompiler, PathExpression, PathOperator, PositionFrame},
};
pub use self::provider::{JsonProvider, SerdeJsonProvider};
