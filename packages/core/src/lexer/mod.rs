//! Bundled SAX event source
//!
//! The matching core only depends on the event contract; this module is
//! the default backend for feeding it from JSON text.

pub mod core;
mod numbers;
mod strings;

pub use self::core::JsonLexer;
