//! Pluggable value builders

pub mod json_provider;
pub mod serde;

pub use json_provider::JsonProvider;
pub use serde::SerdeJsonProvider;
