//! Error types and recovery strategies

pub mod strategy;
pub mod types;

pub use strategy::{ErrorStrategy, LenientStrategy, Recovery, StrictStrategy};
pub use types::{ErrorKind, SurfError, SurfResult};
