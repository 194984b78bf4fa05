//! Listener-error recovery strategies
//!
//! A listener or provider failure never reaches the parser directly; the
//! installed strategy decides whether the surf continues, stops cleanly,
//! or aborts with the error.

use super::types::SurfError;

/// Decision returned by an [`ErrorStrategy`] for a listener/provider failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// Drop the error and keep surfing
    Continue,
    /// Latch the stop flag; remaining events become no-ops
    Stop,
    /// Surface the error out of the event handler
    Fatal,
}

/// Policy for listener and provider failures raised during dispatch
pub trait ErrorStrategy {
    fn recover(&self, error: &SurfError) -> Recovery;
}

/// Default strategy: every listener failure is fatal
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictStrategy;

impl ErrorStrategy for StrictStrategy {
    fn recover(&self, _error: &SurfError) -> Recovery {
        Recovery::Fatal
    }
}

/// Log the failure and keep surfing
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientStrategy;

impl ErrorStrategy for LenientStrategy {
    fn recover(&self, error: &SurfError) -> Recovery {
        log::warn!("listener error recovered: {error}");
        Recovery::Continue
    }
}
