//! Listener-visible parsing state
//!
//! What a listener observes while the document is in flight: the live
//! position and the latched stop flag. Handed to every `on_value` call
//! by mutable reference on the parsing thread.

use crate::path::CurrentPosition;

/// Live parsing state exposed to listeners
#[derive(Debug, Default)]
pub struct ParsingContext {
    position: CurrentPosition,
    stopped: bool,
}

impl ParsingContext {
    pub(crate) fn new() -> Self {
        Self {
            position: CurrentPosition::new(),
            stopped: false,
        }
    }

    /// Canonical string form of the current position
    #[must_use]
    pub fn json_path(&self) -> String {
        self.position.json_path()
    }

    /// Current object key if the innermost frame is an entry
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.position.key()
    }

    /// Latch the stop flag; every subsequent event becomes a no-op.
    /// Calling this more than once has the same effect as once.
    pub fn stop_parsing(&mut self) {
        if !self.stopped {
            log::debug!("surf stopped at {}", self.json_path());
        }
        self.stopped = true;
    }

    #[inline]
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[inline]
    pub(crate) fn position(&self) -> &CurrentPosition {
        &self.position
    }

    #[inline]
    pub(crate) fn position_mut(&mut self) -> &mut CurrentPosition {
        &mut self.position
    }
}
