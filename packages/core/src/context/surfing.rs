//! Surfing context
//!
//! The state machine driven by the SAX event source. Each event updates
//! the live position, runs the matcher against the binding index, and
//! forwards the event to the collector stack. A context is single-use:
//! built once, consumed by one parser pass, then discarded.
//!
//! Event ordering invariants the matcher depends on:
//!
//! - an array frame's index advances before its element is matched;
//! - a collector registers before its own opening start-event is
//!   broadcast, so it captures its opening delimiter;
//! - primitive listeners are invoked before the primitive reaches the
//!   collector stack;
//! - end-object broadcasts before the entry frame pops, and end-array
//!   pops the array frame first and the entry frame last, so a
//!   completing collector observes the canonical path of its match.

use std::rc::Rc;

use crate::binding::{BindingIndex, SharedListener, listener};
use crate::collector::{Collector, Dispatcher};
use crate::error::{ErrorStrategy, SurfResult};
use crate::path::FrameKind;
use crate::provider::JsonProvider;

use super::parsing::ParsingContext;

/// Streaming matcher state machine, fed through the SAX sink methods
pub struct SurfingContext<P: JsonProvider> {
    provider: Rc<P>,
    index: BindingIndex<P::Value>,
    dispatcher: Dispatcher<P>,
    parsing: ParsingContext,
    strategy: Box<dyn ErrorStrategy>,
    skip_overlapped: bool,
}

impl<P: JsonProvider> SurfingContext<P> {
    pub(crate) fn new(
        provider: Rc<P>,
        index: BindingIndex<P::Value>,
        strategy: Box<dyn ErrorStrategy>,
        skip_overlapped: bool,
    ) -> Self {
        Self {
            provider,
            index,
            dispatcher: Dispatcher::new(),
            parsing: ParsingContext::new(),
            strategy,
            skip_overlapped,
        }
    }

    /// Value provider backing this context
    #[inline]
    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Canonical string form of the current position
    #[must_use]
    pub fn json_path(&self) -> String {
        self.parsing.json_path()
    }

    /// Current object key if the innermost frame is an entry
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.parsing.key()
    }

    /// Latch the stop flag; subsequent events become no-ops
    pub fn stop_parsing(&mut self) {
        self.parsing.stop_parsing();
    }

    #[inline]
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.parsing.is_stopped()
    }

    /// Document start: push the synthetic root frame
    pub fn start_json(&mut self) -> SurfResult<()> {
        if self.parsing.is_stopped() {
            return Ok(());
        }
        if self.parsing.position().is_empty() {
            self.parsing.position_mut().push_root();
        }
        Ok(())
    }

    /// Document end: release the position and drop all collectors.
    /// Runs even after a stop.
    pub fn end_json(&mut self) -> SurfResult<()> {
        self.parsing.position_mut().clear();
        self.dispatcher.clear();
        log::debug!("document finished");
        Ok(())
    }

    pub fn start_object(&mut self) -> SurfResult<()> {
        if self.parsing.is_stopped() {
            return Ok(());
        }
        if self.parsing.position().peek_kind() == Some(FrameKind::Array) {
            self.parsing.position_mut().accumulate_array_index();
        }
        let matched = self.do_matching(None);
        self.dispatcher.start_object(&*self.provider);
        matched
    }

    pub fn end_object(&mut self) -> SurfResult<()> {
        if self.parsing.is_stopped() {
            return Ok(());
        }
        let forwarded =
            self.dispatcher
                .end_object(&*self.provider, &mut self.parsing, &*self.strategy);
        if self.parsing.position().peek_kind() == Some(FrameKind::Object) {
            self.parsing.position_mut().step_out();
        }
        forwarded
    }

    pub fn start_object_entry(&mut self, key: &str) -> SurfResult<()> {
        if self.parsing.is_stopped() {
            return Ok(());
        }
        self.parsing.position_mut().step_into_entry(key);
        self.dispatcher.object_entry(key);
        Ok(())
    }

    pub fn start_array(&mut self) -> SurfResult<()> {
        if self.parsing.is_stopped() {
            return Ok(());
        }
        if self.parsing.position().peek_kind() == Some(FrameKind::Array) {
            self.parsing.position_mut().accumulate_array_index();
        }
        let matched = self.do_matching(None);
        self.parsing.position_mut().step_into_array();
        self.dispatcher.start_array(&*self.provider);
        matched
    }

    pub fn end_array(&mut self) -> SurfResult<()> {
        if self.parsing.is_stopped() {
            return Ok(());
        }
        if self.parsing.position().peek_kind() == Some(FrameKind::Array) {
            self.parsing.position_mut().step_out();
        }
        let forwarded =
            self.dispatcher
                .end_array(&*self.provider, &mut self.parsing, &*self.strategy);
        // an array closing inside a named entry pops both frames
        if self.parsing.position().peek_kind() == Some(FrameKind::Object) {
            self.parsing.position_mut().step_out();
        }
        forwarded
    }

    pub fn primitive(&mut self, value: P::Value) -> SurfResult<()> {
        if self.parsing.is_stopped() {
            return Ok(());
        }
        match self.parsing.position().peek_kind() {
            Some(FrameKind::Array) => {
                self.parsing.position_mut().accumulate_array_index();
                let matched = self.do_matching(Some(&value));
                let forwarded = self.forward_primitive(&value);
                matched.and(forwarded)
            }
            Some(FrameKind::Object) => {
                let matched = self.do_matching(Some(&value));
                self.parsing.position_mut().step_out();
                let forwarded = self.forward_primitive(&value);
                matched.and(forwarded)
            }
            Some(FrameKind::Root) => {
                let matched = self.do_matching(Some(&value));
                let forwarded = self.forward_primitive(&value);
                matched.and(forwarded)
            }
            None => Ok(()),
        }
    }

    fn forward_primitive(&mut self, value: &P::Value) -> SurfResult<()> {
        self.dispatcher
            .primitive(&*self.provider, value, &mut self.parsing, &*self.strategy)
    }

    /// Run the matcher at the current position.
    ///
    /// `primitive` carries the value for primitive matches, which invoke
    /// their listeners synchronously; structural matches pool their
    /// listeners into one new collector on the dispatcher stack.
    fn do_matching(&mut self, primitive: Option<&P::Value>) -> SurfResult<()> {
        if self.skip_overlapped && !self.dispatcher.is_empty() {
            // an outer match is recording a super-tree of this position
            return Ok(());
        }
        let matched = self.index.matched_bindings(self.parsing.position());
        if matched.is_empty() {
            return Ok(());
        }
        if let Some(value) = primitive {
            for binding in matched {
                for target in binding.listeners() {
                    if self.parsing.is_stopped() {
                        return Ok(());
                    }
                    listener::invoke(target, value, &mut self.parsing, &*self.strategy)?;
                }
            }
        } else {
            let pending: Vec<SharedListener<P::Value>> = matched
                .iter()
                .flat_map(|binding| binding.listeners().iter().cloned())
                .collect();
            log::debug!(
                "collector registered at {} for {} listener(s)",
                self.parsing.json_path(),
                pending.len()
            );
            self.dispatcher.register(Collector::new(pending));
        }
        Ok(())
    }
}
