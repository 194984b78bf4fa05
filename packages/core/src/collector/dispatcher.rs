//! Collector stack dispatcher
//!
//! Owns the stack of active collectors and broadcasts every event to all
//! of them in bottom-to-top (outer-first) order. Completion fires
//! innermost-first: only the topmost collector can close on a given end
//! event before any collector that contains it, and a completed
//! collector removes itself before control returns to the context.

use crate::binding::listener;
use crate::context::ParsingContext;
use crate::error::{ErrorStrategy, SurfResult};
use crate::provider::JsonProvider;

use super::collector::Collector;

/// Stack of active sub-tree collectors
pub struct Dispatcher<P: JsonProvider> {
    collectors: Vec<Collector<P>>,
}

impl<P: JsonProvider> Dispatcher<P> {
    pub(crate) fn new() -> Self {
        Self {
            collectors: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.collectors.is_empty()
    }

    pub(crate) fn register(&mut self, collector: Collector<P>) {
        self.collectors.push(collector);
    }

    pub(crate) fn clear(&mut self) {
        self.collectors.clear();
    }

    pub(crate) fn start_object(&mut self, provider: &P) {
        for collector in &mut self.collectors {
            collector.start_object(provider);
        }
    }

    pub(crate) fn start_array(&mut self, provider: &P) {
        for collector in &mut self.collectors {
            collector.start_array(provider);
        }
    }

    pub(crate) fn object_entry(&mut self, key: &str) {
        for collector in &mut self.collectors {
            collector.object_entry(key);
        }
    }

    pub(crate) fn end_object(
        &mut self,
        provider: &P,
        parsing: &mut ParsingContext,
        strategy: &dyn ErrorStrategy,
    ) -> SurfResult<()> {
        for collector in &mut self.collectors {
            collector.end_container(provider);
        }
        self.fire_completed(parsing, strategy)
    }

    pub(crate) fn end_array(
        &mut self,
        provider: &P,
        parsing: &mut ParsingContext,
        strategy: &dyn ErrorStrategy,
    ) -> SurfResult<()> {
        for collector in &mut self.collectors {
            collector.end_container(provider);
        }
        self.fire_completed(parsing, strategy)
    }

    pub(crate) fn primitive(
        &mut self,
        provider: &P,
        value: &P::Value,
        parsing: &mut ParsingContext,
        strategy: &dyn ErrorStrategy,
    ) -> SurfResult<()> {
        for collector in &mut self.collectors {
            collector.primitive(provider, value.clone());
        }
        self.fire_completed(parsing, strategy)
    }

    /// Fire and remove every completed collector, innermost first.
    /// Listener order within a collector is registration order.
    fn fire_completed(
        &mut self,
        parsing: &mut ParsingContext,
        strategy: &dyn ErrorStrategy,
    ) -> SurfResult<()> {
        while let Some(index) = self.collectors.iter().rposition(Collector::is_complete) {
            let mut collector = self.collectors.remove(index);
            let Some(value) = collector.take_assembled() else {
                continue;
            };
            log::debug!("collector completed at {}", parsing.json_path());
            for target in collector.listeners() {
                if parsing.is_stopped() {
                    break;
                }
                listener::invoke(target, &value, parsing, strategy)?;
            }
        }
        Ok(())
    }
}
