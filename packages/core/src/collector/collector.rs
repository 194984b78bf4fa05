//! Sub-tree collector
//!
//! A recording receiver registered when a structural path matches. It
//! rebuilds the matched fragment through the value provider, tracking
//! its own nesting depth; when the depth returns to zero (or
//! immediately, for a primitive) the fragment is complete and every
//! target listener fires exactly once.

use crate::binding::SharedListener;
use crate::provider::JsonProvider;

struct CollectorFrame<V> {
    value: V,
    pending_key: Option<String>,
}

/// Recording receiver for one structural match
pub struct Collector<P: JsonProvider> {
    depth: usize,
    frames: Vec<CollectorFrame<P::Value>>,
    assembled: Option<P::Value>,
    listeners: Vec<SharedListener<P::Value>>,
}

impl<P: JsonProvider> Collector<P> {
    pub(crate) fn new(listeners: Vec<SharedListener<P::Value>>) -> Self {
        Self {
            depth: 0,
            frames: Vec::new(),
            assembled: None,
            listeners,
        }
    }

    pub(crate) fn start_object(&mut self, provider: &P) {
        self.depth += 1;
        self.frames.push(CollectorFrame {
            value: provider.create_object(),
            pending_key: None,
        });
    }

    pub(crate) fn start_array(&mut self, provider: &P) {
        self.depth += 1;
        self.frames.push(CollectorFrame {
            value: provider.create_array(),
            pending_key: None,
        });
    }

    pub(crate) fn object_entry(&mut self, key: &str) {
        if let Some(frame) = self.frames.last_mut() {
            frame.pending_key = Some(key.to_string());
        }
    }

    /// Close the innermost container; shared by end-object and end-array
    pub(crate) fn end_container(&mut self, provider: &P) {
        self.depth = self.depth.saturating_sub(1);
        if let Some(frame) = self.frames.pop() {
            if self.depth == 0 {
                self.assembled = Some(frame.value);
            } else {
                self.attach(provider, frame.value);
            }
        }
    }

    pub(crate) fn primitive(&mut self, provider: &P, value: P::Value) {
        if self.depth == 0 {
            // primitive match: complete without ever opening a container
            self.assembled = Some(value);
        } else {
            self.attach(provider, value);
        }
    }

    fn attach(&mut self, provider: &P, value: P::Value) {
        if let Some(frame) = self.frames.last_mut() {
            if provider.is_array(&frame.value) {
                provider.consume_array_element(&mut frame.value, value);
            } else if let Some(key) = frame.pending_key.take() {
                provider.consume_object_entry(&mut frame.value, key, value);
            }
        }
    }

    #[inline]
    pub(crate) fn is_complete(&self) -> bool {
        self.assembled.is_some()
    }

    pub(crate) fn take_assembled(&mut self) -> Option<P::Value> {
        self.assembled.take()
    }

    pub(crate) fn listeners(&self) -> &[SharedListener<P::Value>] {
        &self.listeners
    }
}
