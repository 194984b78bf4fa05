//! Fluent configuration builder
//!
//! Bindings and options accumulate on the builder; `build()` freezes it
//! and produces a single-use surfing context. Any mutation after the
//! freeze fails with `BuilderFrozen`.

use std::rc::Rc;

use serde::de::DeserializeOwned;

use crate::binding::{
    Binding, BindingIndex, JsonPathListener, ListenerResult, SharedListener, TypedListener, share,
};
use crate::error::{ErrorStrategy, StrictStrategy, SurfError, SurfResult};
use crate::path::{PathCompiler, PathExpression};
use crate::provider::{JsonProvider, SerdeJsonProvider};

use super::parsing::ParsingContext;
use super::surfing::SurfingContext;

/// Builder for a [`SurfingContext`]
pub struct SurferBuilder<P: JsonProvider = SerdeJsonProvider> {
    provider: Rc<P>,
    bindings: Vec<Binding<P::Value>>,
    strategy: Box<dyn ErrorStrategy>,
    skip_overlapped: bool,
    frozen: bool,
}

impl SurferBuilder<SerdeJsonProvider> {
    /// Builder over the default serde_json provider
    #[must_use]
    pub fn new() -> Self {
        Self::with_provider(SerdeJsonProvider)
    }
}

impl Default for SurferBuilder<SerdeJsonProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: JsonProvider> SurferBuilder<P> {
    /// Builder over a custom value provider.
    ///
    /// Switching providers changes the context's value type, so this is
    /// a constructor rather than a setter.
    #[must_use]
    pub fn with_provider(provider: P) -> Self {
        Self {
            provider: Rc::new(provider),
            bindings: Vec::new(),
            strategy: Box::new(StrictStrategy),
            skip_overlapped: false,
            frozen: false,
        }
    }

    /// Compile `path` and bind one listener to it.
    ///
    /// # Errors
    ///
    /// `InvalidPath` / `UnsupportedPathOperator` from compilation,
    /// `BuilderFrozen` after `build()`.
    pub fn bind<L>(&mut self, path: &str, listener: L) -> SurfResult<&mut Self>
    where
        L: JsonPathListener<P::Value> + 'static,
    {
        let expression = PathCompiler::compile(path)?;
        self.bind_expression(expression, listener)
    }

    /// Bind one listener to an already-compiled expression
    pub fn bind_expression<L>(
        &mut self,
        expression: PathExpression,
        listener: L,
    ) -> SurfResult<&mut Self>
    where
        L: JsonPathListener<P::Value> + 'static,
    {
        self.bind_shared(expression, &[share(listener)])
    }

    /// Bind shared listener handles to `expression`.
    ///
    /// Within the binding, listeners fire in the order given here; the
    /// same handle may be bound to any number of expressions.
    pub fn bind_shared(
        &mut self,
        expression: PathExpression,
        listeners: &[SharedListener<P::Value>],
    ) -> SurfResult<&mut Self> {
        self.ensure_mutable()?;
        log::debug!("binding registered: {}", expression.original());
        self.bindings
            .push(Binding::new(expression, listeners.to_vec()));
        Ok(self)
    }

    /// Compile `path` and bind a closure handler
    pub fn bind_fn<F>(&mut self, path: &str, handler: F) -> SurfResult<&mut Self>
    where
        F: FnMut(&P::Value, &mut ParsingContext) -> ListenerResult + 'static,
    {
        let expression = PathCompiler::compile(path)?;
        self.bind_expression(expression, handler)
    }

    /// Compile `path` and bind a typed handler; the assembled value is
    /// cast through the provider before the handler runs.
    pub fn bind_typed<T, F>(&mut self, path: &str, handler: F) -> SurfResult<&mut Self>
    where
        P: 'static,
        T: DeserializeOwned + 'static,
        F: FnMut(T, &mut ParsingContext) -> ListenerResult + 'static,
    {
        let expression = PathCompiler::compile(path)?;
        let listener = TypedListener::new(Rc::clone(&self.provider), handler);
        self.bind_expression(expression, listener)
    }

    /// Suppress nested matches while an outer match is recording
    pub fn skip_overlapped_path(&mut self) -> SurfResult<&mut Self> {
        self.ensure_mutable()?;
        self.skip_overlapped = true;
        Ok(self)
    }

    /// Install the listener-error policy (default: every failure fatal)
    pub fn with_error_strategy<S>(&mut self, strategy: S) -> SurfResult<&mut Self>
    where
        S: ErrorStrategy + 'static,
    {
        self.ensure_mutable()?;
        self.strategy = Box::new(strategy);
        Ok(self)
    }

    /// Freeze the builder and produce the single-use context.
    ///
    /// # Errors
    ///
    /// `BuilderFrozen` if `build()` already ran.
    pub fn build(&mut self) -> SurfResult<SurfingContext<P>> {
        self.ensure_mutable()?;
        self.frozen = true;
        let bindings = std::mem::take(&mut self.bindings);
        let strategy = std::mem::replace(&mut self.strategy, Box::new(StrictStrategy));
        Ok(SurfingContext::new(
            Rc::clone(&self.provider),
            BindingIndex::build(bindings),
            strategy,
            self.skip_overlapped,
        ))
    }

    fn ensure_mutable(&self) -> SurfResult<()> {
        if self.frozen {
            Err(SurfError::builder_frozen(
                "configuration is frozen once build() has run",
            ))
        } else {
            Ok(())
        }
    }
}
