//! Listener traits and invocation plumbing
//!
//! Listeners are shared `Rc<RefCell<..>>` handles so one instance can
//! back several bindings and travel into collectors; the surfing model
//! is single-threaded, so no synchronization is involved.

use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

use serde::de::DeserializeOwned;

use crate::context::ParsingContext;
use crate::error::{ErrorStrategy, Recovery, SurfError, SurfResult};
use crate::provider::JsonProvider;

/// Error raised by a listener
pub type ListenerError = Box<dyn std::error::Error>;

/// Result of one listener invocation
pub type ListenerResult = Result<(), ListenerError>;

/// Receiver for matched values.
///
/// Invoked synchronously on the parsing thread; the parsing context
/// exposes the live path, the current key, and `stop_parsing()`.
pub trait JsonPathListener<V> {
    /// Handle one matched value.
    ///
    /// # Errors
    ///
    /// Errors are routed through the installed [`ErrorStrategy`], never
    /// to the parser.
    fn on_value(&mut self, value: &V, parsing: &mut ParsingContext) -> ListenerResult;
}

impl<V, F> JsonPathListener<V> for F
where
    F: FnMut(&V, &mut ParsingContext) -> ListenerResult,
{
    fn on_value(&mut self, value: &V, parsing: &mut ParsingContext) -> ListenerResult {
        self(value, parsing)
    }
}

/// Shared listener handle
pub type SharedListener<V> = Rc<RefCell<dyn JsonPathListener<V>>>;

/// Wrap a listener into a shared handle
pub fn share<V, L>(listener: L) -> SharedListener<V>
where
    L: JsonPathListener<V> + 'static,
{
    Rc::new(RefCell::new(listener))
}

/// Adapter casting the assembled value through the provider before
/// forwarding it to a typed handler. Lives outside the hot path.
pub struct TypedListener<P, T, F>
where
    P: JsonProvider,
    T: DeserializeOwned,
    F: FnMut(T, &mut ParsingContext) -> ListenerResult,
{
    provider: Rc<P>,
    handler: F,
    _marker: PhantomData<fn() -> T>,
}

impl<P, T, F> TypedListener<P, T, F>
where
    P: JsonProvider,
    T: DeserializeOwned,
    F: FnMut(T, &mut ParsingContext) -> ListenerResult,
{
    pub fn new(provider: Rc<P>, handler: F) -> Self {
        Self {
            provider,
            handler,
            _marker: PhantomData,
        }
    }
}

impl<P, T, F> JsonPathListener<P::Value> for TypedListener<P, T, F>
where
    P: JsonProvider,
    T: DeserializeOwned,
    F: FnMut(T, &mut ParsingContext) -> ListenerResult,
{
    fn on_value(&mut self, value: &P::Value, parsing: &mut ParsingContext) -> ListenerResult {
        let typed: T = self.provider.cast(value)?;
        (self.handler)(typed, parsing)
    }
}

/// Invoke one listener and route any failure through the strategy.
///
/// A `SurfError` raised by the listener (e.g. a provider cast failure)
/// keeps its kind; anything else is wrapped as `ListenerFailure`.
pub(crate) fn invoke<V>(
    listener: &SharedListener<V>,
    value: &V,
    parsing: &mut ParsingContext,
    strategy: &dyn ErrorStrategy,
) -> SurfResult<()> {
    let outcome = match listener.try_borrow_mut() {
        Ok(mut guard) => guard.on_value(value, parsing),
        Err(_) => Err("listener re-entered during its own invocation".into()),
    };
    let Err(raised) = outcome else {
        return Ok(());
    };
    let error = match raised.downcast::<SurfError>() {
        Ok(surf) => *surf,
        Err(other) => SurfError::listener_failure(other.to_string()),
    };
    match strategy.recover(&error) {
        Recovery::Continue => Ok(()),
        Recovery::Stop => {
            log::debug!("surf stopped by error strategy: {error}");
            parsing.stop_parsing();
            Ok(())
        }
        Recovery::Fatal => Err(error),
    }
}
