//! Listener bindings and the two-tier lookup index

pub mod index;
pub mod listener;

pub use index::{Binding, BindingIndex};
pub use listener::{
    JsonPathListener, ListenerError, ListenerResult, SharedListener, TypedListener, share,
};
