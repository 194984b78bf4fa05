//! Binding index
//!
//! Registered (expression, listeners) pairs partitioned at build time:
//! definite expressions land in a dense table indexed by exact match
//! depth, indefinite expressions in a list sorted ascending by their
//! minimum match depth so lookups can terminate early.

use crate::path::{CurrentPosition, PathExpression};

use super::listener::SharedListener;

/// One registered (expression, listeners) pair
pub struct Binding<V> {
    expression: PathExpression,
    listeners: Vec<SharedListener<V>>,
}

impl<V> Binding<V> {
    pub(crate) fn new(expression: PathExpression, listeners: Vec<SharedListener<V>>) -> Self {
        Self {
            expression,
            listeners,
        }
    }

    #[inline]
    #[must_use]
    pub fn expression(&self) -> &PathExpression {
        &self.expression
    }

    #[inline]
    pub(crate) fn listeners(&self) -> &[SharedListener<V>] {
        &self.listeners
    }
}

struct IndefiniteBinding<V> {
    binding: Binding<V>,
    minimum_path_depth: usize,
}

/// Two-tier lookup over registered bindings, frozen after build
pub struct BindingIndex<V> {
    /// Dense table of definite bindings, indexed by `depth - min_depth`
    definite: Vec<Vec<Binding<V>>>,
    min_depth: usize,
    max_depth: usize,
    /// Sorted ascending by `minimum_path_depth`
    indefinite: Vec<IndefiniteBinding<V>>,
}

impl<V> BindingIndex<V> {
    pub(crate) fn build(bindings: Vec<Binding<V>>) -> Self {
        let mut definite_entries: Vec<(usize, Binding<V>)> = Vec::new();
        let mut indefinite: Vec<IndefiniteBinding<V>> = Vec::new();
        for binding in bindings {
            if binding.expression.is_definite() {
                definite_entries.push((binding.expression.path_depth(), binding));
            } else {
                indefinite.push(IndefiniteBinding {
                    minimum_path_depth: binding.expression.minimum_path_depth(),
                    binding,
                });
            }
        }
        // stable: bindings at equal depth keep registration order
        indefinite.sort_by_key(|entry| entry.minimum_path_depth);

        let min_depth = definite_entries.iter().map(|(d, _)| *d).min().unwrap_or(0);
        let max_depth = definite_entries.iter().map(|(d, _)| *d).max().unwrap_or(0);
        let mut definite: Vec<Vec<Binding<V>>> = Vec::new();
        if !definite_entries.is_empty() {
            definite.resize_with(max_depth - min_depth + 1, Vec::new);
            for (depth, binding) in definite_entries {
                definite[depth - min_depth].push(binding);
            }
        }

        log::debug!(
            "binding index built: {} definite depth slots, {} indefinite",
            definite.len(),
            indefinite.len()
        );
        Self {
            definite,
            min_depth,
            max_depth,
            indefinite,
        }
    }

    /// Bindings whose expression matches the live position.
    ///
    /// The indefinite scan stops at the first binding whose minimum
    /// depth exceeds the live depth; the definite table contributes at
    /// most one slot.
    pub(crate) fn matched_bindings(&self, position: &CurrentPosition) -> Vec<&Binding<V>> {
        let depth = position.depth();
        let mut matched = Vec::new();
        for entry in &self.indefinite {
            if entry.minimum_path_depth > depth {
                break;
            }
            if entry.binding.expression.matches(position) {
                matched.push(&entry.binding);
            }
        }
        if !self.definite.is_empty() && depth >= self.min_depth && depth <= self.max_depth {
            for binding in &self.definite[depth - self.min_depth] {
                if binding.expression.matches(position) {
                    matched.push(binding);
                }
            }
        }
        matched
    }

    /// Total number of registered bindings
    #[must_use]
    pub fn len(&self) -> usize {
        self.indefinite.len() + self.definite.iter().map(Vec::len).sum::<usize>()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
