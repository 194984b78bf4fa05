//! Compiled path expression
//!
//! An immutable operator sequence plus the derived attributes the binding
//! index partitions on, and the whole-expression matcher used against a
//! live position.

use super::operator::PathOperator;
use super::position::CurrentPosition;

/// Compiled JSONPath expression optimized for streaming evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpression {
    /// Operator chain for runtime matching
    operators: Vec<PathOperator>,
    /// Original expression string for debugging
    original: String,
}

impl PathExpression {
    #[must_use]
    pub fn new(operators: Vec<PathOperator>, original: String) -> Self {
        Self {
            operators,
            original,
        }
    }

    /// Get original JSONPath expression string
    #[inline]
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Get compiled operator chain
    #[inline]
    #[must_use]
    pub fn operators(&self) -> &[PathOperator] {
        &self.operators
    }

    /// True iff this expression matches at most one position in any
    /// document: no wildcard, no deep scan, every array operator pins a
    /// single index.
    #[must_use]
    pub fn is_definite(&self) -> bool {
        !self.operators.iter().any(|op| {
            matches!(
                op,
                PathOperator::Wildcard | PathOperator::DeepScan | PathOperator::ArraySlice { .. }
            )
        })
    }

    /// Exact live-position depth a definite expression matches at.
    ///
    /// Definite expressions contain no deep scan, so every operator
    /// consumes exactly one position frame.
    #[inline]
    #[must_use]
    pub fn path_depth(&self) -> usize {
        self.minimum_path_depth()
    }

    /// Lower bound on the live-position depth at which any match can fire
    #[must_use]
    pub fn minimum_path_depth(&self) -> usize {
        self.operators
            .iter()
            .filter(|op| !matches!(op, PathOperator::DeepScan))
            .count()
    }

    /// Check if expression has a deep scan operator
    #[inline]
    #[must_use]
    pub fn has_deep_scan(&self) -> bool {
        self.operators
            .iter()
            .any(|op| matches!(op, PathOperator::DeepScan))
    }

    /// Whole-expression match against the live position.
    ///
    /// Two-pointer walk over (operators, frames). Deep scan is
    /// greedy-first-fit: the first frame satisfying the next operator is
    /// consumed, with no backtracking, keeping the walk
    /// O(|operators| * depth).
    #[must_use]
    pub fn matches(&self, position: &CurrentPosition) -> bool {
        let operators = &self.operators;
        let depth = position.depth();
        let mut i = 0;
        let mut j = 0;
        while i < operators.len() && j < depth {
            if matches!(operators[i], PathOperator::DeepScan) {
                if i == operators.len() - 1 {
                    // trailing `..` matches everything below
                    return true;
                }
                i += 1;
                while j < depth && !Self::frame_matches(operators, i, position, j) {
                    j += 1;
                }
                if j == depth {
                    return false;
                }
                i += 1;
                j += 1;
            } else {
                if !Self::frame_matches(operators, i, position, j) {
                    return false;
                }
                i += 1;
                j += 1;
            }
        }
        i == operators.len() && j == depth
    }

    #[inline]
    fn frame_matches(
        operators: &[PathOperator],
        i: usize,
        position: &CurrentPosition,
        j: usize,
    ) -> bool {
        position
            .frame(j)
            .is_some_and(|frame| operators[i].matches_frame(frame, j))
    }
}
