//! Value-builder contract
//!
//! The matcher never inspects document values beyond "is this an object
//! or an array"; construction of matched fragments is delegated to a
//! provider so the assembled representation stays pluggable.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::error::SurfResult;

/// Builder for the opaque values assembled from matched sub-trees.
///
/// Implementations must be side-effect-free apart from the structures
/// they build.
pub trait JsonProvider {
    /// Assembled value representation
    type Value: Clone + fmt::Debug;

    fn create_object(&self) -> Self::Value;

    fn create_array(&self) -> Self::Value;

    fn is_object(&self, value: &Self::Value) -> bool;

    fn is_array(&self, value: &Self::Value) -> bool;

    /// Attach `value` to `object` under `key`
    fn consume_object_entry(&self, object: &mut Self::Value, key: String, value: Self::Value);

    /// Append `element` to `array`
    fn consume_array_element(&self, array: &mut Self::Value, element: Self::Value);

    fn primitive_bool(&self, value: bool) -> Self::Value;

    fn primitive_i64(&self, value: i64) -> Self::Value;

    fn primitive_f64(&self, value: f64) -> Self::Value;

    fn primitive_string(&self, value: &str) -> Self::Value;

    fn primitive_null(&self) -> Self::Value;

    /// Cast an assembled value into a user type.
    ///
    /// # Errors
    ///
    /// Returns `ProviderFailure` when the value does not fit the target
    /// type.
    fn cast<T: DeserializeOwned>(&self, value: &Self::Value) -> SurfResult<T>;
}
