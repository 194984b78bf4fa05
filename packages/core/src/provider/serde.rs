//! serde_json-backed value provider

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{SurfError, SurfResult};

use super::json_provider::JsonProvider;

/// Default provider assembling `serde_json::Value` trees
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeJsonProvider;

impl JsonProvider for SerdeJsonProvider {
    type Value = Value;

    fn create_object(&self) -> Value {
        Value::Object(Map::new())
    }

    fn create_array(&self) -> Value {
        Value::Array(Vec::new())
    }

    fn is_object(&self, value: &Value) -> bool {
        value.is_object()
    }

    fn is_array(&self, value: &Value) -> bool {
        value.is_array()
    }

    fn consume_object_entry(&self, object: &mut Value, key: String, value: Value) {
        if let Value::Object(map) = object {
            map.insert(key, value);
        }
    }

    fn consume_array_element(&self, array: &mut Value, element: Value) {
        if let Value::Array(elements) = array {
            elements.push(element);
        }
    }

    fn primitive_bool(&self, value: bool) -> Value {
        Value::Bool(value)
    }

    fn primitive_i64(&self, value: i64) -> Value {
        Value::from(value)
    }

    fn primitive_f64(&self, value: f64) -> Value {
        // non-finite doubles have no JSON form; serde_json maps them to null
        Value::from(value)
    }

    fn primitive_string(&self, value: &str) -> Value {
        Value::String(value.to_string())
    }

    fn primitive_null(&self) -> Value {
        Value::Null
    }

    fn cast<T: DeserializeOwned>(&self, value: &Value) -> SurfResult<T> {
        serde_json::from_value(value.clone())
            .map_err(|e| SurfError::provider_failure(format!("type cast failed: {e}")))
    }
}
