use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::warn;

use crate::domain::gateway::entities::GatewayError;

/// Object results must come back as objects and list results as lists.
/// Serde would happily build a struct out of a JSON array, so the top level
/// is compared against the fallback's own shape before decoding.
fn same_top_level_type<T: Serialize>(value: &Value, fallback: &T) -> bool {
    match serde_json::to_value(fallback) {
        Ok(expected) => {
            value.is_array() == expected.is_array() && value.is_object() == expected.is_object()
        }
        Err(_) => false,
    }
}

/// Decodes raw model text into `T`, or returns `fallback` when there is
/// nothing usable. Never fails: the caller always gets a well-formed result.
pub fn interpret<T>(raw: Result<String, GatewayError>, fallback: T) -> T
where
    T: Serialize + DeserializeOwned,
{
    let text = match raw {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "model call failed, serving fallback result");
            return fallback;
        }
    };

    let value: Value = match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(e) => {
            warn!(
                error = %e,
                response_len = text.len(),
                "unparseable model response, serving fallback result"
            );
            return fallback;
        }
    };

    if !same_top_level_type(&value, &fallback) {
        warn!("model response has the wrong top-level type, serving fallback result");
        return fallback;
    }

    // List results keep their object entries, like nested record lists do.
    let value = match value {
        Value::Array(mut entries) => {
            entries.retain(Value::is_object);
            Value::Array(entries)
        }
        other => other,
    };

    match serde_json::from_value::<T>(value) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(error = %e, "model response does not match the result shape, serving fallback result");
            fallback
        }
    }
}
