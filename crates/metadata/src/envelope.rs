//! Response envelope unwrapping.
//!
//! Backend services wrap payloads inconsistently: sometimes under `data`,
//! sometimes under an entity-specific key, sometimes not at all. Every call
//! site goes through one unwrap with an explicit, ordered key list instead
//! of ad hoc chained probing.

use serde_json::Value;

/// Unwrap a response using a fixed priority list of envelope keys.
///
/// The first key present on the object wins; a response that is not an
/// object, or carries none of the keys, passes through unchanged.
pub fn unwrap_envelope(response: Value, keys: &[&str]) -> Value {
    if let Value::Object(ref map) = response {
        for key in keys {
            if let Some(inner) = map.get(*key) {
                return inner.clone();
            }
        }
    }
    response
}

/// Unwrap a collection response down to its record list.
///
/// A bare array passes through; an enveloped array is unwrapped first.
/// Anything else yields an empty list rather than an error, so a malformed
/// response degrades to an empty table instead of a crash.
pub fn unwrap_list(response: Value, keys: &[&str]) -> Vec<Value> {
    match unwrap_envelope(response, keys) {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_matching_key_wins() {
        let response = json!({"client": {"id": 2}, "data": {"id": 1}});
        let unwrapped = unwrap_envelope(response, &["data", "client"]);
        assert_eq!(unwrapped, json!({"id": 1}));
    }

    #[test]
    fn entity_specific_key_is_tried_after_data() {
        let response = json!({"client": {"id": 2}});
        let unwrapped = unwrap_envelope(response, &["data", "client"]);
        assert_eq!(unwrapped, json!({"id": 2}));
    }

    #[test]
    fn unknown_shape_passes_through() {
        let response = json!({"id": 7, "name": "x"});
        let unwrapped = unwrap_envelope(response.clone(), &["data", "client"]);
        assert_eq!(unwrapped, response);
    }

    #[test]
    fn list_unwraps_bare_and_enveloped_arrays() {
        assert_eq!(unwrap_list(json!([1, 2]), &["data"]), vec![json!(1), json!(2)]);
        assert_eq!(
            unwrap_list(json!({"data": [3]}), &["data"]),
            vec![json!(3)]
        );
        assert!(unwrap_list(json!("oops"), &["data"]).is_empty());
    }
}
