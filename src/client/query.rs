//! Query string encoding for list filters.
//!
//! Parameters are serialized through `serde_json` and flattened, so nested
//! filters use the API's bracket form (`created_at[gte]=...`). Unset (`None`)
//! fields and zero values (empty strings, `0`, `false`) are left out entirely.

use serde::Serialize;
use serde_json::Value;

use crate::{Error, Result};

/// Flatten `params` into `(name, value)` query pairs.
///
/// # Errors
///
/// Returns an error if `params` does not serialize to a JSON object.
pub fn to_query_pairs<T: Serialize>(params: &T) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    match serde_json::to_value(params)? {
        Value::Object(fields) => {
            for (name, value) in fields {
                flatten(name, value, &mut pairs);
            }
        }
        Value::Null => {}
        other => {
            return Err(Error::InvalidInput(format!(
                "Query parameters must be an object, got {}",
                other
            )))
        }
    }
    Ok(pairs)
}

fn flatten(name: String, value: Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null | Value::Bool(false) => {}
        Value::String(s) if s.is_empty() => {}
        Value::Number(n) if is_zero(&n) => {}
        Value::String(s) => out.push((name, s)),
        Value::Bool(true) => out.push((name, "true".to_string())),
        Value::Number(n) => out.push((name, n.to_string())),
        Value::Array(items) => {
            for item in items {
                flatten(name.clone(), item, out);
            }
        }
        Value::Object(fields) => {
            for (key, value) in fields {
                flatten(format!("{}[{}]", name, key), value, out);
            }
        }
    }
}

fn is_zero(n: &serde_json::Number) -> bool {
    n.as_u64() == Some(0) || n.as_i64() == Some(0) || n.as_f64().is_some_and(|f| f == 0.0)
}
