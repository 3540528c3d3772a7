//! Canonical key encoding for the store.
//!
//! Values go through [`serde_json::Value`] before being rendered. The
//! `Value` object map keeps its keys sorted, so two structurally equal values
//! always produce the same text even when one of them came from a `HashMap`.
//!
//! Arguments are always rendered as a JSON array, so the argument part of a
//! key has a fixed end and cannot run into the result that follows it.

use serde::Serialize;
use serde_json::Value;

use super::error::UniqueError;

/// Encode a single value canonically.
pub(crate) fn canonical<V: Serialize + ?Sized>(value: &V) -> Result<String, UniqueError> {
    let value = serde_json::to_value(value)?;
    Ok(serde_json::to_string(&value)?)
}

/// Encode a call's arguments as a JSON array.
///
/// Tuples already serialize as arrays. `()` becomes `[]` and any other
/// value `v` becomes `[v]`.
pub(crate) fn arguments<A: Serialize + ?Sized>(args: &A) -> Result<String, UniqueError> {
    let list = match serde_json::to_value(args)? {
        list @ Value::Array(_) => list,
        Value::Null => Value::Array(Vec::new()),
        other => Value::Array(vec![other]),
    };
    Ok(serde_json::to_string(&list)?)
}

/// Build the store key for an already-encoded argument list and a result.
pub(crate) fn encode<T: Serialize + ?Sized>(args: &str, result: &T) -> Result<String, UniqueError> {
    let mut key = String::with_capacity(args.len() + 16);
    key.push_str(args);
    key.push_str(&canonical(result)?);
    Ok(key)
}
