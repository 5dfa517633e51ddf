//! Defensive accessors for provider JSON.
//!
//! ESPN fields disappear, move, or change type between responses. Every
//! read goes through these helpers so an absent or reshaped field degrades
//! to `None` (or an empty slice) instead of failing a whole resolution.

use serde_json::Value;

/// String field, when present and actually a string.
pub fn str_field<'a>(doc: &'a Value, key: &str) -> Option<&'a str> {
    doc.get(key).and_then(Value::as_str)
}

/// Object field, when present and actually an object.
pub fn obj_field<'a>(doc: &'a Value, key: &str) -> Option<&'a Value> {
    doc.get(key).filter(|v| v.is_object())
}

/// Array field as a slice; absent or non-array reads as empty.
pub fn arr_field<'a>(doc: &'a Value, key: &str) -> &'a [Value] {
    doc.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// First element of an array field.
pub fn first<'a>(doc: &'a Value, key: &str) -> Option<&'a Value> {
    arr_field(doc, key).first()
}

/// Identifier field. The provider serves ids both as strings and as bare
/// numbers; empty strings read as absent.
pub fn id_field(doc: &Value, key: &str) -> Option<String> {
    match doc.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
