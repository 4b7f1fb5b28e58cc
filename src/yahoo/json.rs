//! Helpers for mining Yahoo's fantasy JSON.
//!
//! The v2 API wraps everything in deep arrays of one-key objects and
//! renders collections as objects keyed by "0", "1", ... plus a "count".
//! Numbers frequently arrive as strings. These helpers absorb all of that
//! so the endpoint code can read like the payloads were sane.

use serde_json::Value;

/// Depth-first search for the first occurrence of an object key.
pub fn find_key<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => {
            if let Some(found) = map.get(key) {
                return Some(found);
            }
            map.values().find_map(|v| find_key(v, key))
        }
        Value::Array(items) => items.iter().find_map(|v| find_key(v, key)),
        _ => None,
    }
}

/// Entries of a numbered collection, in index order.
///
/// Honors "count" when present and otherwise walks indices until the first
/// gap, since some endpoints omit the count field.
pub fn numbered(collection: &Value) -> Vec<&Value> {
    let Some(map) = collection.as_object() else {
        return Vec::new();
    };
    let mut entries = Vec::new();
    let count = map.get("count").and_then(as_u64_ish);
    let mut index = 0u64;
    loop {
        if let Some(limit) = count {
            if index >= limit {
                break;
            }
        }
        match map.get(&index.to_string()) {
            Some(entry) => entries.push(entry),
            None => break,
        }
        index += 1;
    }
    entries
}

/// Numbered entries unwrapped down to the labelled entity.
///
/// A collection entry for label "team" looks like `{"team": [...]}`; this
/// returns the inner value for each entry, skipping any that lack the label.
pub fn numbered_entities<'a>(collection: &'a Value, label: &str) -> Vec<&'a Value> {
    numbered(collection)
        .into_iter()
        .filter_map(|entry| entry.get(label))
        .collect()
}

/// Integer that may be a JSON number or a numeric string.
pub fn as_u64_ish(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// String key found anywhere under `value`, copied out.
pub fn string_at(value: &Value, key: &str) -> Option<String> {
    find_key(value, key)?.as_str().map(str::to_string)
}

/// Integer key found anywhere under `value`.
pub fn u64_at(value: &Value, key: &str) -> Option<u64> {
    as_u64_ish(find_key(value, key)?)
}
