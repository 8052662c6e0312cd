//! Blank-field removal for update payloads.
//!
//! A client that submits `{"name": ""}` means "leave the name alone", not
//! "erase the name". This helper knows nothing about any entity schema; it
//! only drops empty-string entries.

use serde_json::{Map, Value};

/// Return `fields` with every empty-string entry removed. All other values
/// (non-empty strings, numbers, booleans, nulls, nested structures) pass
/// through unchanged.
pub fn remove_blank_fields(fields: Map<String, Value>) -> Map<String, Value> {
  fields
    .into_iter()
    .filter(|(_, value)| !matches!(value, Value::String(s) if s.is_empty()))
    .collect()
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn object(value: Value) -> Map<String, Value> {
    match value {
      Value::Object(map) => map,
      _ => unreachable!(),
    }
  }

  #[test]
  fn drops_empty_string_entries() {
    let out = remove_blank_fields(object(json!({
      "name": "",
      "type": "Sun",
    })));
    assert!(!out.contains_key("name"));
    assert_eq!(out.get("type"), Some(&json!("Sun")));
  }

  #[test]
  fn keeps_non_string_values() {
    let out = remove_blank_fields(object(json!({
      "count": 0,
      "flag": false,
      "nothing": null,
      "nested": {"inner": ""},
    })));
    assert_eq!(out.len(), 4);
  }

  #[test]
  fn empty_object_passes_through() {
    assert!(remove_blank_fields(Map::new()).is_empty());
  }
}
