use serde_json::{Map, Value};

/// Shallow-merge `update` into `base`: every field of `update` overwrites the
/// field of the same name in `base`, fields only present in `base` are kept.
///
/// Nested objects are replaced, not merged recursively.
///
/// # Examples
///
/// ```
/// use horreum_util::merge::merge_fields;
/// use serde_json::json;
///
/// let mut base = json!({"id": 1, "name": "a"}).as_object().cloned().unwrap();
/// let update = json!({"id": 1, "owner": "x"}).as_object().cloned().unwrap();
/// merge_fields(&mut base, &update);
/// assert_eq!(serde_json::Value::Object(base), json!({"id": 1, "name": "a", "owner": "x"}));
/// ```
pub fn merge_fields(base: &mut Map<String, Value>, update: &Map<String, Value>) {
    for (key, value) in update {
        base.insert(key.clone(), value.clone());
    }
}

/// Returns a new object holding `base` with `update` merged on top.
pub fn merged(base: &Map<String, Value>, update: &Map<String, Value>) -> Map<String, Value> {
    let mut out = base.clone();
    merge_fields(&mut out, update);
    out
}
