//! Canonical JSON serialization with sorted object keys.
//!
//! Comparison cells holding objects are shown as text. Two datasets that
//! carry the same object must render the same string regardless of the order
//! the server emitted the keys in, so keys are sorted before serializing.

use serde_json::Value;

/// Serialize `val` to a deterministic JSON string with sorted object keys.
///
/// # Examples
///
/// ```
/// use horreum_util::stable::stringify;
/// use serde_json::json;
///
/// assert_eq!(stringify(&json!({"b": 2, "a": [1, "x"]})), r#"{"a":[1,"x"],"b":2}"#);
/// ```
pub fn stringify(val: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, val);
    out
}

fn write_value(out: &mut String, val: &Value) {
    match val {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_string(out, s),
        Value::Array(arr) => {
            out.push('[');
            for (i, item) in arr.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Object(obj) => {
            let mut keys: Vec<&String> = obj.keys().collect();
            keys.sort_unstable();
            out.push('{');
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(out, key);
                out.push(':');
                write_value(out, &obj[key.as_str()]);
            }
            out.push('}');
        }
    }
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}
