use serde_json::Value;

/// Shallow merge of `fragment` (a JSON object, typically a single-key block)
/// into `document`, suggestion keys winning, serialized with 2-space
/// indentation. `None` when either side is not a JSON object; the caller
/// falls back to a textual append.
#[must_use]
pub fn shallow_merge(document: &str, fragment: &str) -> Option<String> {
    let Ok(Value::Object(mut doc)) = serde_json::from_str::<Value>(document) else {
        return None;
    };
    let Ok(Value::Object(frag)) = serde_json::from_str::<Value>(fragment) else {
        return None;
    };
    for (key, value) in frag {
        doc.insert(key, value);
    }
    serde_json::to_string_pretty(&Value::Object(doc)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn suggestion_key_overrides_existing() {
        let out = shallow_merge(
            r#"{"name":"Project","version":"1.0.0"}"#,
            r#"{"version":"1.1.0"}"#,
        )
        .unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, json!({"name": "Project", "version": "1.1.0"}));
    }

    #[test]
    fn new_keys_are_added() {
        let out = shallow_merge(r#"{"a":1}"#, r#"{"b":2}"#).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn merge_is_shallow_not_deep() {
        let out = shallow_merge(
            r#"{"deps":{"a":"1","b":"2"}}"#,
            r#"{"deps":{"a":"9"}}"#,
        )
        .unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        // The whole "deps" object is replaced, not merged key-by-key.
        assert_eq!(parsed, json!({"deps": {"a": "9"}}));
    }

    #[test]
    fn invalid_input_returns_none() {
        assert!(shallow_merge("{broken", r#"{"a":1}"#).is_none());
        assert!(shallow_merge(r#"{"a":1}"#, "not json").is_none());
        assert!(shallow_merge("[1,2]", r#"{"a":1}"#).is_none());
    }
}
