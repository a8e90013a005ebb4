use serde_json::Value;

/// Removes every occurrence of `key` at any depth of a JSON tree, walking
/// objects and arrays and leaving scalars untouched.
pub fn remove_key(value: &mut Value, key: &str) {
    match value {
        Value::Object(map) => {
            map.remove(key);
            for (_, nested) in map.iter_mut() {
                remove_key(nested, key);
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                remove_key(item, key);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_removes_key_at_every_depth() {
        let mut value = json!({
            "title": "Root",
            "properties": {
                "inner": {
                    "title": "Inner",
                    "items": [
                        {"title": "Element", "type": "string"},
                        {"type": "integer"}
                    ]
                }
            }
        });

        remove_key(&mut value, "title");

        assert_eq!(
            value,
            json!({
                "properties": {
                    "inner": {
                        "items": [
                            {"type": "string"},
                            {"type": "integer"}
                        ]
                    }
                }
            })
        );
    }

    #[test]
    fn test_leaves_other_keys_untouched() {
        let mut value = json!({
            "keep": {"nested": [1, 2, {"keep": "yes", "drop": null}]},
            "drop": "top"
        });

        remove_key(&mut value, "drop");

        assert_eq!(
            value,
            json!({"keep": {"nested": [1, 2, {"keep": "yes"}]}})
        );
    }

    #[test]
    fn test_scalar_and_missing_key_are_noops() {
        let mut scalar = json!(42);
        remove_key(&mut scalar, "title");
        assert_eq!(scalar, json!(42));

        let mut value = json!({"a": 1});
        remove_key(&mut value, "absent");
        assert_eq!(value, json!({"a": 1}));
    }
}
