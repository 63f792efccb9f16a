//! Tolerant accessors over the untyped JSON blobs.
//!
//! The four attribute blobs are loosely structured: keys may be absent at
//! any level and scalar values arrive as either strings or numbers. Every
//! accessor here takes the optional-field-with-default view rather than
//! assuming shape.

use serde_json::Value;

/// Render a scalar JSON value as text; `None` for null and non-scalars.
///
/// Whole-number floats render without the trailing ".0" so numeric fields
/// read the same whether the exporter wrote `5` or `5.0`.
pub fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                Some(int.to_string())
            } else {
                number.as_f64().map(|float| {
                    if float.fract() == 0.0 {
                        format!("{}", float as i64)
                    } else {
                        float.to_string()
                    }
                })
            }
        }
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// A string-rendered field of a JSON object; `None` when absent or non-scalar.
pub fn str_field(object: &Value, key: &str) -> Option<String> {
    object.get(key).and_then(value_to_string)
}

/// An integer field, accepting both JSON numbers and numeric strings.
pub fn int_field(object: &Value, key: &str) -> Option<i64> {
    match object.get(key)? {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// The blob's "top" list as (key, value) text pairs, skipping malformed
/// entries instead of failing.
pub fn top_entries(blob: &Value) -> Vec<(String, String)> {
    let Some(items) = blob.get("top").and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let key = str_field(item, "key").unwrap_or_default();
            let value = str_field(item, "value")?;
            Some((key, value))
        })
        .collect()
}

/// First "top" entry whose key contains `needle`.
pub fn find_top_value(blob: &Value, needle: &str) -> Option<String> {
    top_entries(blob)
        .into_iter()
        .find(|(key, _)| key.contains(needle))
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::{find_top_value, int_field, str_field, top_entries, value_to_string};
    use serde_json::json;

    #[test]
    fn scalars_render_as_text() {
        assert_eq!(value_to_string(&json!("Petrol")), Some("Petrol".into()));
        assert_eq!(value_to_string(&json!(5)), Some("5".into()));
        assert_eq!(value_to_string(&json!(5.0)), Some("5".into()));
        assert_eq!(value_to_string(&json!(19.7)), Some("19.7".into()));
        assert_eq!(value_to_string(&json!(null)), None);
        assert_eq!(value_to_string(&json!({"k": 1})), None);
    }

    #[test]
    fn int_field_accepts_numeric_strings() {
        let object = json!({"modelYear": 2018, "other": "2015", "bad": "x"});
        assert_eq!(int_field(&object, "modelYear"), Some(2018));
        assert_eq!(int_field(&object, "other"), Some(2015));
        assert_eq!(int_field(&object, "bad"), None);
        assert_eq!(int_field(&object, "absent"), None);
    }

    #[test]
    fn top_entries_skip_entries_without_value() {
        let blob = json!({"top": [
            {"key": "Mileage", "value": "19.7 kmpl"},
            {"key": "Broken"},
            {"value": "keyless"},
        ]});
        let entries = top_entries(&blob);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], ("Mileage".into(), "19.7 kmpl".into()));
        assert_eq!(entries[1], (String::new(), "keyless".into()));
    }

    #[test]
    fn find_top_value_matches_substring() {
        let blob = json!({"top": [
            {"key": "Registration Year", "value": "2019"},
            {"key": "Ownership", "value": "Second Owner"},
        ]});
        assert_eq!(find_top_value(&blob, "Owner"), Some("Second Owner".into()));
        assert_eq!(find_top_value(&blob, "Insurance"), None);
        assert_eq!(find_top_value(&json!({}), "Owner"), None);
    }

    #[test]
    fn str_field_tolerates_missing_keys() {
        assert_eq!(str_field(&json!({}), "ft"), None);
        assert_eq!(str_field(&json!({"ft": "Diesel"}), "ft"), Some("Diesel".into()));
    }
}
