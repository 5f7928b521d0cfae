use std::collections::HashSet;

use serde_json::Value;

/// Coerce a raw JSON value to a trimmed string.
///
/// Strings are trimmed. Numbers and booleans render through their display
/// form, since the source sheet stores a few text columns as bare numbers.
/// `null`, arrays and objects collapse to the empty string.
pub fn clean_text(raw: &Value) -> String {
    match raw {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    }
}

/// Read a list field that may arrive as a JSON array or as one comma-joined
/// string. Entries are trimmed, blanks dropped, duplicates dropped
/// case-sensitively keeping the first occurrence.
pub fn string_list(raw: &Value) -> Vec<String> {
    let items: Vec<String> = match raw {
        Value::Array(values) => values.iter().map(clean_text).collect(),
        Value::String(text) => text.split(',').map(|part| part.trim().to_string()).collect(),
        _ => Vec::new(),
    };
    dedup_keep_order(items)
}

/// Drop blank entries and exact duplicates, keeping first-seen order.
pub fn dedup_keep_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::with_capacity(items.len());
    for item in items {
        if item.is_empty() {
            continue;
        }
        if seen.insert(item.clone()) {
            result.push(item);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clean_text_coerces_scalars() {
        assert_eq!(clean_text(&json!("  Honey  ")), "Honey");
        assert_eq!(clean_text(&json!(42)), "42");
        assert_eq!(clean_text(&json!(true)), "true");
        assert_eq!(clean_text(&json!(null)), "");
        assert_eq!(clean_text(&json!({"a": 1})), "");
        assert_eq!(clean_text(&json!(["a"])), "");
    }

    #[test]
    fn test_string_list_splits_comma_joined_text() {
        assert_eq!(
            string_list(&json!("Kandhamal, Koraput , Kandhamal,  ,Rayagada")),
            vec!["Kandhamal", "Koraput", "Rayagada"]
        );
    }

    #[test]
    fn test_string_list_accepts_arrays_with_mixed_scalars() {
        assert_eq!(
            string_list(&json!(["Bark", 7, " Leaf ", null, "Bark"])),
            vec!["Bark", "7", "Leaf"]
        );
    }

    #[test]
    fn test_string_list_rejects_other_shapes() {
        assert!(string_list(&json!(5)).is_empty());
        assert!(string_list(&json!(null)).is_empty());
        assert!(string_list(&json!({"x": 1})).is_empty());
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_order() {
        let input = vec![
            "b".to_string(),
            "a".to_string(),
            "b".to_string(),
            String::new(),
            "c".to_string(),
            "a".to_string(),
        ];
        assert_eq!(dedup_keep_order(input), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let input = vec!["Bark".to_string(), "bark".to_string()];
        assert_eq!(dedup_keep_order(input), vec!["Bark", "bark"]);
    }
}
