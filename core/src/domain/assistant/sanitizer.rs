use serde_json::Value;

/// Characters stripped from every free-text field before it reaches a prompt.
pub const UNSAFE_CHARACTERS: [char; 5] = ['<', '>', '"', '\'', '&'];

pub const MAX_INGREDIENT_LENGTH: usize = 100;
pub const MAX_RECIPE_CONTEXT_LENGTH: usize = 200;
pub const MAX_SEARCH_QUERY_LENGTH: usize = 500;
pub const MAX_PREFERENCE_LENGTH: usize = 50;
pub const MAX_LIST_ENTRY_LENGTH: usize = 100;
pub const MAX_LIST_ENTRIES: usize = 10;
pub const MAX_RECIPE_NAME_LENGTH: usize = 100;
pub const MAX_RECIPE_INGREDIENTS: usize = 50;

/// Strips [`UNSAFE_CHARACTERS`], trims, then keeps at most `max_len` characters.
pub fn sanitize(text: &str, max_len: usize) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| !UNSAFE_CHARACTERS.contains(c))
        .collect();

    stripped.trim().chars().take(max_len).collect()
}

/// Sanitizes the string entries of `items`, dropping anything that is not a string.
pub fn sanitize_list(items: &[Value], max_len: usize, max_count: usize) -> Vec<String> {
    items
        .iter()
        .filter_map(Value::as_str)
        .map(|item| sanitize(item, max_len))
        .take(max_count)
        .collect()
}

/// Like [`sanitize`] but for an optional JSON value; non-strings become empty.
pub fn sanitize_value(value: Option<&Value>, max_len: usize) -> String {
    value
        .and_then(Value::as_str)
        .map(|text| sanitize(text, max_len))
        .unwrap_or_default()
}

/// Like [`sanitize_list`] but for an optional JSON value; non-arrays become empty.
pub fn sanitize_list_value(value: Option<&Value>, max_len: usize, max_count: usize) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| sanitize_list(items, max_len, max_count))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sanitize_removes_unsafe_characters() {
        let cleaned = sanitize(r#"<script>alert("x") & 'y'</script>"#, 500);
        assert_eq!(cleaned, "scriptalert(x)  y/script");
        assert!(!cleaned.contains(UNSAFE_CHARACTERS));
    }

    #[test]
    fn test_sanitize_trims_before_truncating() {
        assert_eq!(sanitize("   palta   ", 100), "palta");
        assert_eq!(sanitize("  <merkén> picante", 6), "merkén");
    }

    #[test]
    fn test_sanitize_never_exceeds_max_len() {
        let inputs = ["", "ají", "pastel de choclo con pino", "ñññññññññññ"];
        for input in inputs {
            for max_len in 0..12 {
                assert!(sanitize(input, max_len).chars().count() <= max_len);
            }
        }
    }

    #[test]
    fn test_sanitize_counts_unicode_scalars() {
        assert_eq!(sanitize("ají🌶🌶", 4), "ají🌶");
        assert_eq!(sanitize("🌶", 1), "🌶");
    }

    #[test]
    fn test_sanitize_empty_input() {
        assert_eq!(sanitize("", 10), "");
        assert_eq!(sanitize("<>\"'&", 10), "");
    }

    #[test]
    fn test_sanitize_list_drops_non_strings_and_caps_length() {
        let items = vec![
            json!("vegano"),
            json!(42),
            json!(null),
            json!({"kind": "gluten"}),
            json!("sin <gluten>"),
        ];

        assert_eq!(
            sanitize_list(&items, 100, 10),
            vec!["vegano".to_string(), "sin gluten".to_string()]
        );
        assert_eq!(sanitize_list(&items, 100, 1), vec!["vegano".to_string()]);
    }

    #[test]
    fn test_sanitize_list_keeps_order_and_applies_max_len() {
        let items: Vec<Value> = (0..15).map(|i| json!(format!("restriction-{i}"))).collect();
        let cleaned = sanitize_list(&items, 5, MAX_LIST_ENTRIES);

        assert_eq!(cleaned.len(), MAX_LIST_ENTRIES);
        assert!(cleaned.iter().all(|entry| entry == "restr"));
    }

    #[test]
    fn test_sanitize_value_ignores_non_strings() {
        assert_eq!(sanitize_value(Some(&json!(12)), 10), "");
        assert_eq!(sanitize_value(None, 10), "");
        assert_eq!(sanitize_value(Some(&json!(" cena ")), 10), "cena");
        assert!(sanitize_list_value(Some(&json!("vegano")), 10, 10).is_empty());
    }
}
