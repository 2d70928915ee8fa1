//! JSON extraction from free-form generator output.
//!
//! Generators wrap their JSON in prose more often than not. A greedy
//! regex across newlines over- or under-matches on nested braces, so
//! extraction is a small bracket-matching scan instead: find the
//! first `{`, then walk forward tracking brace depth, string context
//! and escapes until the span balances.

/// Locate the first balanced `{...}` span in `text`.
///
/// Returns the span as a sub-slice, or `None` when no opening brace
/// exists or the braces never balance. Braces inside JSON strings
/// (including escaped quotes) do not affect the depth count.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_json_passes_through() {
        let text = r#"{"a": 1}"#;
        assert_eq!(extract_json_object(text), Some(text));
    }

    #[test]
    fn test_leading_and_trailing_prose_stripped() {
        let text = "Sure! Here is the analysis you asked for:\n{\"a\": 1}\nLet me know if you need more.";
        assert_eq!(extract_json_object(text), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_nested_objects_balance() {
        let text = r#"prefix {"outer": {"inner": {"deep": 2}}, "b": []} suffix"#;
        assert_eq!(
            extract_json_object(text),
            Some(r#"{"outer": {"inner": {"deep": 2}}, "b": []}"#)
        );
    }

    #[test]
    fn test_braces_inside_strings_ignored() {
        let text = r#"{"note": "use {curly} braces", "n": 1}"#;
        assert_eq!(extract_json_object(text), Some(text));
    }

    #[test]
    fn test_escaped_quote_inside_string() {
        let text = r#"{"quote": "she said \"hi}\" loudly"}"#;
        assert_eq!(extract_json_object(text), Some(text));
    }

    #[test]
    fn test_no_object_found() {
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object(""), None);
    }

    #[test]
    fn test_unbalanced_braces() {
        assert_eq!(extract_json_object(r#"{"a": {"b": 1}"#), None);
    }

    #[test]
    fn test_first_object_wins() {
        let text = r#"{"first": 1} and then {"second": 2}"#;
        assert_eq!(extract_json_object(text), Some(r#"{"first": 1}"#));
    }

    #[test]
    fn test_multiline_object() {
        let text = "noise\n{\n  \"a\": 1,\n  \"b\": {\n    \"c\": 2\n  }\n}\nnoise";
        let extracted = extract_json_object(text).unwrap();
        let value: serde_json::Value = serde_json::from_str(extracted).unwrap();
        assert_eq!(value["b"]["c"], 2);
    }
}
