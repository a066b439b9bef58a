//! Pre-scan that pulls a JSON object out of surrounding noise.
//!
//! This runs before, and separately from, the strict parse. It only decides
//! which slice to hand to the parser; any structural error inside that slice
//! still surfaces as [`DataError::Malformed`](crate::DataError::Malformed).

/// Returns the first balanced top-level `{ ... }` object in `text`.
///
/// Braces inside string literals (including escaped quotes) do not count
/// toward nesting. Returns `None` if there is no `{` or the first object
/// never closes.
pub fn extract_balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return Some(&text[start..end]);
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
    fn test_clean_object_is_returned_whole() {
        let text = r#"{"Animals": []}"#;
        assert_eq!(extract_balanced_object(text), Some(text));
    }

    #[test]
    fn test_leading_and_trailing_noise_is_dropped() {
        let text = "garbage before {\"a\": {\"b\": 1}} trailing }}} noise";
        assert_eq!(extract_balanced_object(text), Some("{\"a\": {\"b\": 1}}"));
    }

    #[test]
    fn test_braces_inside_strings_are_ignored() {
        let text = r#"xx {"name": "curly } brace {", "quote": "say \"}\""} yy"#;
        assert_eq!(
            extract_balanced_object(text),
            Some(r#"{"name": "curly } brace {", "quote": "say \"}\""}"#)
        );
    }

    #[test]
    fn test_only_first_object_is_taken() {
        let text = r#"{"first": 1} {"second": 2}"#;
        assert_eq!(extract_balanced_object(text), Some(r#"{"first": 1}"#));
    }

    #[test]
    fn test_unbalanced_object_yields_none() {
        assert_eq!(extract_balanced_object(r#"{"Animals": [ {"name": "x"} "#), None);
    }

    #[test]
    fn test_no_object_yields_none() {
        assert_eq!(extract_balanced_object("no json here"), None);
        assert_eq!(extract_balanced_object(""), None);
    }

    #[test]
    fn test_multibyte_text_around_object() {
        let text = "🌍 {\"habitat\": \"Forêt\"} ✨";
        assert_eq!(extract_balanced_object(text), Some("{\"habitat\": \"Forêt\"}"));
    }
}
