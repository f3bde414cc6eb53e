//! Minimal JSONC helpers: comment stripping for template input and the
//! `", "`-separated inline formatting used in the generated `config.jsonc`.

use serde_json::Value;

/// Remove `//` line comments that are not inside a string literal.
///
/// The newline that ends a comment is kept so line numbers in parse errors
/// still line up with the source file.
pub fn strip_line_comments(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    let mut chars = src.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' if chars.peek() == Some(&'/') => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            _ => out.push(c),
        }
    }

    out
}

/// Render `value` on a single line with `", "` and `": "` separators.
pub fn inline(value: &Value) -> String {
    match value {
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(inline).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) => {
            let fields: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", Value::String(k.clone()), inline(v)))
                .collect();
            format!("{{{}}}", fields.join(", "))
        }
        // Scalars: serde_json's compact form already matches.
        other => other.to_string(),
    }
}

/// Render an array with one element per line.
///
/// Elements are indented by `item_indent` spaces, the closing bracket by
/// `close_indent`. Empty arrays and non-array values fall back to [`inline`].
pub fn block(value: &Value, item_indent: usize, close_indent: usize) -> String {
    match value {
        Value::Array(items) if !items.is_empty() => {
            let pad = " ".repeat(item_indent);
            let items: Vec<String> = items.iter().map(|v| format!("{pad}{}", inline(v))).collect();
            format!("[\n{}\n{}]", items.join(",\n"), " ".repeat(close_indent))
        }
        other => inline(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strips_comments_outside_strings() {
        let src = "{\n  // layer\n  \"include\": \"$HOME//modules\", // trailing\n  \"a\": 1\n}";
        let stripped = strip_line_comments(src);
        assert!(!stripped.contains("layer"));
        assert!(!stripped.contains("trailing"));
        assert!(stripped.contains("\"$HOME//modules\""));

        let parsed: Value = serde_json::from_str(&stripped).expect("valid json after stripping");
        assert_eq!(parsed["a"], json!(1));
    }

    #[test]
    fn escaped_quote_does_not_end_string() {
        let src = r#"{"a": "say \"//hi\""}"#;
        assert_eq!(strip_line_comments(src), src);
    }

    #[test]
    fn inline_uses_spaced_separators() {
        assert_eq!(inline(&json!(["*"])), r#"["*"]"#);
        assert_eq!(inline(&json!(["a", "b"])), r#"["a", "b"]"#);
        assert_eq!(inline(&json!({"k": [1, true]})), r#"{"k": [1, true]}"#);
        assert_eq!(inline(&json!("top")), r#""top""#);
        assert_eq!(inline(&json!(false)), "false");
    }

    #[test]
    fn block_lists_one_item_per_line() {
        assert_eq!(block(&json!(["clock", "tray"]), 8, 4), "[\n        \"clock\",\n        \"tray\"\n    ]");
        assert_eq!(block(&json!([]), 8, 4), "[]");
    }
}
