//! Tolerant reading of JSON with comments and trailing commas.
//!
//! Comments and trailing commas are blanked out with spaces rather than
//! removed, so byte offsets in the sanitized text match the original and
//! parse errors can point into the source file.

/// Replace `//` and `/* */` comments and trailing commas with whitespace.
pub(crate) fn sanitize(input: &str) -> String {
    let mut bytes = input.as_bytes().to_vec();

    // A UTF-8 byte order mark is three bytes wide
    if input.starts_with('\u{feff}') {
        bytes[..3].fill(b' ');
    }

    blank_comments(&mut bytes);
    blank_trailing_commas(&mut bytes);

    // Only ASCII bytes were written, and only over whole comments
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Skip a string literal starting at the opening quote; returns the index
/// just past the closing quote.
fn skip_string(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn blank_comments(bytes: &mut [u8]) {
    let len = bytes.len();
    let mut i = 0;

    while i < len {
        match bytes[i] {
            b'"' => i = skip_string(bytes, i),
            // Line comment
            b'/' if i + 1 < len && bytes[i + 1] == b'/' => {
                while i < len && bytes[i] != b'\n' {
                    bytes[i] = b' ';
                    i += 1;
                }
            }
            // Block comment, newlines kept so line numbers survive
            b'/' if i + 1 < len && bytes[i + 1] == b'*' => {
                bytes[i] = b' ';
                bytes[i + 1] = b' ';
                i += 2;
                while i < len {
                    if bytes[i] == b'*' && i + 1 < len && bytes[i + 1] == b'/' {
                        bytes[i] = b' ';
                        bytes[i + 1] = b' ';
                        i += 2;
                        break;
                    }
                    if bytes[i] != b'\n' {
                        bytes[i] = b' ';
                    }
                    i += 1;
                }
            }
            _ => i += 1,
        }
    }
}

fn blank_trailing_commas(bytes: &mut [u8]) {
    let len = bytes.len();
    let mut i = 0;

    while i < len {
        match bytes[i] {
            b'"' => i = skip_string(bytes, i),
            b',' => {
                let next = bytes[i + 1..]
                    .iter()
                    .find(|b| !b.is_ascii_whitespace());
                if matches!(next, Some(b'}' | b']')) {
                    bytes[i] = b' ';
                }
                i += 1;
            }
            _ => i += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_line_comments() {
        let input = "{\n  // This is a comment\n  \"a\": 1\n}";
        let value: serde_json::Value = serde_json::from_str(&sanitize(input)).unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn test_removes_block_comments() {
        let input = "{\n  /* block\n     comment */\n  \"a\": 1\n}";
        let value: serde_json::Value = serde_json::from_str(&sanitize(input)).unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn test_preserves_strings_with_slashes() {
        let input = r#"{"extends": "./.svelte-kit/tsconfig.json", "glob": "src/**/*.ts"}"#;
        let value: serde_json::Value = serde_json::from_str(&sanitize(input)).unwrap();
        assert_eq!(value["extends"], "./.svelte-kit/tsconfig.json");
        assert_eq!(value["glob"], "src/**/*.ts");
    }

    #[test]
    fn test_preserves_escaped_quotes() {
        let input = r#"{"a": "say \"hi\" // not a comment",}"#;
        let value: serde_json::Value = serde_json::from_str(&sanitize(input)).unwrap();
        assert_eq!(value["a"], "say \"hi\" // not a comment");
    }

    #[test]
    fn test_removes_trailing_commas() {
        let input = "{\n  \"a\": [1, 2,],\n  \"b\": {\"c\": true,},\n}";
        let value: serde_json::Value = serde_json::from_str(&sanitize(input)).unwrap();
        assert_eq!(value["a"], serde_json::json!([1, 2]));
        assert_eq!(value["b"]["c"], true);
    }

    #[test]
    fn test_trailing_comma_before_comment() {
        let input = "{\n  \"a\": 1, // last\n}";
        let value: serde_json::Value = serde_json::from_str(&sanitize(input)).unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn test_keeps_offsets() {
        let input = "{ /* é */ \"a\": 1 }";
        assert_eq!(sanitize(input).len(), input.len());
    }

    #[test]
    fn test_strips_byte_order_mark() {
        let input = "\u{feff}{\"a\": 1}";
        let value: serde_json::Value = serde_json::from_str(&sanitize(input)).unwrap();
        assert_eq!(value["a"], 1);
    }
}
