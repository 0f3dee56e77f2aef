use serde_json::Value;

/// Display string for a list item or table cell.
///
/// `null` is empty, strings are used as-is, numbers and booleans use their
/// natural form, and arrays/objects fall back to compact JSON.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Number of characters a string occupies in a column
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Right-pad `text` with spaces up to `width` characters
pub fn pad_right(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(text));
    format!("{}{}", text, " ".repeat(padding))
}
