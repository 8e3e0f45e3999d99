/// Quote a value as a JavaScript string literal.
///
/// JSON string syntax is a subset of JavaScript's, so `serde_json` does the
/// escaping for quotes, backslashes and control characters.
pub fn format_as_js_literal(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value))
}
