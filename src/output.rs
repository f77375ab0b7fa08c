use serde_json::Value;

/// Formats the raw JSON bytes of a lookup result for printing.
///
/// A top-level JSON string is printed without its quotes so simple values
/// pipe cleanly into other tools. With `pretty` set (stdout is a terminal),
/// anything that looks like an object or array is re-indented with two
/// spaces; text that merely starts with a brace but is not valid JSON falls
/// through untouched. Everything else (numbers, booleans, null) stays as-is.
pub fn format_value(bytes: &[u8], pretty: bool) -> String {
    let text = if bytes.first() == Some(&b'"') {
        match serde_json::from_slice::<String>(bytes) {
            Ok(unquoted) => unquoted,
            Err(_) => String::from_utf8_lossy(bytes).into_owned(),
        }
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    };

    if pretty && (text.starts_with('{') || text.starts_with('[')) {
        if let Ok(value) = serde_json::from_str::<Value>(&text) {
            if let Ok(indented) = serde_json::to_string_pretty(&value) {
                return indented;
            }
        }
    }

    text
}
